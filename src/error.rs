use console::style;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    /// The user cancelled the interactive session.
    #[error("Input aborted.")]
    Aborted,

    #[error("Cannot process the manifest '{path}': {detail}.")]
    ManifestError { path: String, detail: String },

    /// When an external command ran but finished with a non-zero status.
    #[error("Command '{program}' failed with status {status}.")]
    CommandError { program: String, status: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) => {
                if e.kind() == std::io::ErrorKind::Interrupted {
                    Error::Aborted
                } else {
                    Error::IoError(e)
                }
            }
        }
    }
}

/// Convenience type alias for Results with liftoff's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// A user abort prints a short notice and exits with status code 0; everything
/// else goes to stderr with status code 1.
pub fn default_error_handler(err: Error) {
    match err {
        Error::Aborted => {
            println!("{}", style("Bootstrap aborted!").red().bold());
            std::process::exit(exit_codes::SUCCESS);
        }
        _ => {
            eprintln!("{err}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_io_maps_to_abort() {
        let io = std::io::Error::new(std::io::ErrorKind::Interrupted, "read interrupted");
        let err: Error = dialoguer::Error::IO(io).into();
        assert!(matches!(err, Error::Aborted));
    }

    #[test]
    fn other_io_maps_to_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: Error = dialoguer::Error::IO(io).into();
        assert!(matches!(err, Error::IoError(_)));
    }
}

//! Scaffold cleanup and version-control reinitialization.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    exec::CommandExecutor,
};

/// Deletes each listed path under `root`. Files and directories are both
/// handled; an already-absent path is not an error.
pub fn remove_paths(root: &Path, paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        let target = root.join(path);
        let metadata = match fs::symlink_metadata(&target) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("'{}' already absent, nothing to remove", target.display());
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if metadata.is_dir() {
            fs::remove_dir_all(&target)?;
        } else {
            fs::remove_file(&target)?;
        }
        log::debug!("Removed '{}'", target.display());
    }
    Ok(())
}

/// Reinitializes version control at the project root from a clean state.
///
/// The prior history is expected to have been removed already; this creates a
/// fresh repository in its place.
pub fn reinit_vcs(root: &Path, executor: &dyn CommandExecutor) -> Result<String> {
    let output = executor.capture("git", &["init"], root)?;

    if !output.success {
        return Err(Error::CommandError {
            program: "git init".to_string(),
            status: output.code.map_or_else(|| "signal".to_string(), |c| c.to_string()),
        });
    }

    Ok(output.trimmed_stdout().to_string())
}

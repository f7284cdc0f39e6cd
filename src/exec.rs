//! External process execution.
//!
//! Version-control queries and the package-manager invocation go through the
//! [`CommandExecutor`] trait so tests can substitute a fake executor.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::Result;

/// Captured result of an external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// The command's stdout with surrounding whitespace removed.
    pub fn trimmed_stdout(&self) -> &str {
        self.stdout.trim()
    }
}

/// Interface for running external commands.
pub trait CommandExecutor {
    /// Runs a command with captured stdout/stderr.
    fn capture(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput>;

    /// Runs a command with inherited stdio, capturing only the exit status.
    fn stream(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput>;
}

/// Executor backed by `std::process::Command`.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn capture(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
        log::debug!("Running '{program} {}' in {}", args.join(" "), cwd.display());

        let output =
            Command::new(program).args(args).current_dir(cwd).stdin(Stdio::null()).output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn stream(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
        log::debug!("Streaming '{program} {}' in {}", args.join(" "), cwd.display());

        let status = Command::new(program).args(args).current_dir(cwd).status()?;

        Ok(CommandOutput {
            success: status.success(),
            code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

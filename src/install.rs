//! Dependency installation through the external package manager.

use std::path::Path;

use crate::{
    error::{Error, Result},
    exec::CommandExecutor,
};

/// Picks the package manager from the lockfile present in the project root.
pub fn detect_package_manager(root: &Path) -> &'static str {
    if root.join("yarn.lock").exists() {
        "yarn"
    } else {
        "npm"
    }
}

/// Installs the dependency set reflected in the trimmed manifest.
///
/// The package manager runs with inherited stdio so its own progress output
/// reaches the terminal; its exit status is propagated, not interpreted.
pub fn install_dependencies(root: &Path, executor: &dyn CommandExecutor) -> Result<()> {
    let program = detect_package_manager(root);
    let args: &[&str] = if program == "npm" { &["install"] } else { &[] };

    let output = executor.stream(program, args, root)?;
    if !output.success {
        return Err(Error::CommandError {
            program: program.to_string(),
            status: output.code.map_or_else(|| "signal".to_string(), |c| c.to_string()),
        });
    }
    Ok(())
}

//! Static bootstrap configuration.
//!
//! The file lists and manifest denylists are fixed properties of the scaffold.
//! They are carried in an explicit value that every pipeline stage receives as
//! an argument rather than being read from ambient state.

use std::path::{Path, PathBuf};

use crate::constants::{
    DEV_DEPENDENCY_DENYLIST, MANIFEST_FILE, REMOVAL_PATHS, SCRIPT_DENYLIST, TARGET_FILES,
};

/// Immutable description of what the bootstrap run touches.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Project root containing the scaffold.
    pub root: PathBuf,
    /// Files rewritten in place during placeholder substitution, relative to the root.
    pub target_files: Vec<PathBuf>,
    /// Paths deleted during cleanup, relative to the root.
    pub removal_paths: Vec<PathBuf>,
    /// The package manifest file, relative to the root.
    pub manifest_file: PathBuf,
    /// Dev-dependency keys dropped from the manifest.
    pub dev_dependency_denylist: Vec<String>,
    /// Script keys dropped from the manifest.
    pub script_denylist: Vec<String>,
}

impl BootstrapConfig {
    /// Builds the standard configuration for the library scaffold rooted at `root`.
    pub fn standard<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            target_files: TARGET_FILES.iter().map(PathBuf::from).collect(),
            removal_paths: REMOVAL_PATHS.iter().map(PathBuf::from).collect(),
            manifest_file: PathBuf::from(MANIFEST_FILE),
            dev_dependency_denylist: DEV_DEPENDENCY_DENYLIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
            script_denylist: SCRIPT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Absolute path to the package manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_lists_all_target_files() {
        let config = BootstrapConfig::standard("/tmp/project");
        assert_eq!(config.target_files.len(), TARGET_FILES.len());
        assert!(config.target_files.contains(&PathBuf::from("LICENSE")));
        assert!(config.target_files.contains(&PathBuf::from("doczrc.js")));
    }

    #[test]
    fn manifest_path_is_rooted() {
        let config = BootstrapConfig::standard("/tmp/project");
        assert_eq!(config.manifest_path(), PathBuf::from("/tmp/project/package.json"));
    }

    #[test]
    fn removal_paths_include_vcs_directory() {
        let config = BootstrapConfig::standard(".");
        assert!(config.removal_paths.contains(&PathBuf::from(".git")));
    }
}

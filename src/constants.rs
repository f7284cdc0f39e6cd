//! Constants used throughout the Liftoff application

/// Placeholder token replaced with the resolved library name.
pub const LIBRARY_NAME_TOKEN: &str = "--libraryname--";

/// Placeholder token replaced with the user's full name.
pub const FULL_NAME_TOKEN: &str = "--fullname--";

/// Placeholder token replaced with the configured version-control user name.
pub const USER_NAME_TOKEN: &str = "--username--";

/// Placeholder token replaced with the configured version-control user email.
pub const USER_EMAIL_TOKEN: &str = "--useremail--";

/// Placeholder token replaced with the current four-digit year.
pub const YEAR_TOKEN: &str = "--year--";

/// The package manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Scaffold files rewritten during placeholder substitution.
pub const TARGET_FILES: &[&str] = &[
    "LICENSE",
    "CONTRIBUTING.md",
    "CODE-OF-CONDUCT.md",
    "README.md",
    "package.json",
    "scripts/gh-pages-publish.js",
    "doczrc.js",
];

/// Scaffold-only paths deleted after substitution and manifest editing.
pub const REMOVAL_PATHS: &[&str] = &[".gitattributes", "scripts/bootstrap.js", ".git"];

/// Dev dependencies that were only needed by the bootstrap step itself.
pub const DEV_DEPENDENCY_DENYLIST: &[&str] = &["enquirer", "chalk", "replace-in-file"];

/// Manifest scripts removed along with the bootstrap step.
pub const SCRIPT_DENYLIST: &[&str] = &["bootstrap"];

/// Candidate library name used when the directory name normalizes to nothing.
pub const FALLBACK_LIBRARY_NAME: &str = "my-lib";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

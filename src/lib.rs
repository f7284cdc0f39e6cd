/// Handles argument parsing and pipeline orchestration.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Answer collection and library-name resolution.
pub mod answers;

/// Scaffold cleanup and version-control reinitialization.
pub mod cleanup;

/// Static bootstrap configuration passed explicitly into each stage.
pub mod config;

/// Constants used throughout the application.
pub mod constants;

/// External process execution.
pub mod exec;

/// Dependency installation through the package manager.
pub mod install;

/// A set of helpers for working with the file system and stdin.
pub mod ioutils;

/// Package-manifest loading and denylist-based trimming.
pub mod manifest;

/// User input and interaction handling.
pub mod prompt;

/// The fixed interactive question set.
pub mod question;

/// In-place placeholder substitution over scaffold files.
pub mod replacer;

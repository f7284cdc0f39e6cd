//! In-place placeholder substitution over the scaffold's fixed file list.
//!
//! Placeholders are literal marker tokens, never natural-language phrases, so
//! plain global string replacement is unambiguous.

use chrono::Datelike;
use std::fs;
use std::path::Path;

use crate::{
    answers::AnswerSet,
    constants::{
        FULL_NAME_TOKEN, LIBRARY_NAME_TOKEN, USER_EMAIL_TOKEN, USER_NAME_TOKEN, YEAR_TOKEN,
    },
    error::Result,
    exec::CommandExecutor,
};

/// A single (token, replacement) pair.
#[derive(Debug, Clone)]
pub struct Placeholder {
    pub token: &'static str,
    pub value: String,
}

/// What to do when a single file cannot be rewritten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailurePolicy {
    /// Log the failure and keep processing the remaining files.
    BestEffort,
    /// Abort the run on the first failing file.
    Abort,
}

/// Builds the ordered placeholder map from the answer set, the local
/// version-control configuration, and the current year.
pub fn build_placeholder_map(
    answers: &AnswerSet,
    root: &Path,
    executor: &dyn CommandExecutor,
) -> Vec<Placeholder> {
    vec![
        Placeholder { token: LIBRARY_NAME_TOKEN, value: answers.library_name.clone() },
        Placeholder { token: FULL_NAME_TOKEN, value: answers.full_name.clone() },
        Placeholder { token: USER_NAME_TOKEN, value: vcs_config_value(executor, root, "user.name") },
        Placeholder {
            token: USER_EMAIL_TOKEN,
            value: vcs_config_value(executor, root, "user.email"),
        },
        Placeholder { token: YEAR_TOKEN, value: chrono::Local::now().year().to_string() },
    ]
}

/// Reads a value from the local version-control configuration. An unset key or
/// a failing query resolves to an empty replacement, matching the best-effort
/// nature of this stage.
fn vcs_config_value(executor: &dyn CommandExecutor, root: &Path, key: &str) -> String {
    match executor.capture("git", &["config", key], root) {
        Ok(output) if output.success => output.trimmed_stdout().to_string(),
        Ok(_) => {
            log::warn!("'git config {key}' returned no value, substituting empty string");
            String::new()
        }
        Err(err) => {
            log::warn!("Could not query 'git config {key}': {err}");
            String::new()
        }
    }
}

/// Rewrites every target file in place, replacing all occurrences of every
/// placeholder token.
pub fn substitute_all(
    root: &Path,
    target_files: &[std::path::PathBuf],
    placeholders: &[Placeholder],
    policy: FailurePolicy,
) -> Result<()> {
    for file in target_files {
        let path = root.join(file);
        match substitute_file(&path, placeholders) {
            Ok(count) => {
                log::debug!("Replaced {count} placeholder occurrences in {}", path.display());
            }
            Err(err) => match policy {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::BestEffort => {
                    log::error!(
                        "An error occurred modifying the file '{}': {err}",
                        path.display()
                    );
                }
            },
        }
    }
    Ok(())
}

/// Replaces all placeholder occurrences in a single file, returning how many
/// were substituted. The file is only rewritten when something changed.
pub fn substitute_file(path: &Path, placeholders: &[Placeholder]) -> Result<usize> {
    let mut content = fs::read_to_string(path)?;
    let mut count = 0;

    for placeholder in placeholders {
        let occurrences = content.matches(placeholder.token).count();
        if occurrences > 0 {
            content = content.replace(placeholder.token, &placeholder.value);
            count += occurrences;
        }
    }

    if count > 0 {
        fs::write(path, content)?;
    }
    Ok(count)
}

//! The fixed, ordered question set asked during bootstrap.
//!
//! Questions form an explicit linear list. Each entry carries a predicate over
//! the answers accumulated so far; a question whose predicate returns false is
//! skipped without prompting.

use serde_json::{Map, Value};

/// Answer keys used in the accumulated answer record.
pub mod keys {
    pub const FULL_NAME: &str = "full_name";
    pub const USE_CURRENT_LIBRARY_NAME: &str = "use_current_library_name";
    pub const LIBRARY_NAME: &str = "library_name";
}

/// Kind of prompt a question presents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuestionKind {
    Text,
    Confirm,
}

/// A single question in the bootstrap dialog.
pub struct Question {
    /// Key under which the answer is stored.
    pub key: &'static str,
    pub kind: QuestionKind,
    /// Prompt text displayed to the user.
    pub help: String,
    /// Default used when the question is not asked interactively.
    pub default: Value,
    /// Predicate over previously accumulated answers deciding whether to ask.
    pub ask_if: fn(&Map<String, Value>) -> bool,
}

fn always(_: &Map<String, Value>) -> bool {
    true
}

fn declined_current_name(answers: &Map<String, Value>) -> bool {
    !answers
        .get(keys::USE_CURRENT_LIBRARY_NAME)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Builds the question list for a scaffold whose directory-derived candidate
/// library name is `candidate_name`.
pub fn question_list(candidate_name: &str) -> Vec<Question> {
    vec![
        Question {
            key: keys::FULL_NAME,
            kind: QuestionKind::Text,
            help: "What is your first and last name?".to_string(),
            default: Value::String(String::new()),
            ask_if: always,
        },
        Question {
            key: keys::USE_CURRENT_LIBRARY_NAME,
            kind: QuestionKind::Confirm,
            help: format!("Do you want to use '{candidate_name}' as the library name?"),
            default: Value::Bool(true),
            ask_if: always,
        },
        Question {
            key: keys::LIBRARY_NAME,
            kind: QuestionKind::Text,
            help: "What is the library name?".to_string(),
            default: Value::String(String::new()),
            ask_if: declined_current_name,
        },
    ]
}

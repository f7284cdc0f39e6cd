//! Answer collection and library-name resolution.
//!
//! Answers accumulate in a single record; each question's predicate is
//! evaluated against that record, and predefined answers short-circuit the
//! matching prompt entirely.

use console::style;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::{
    constants::FALLBACK_LIBRARY_NAME,
    error::Result,
    prompt::{ConfirmationConfig, PromptProvider, TextPromptConfig},
    question::{keys, question_list, Question, QuestionKind},
};

/// The completed answer set driving the rest of the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerSet {
    pub full_name: String,
    pub use_current_library_name: bool,
    /// Always non-empty by the time substitution runs.
    pub library_name: String,
}

/// Normalizes a raw name to a lowercase hyphen-separated token: lowercased,
/// non-alphanumeric runs collapsed to single hyphens, no leading or trailing
/// hyphens.
pub fn normalize_library_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let collapsed = match Regex::new(r"[^a-z0-9]+") {
        Ok(re) => re.replace_all(&lowered, "-").into_owned(),
        Err(err) => {
            log::warn!("Invalid normalization pattern: {err}");
            lowered
        }
    };
    collapsed.trim_matches('-').to_string()
}

/// Tests whether a value already is a lowercase, hyphen-separated token.
pub fn is_kebab_case(value: &str) -> bool {
    match Regex::new(r"^[a-z]+(-[a-z]+)*$") {
        Ok(re) => re.is_match(value),
        Err(err) => {
            log::warn!("Invalid kebab-case pattern: {err}");
            true
        }
    }
}

/// Derives the candidate library name from the project root's directory name.
pub fn current_library_name(root: &Path) -> String {
    let basename = std::fs::canonicalize(root)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default();

    let normalized = normalize_library_name(&basename);
    if normalized.is_empty() {
        log::debug!("Directory name '{basename}' normalized to nothing, using fallback");
        FALLBACK_LIBRARY_NAME.to_string()
    } else {
        normalized
    }
}

/// Collects answers from predefined values and interactive prompts.
pub struct AnswerCollector<'a> {
    provider: &'a dyn PromptProvider,
    non_interactive: bool,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(provider: &'a dyn PromptProvider, non_interactive: bool) -> Self {
        Self { provider, non_interactive }
    }

    /// Walks the question list in order, skipping questions whose predicate
    /// fails or whose key is already answered, and resolves the final set.
    pub fn collect(
        &self,
        candidate: &str,
        predefined: Map<String, Value>,
    ) -> Result<AnswerSet> {
        let mut answers = predefined;

        for question in question_list(candidate) {
            if answers.contains_key(question.key) {
                log::debug!("Answer for '{}' already provided, not asking", question.key);
                continue;
            }
            if !(question.ask_if)(&answers) {
                log::debug!("Skipping '{}', its condition is false", question.key);
                continue;
            }
            if self.non_interactive {
                answers.insert(question.key.to_string(), question.default.clone());
                continue;
            }

            let answer = self.ask(&question)?;
            if question.key == keys::LIBRARY_NAME {
                warn_unless_kebab(answer.as_str().unwrap_or(""));
            }
            answers.insert(question.key.to_string(), answer);
        }

        Ok(resolve_answers(&answers, candidate))
    }

    fn ask(&self, question: &Question) -> Result<Value> {
        match question.kind {
            QuestionKind::Text => {
                let config = TextPromptConfig {
                    prompt: question.help.clone(),
                    default: question.default.as_str().map(str::to_string),
                    allow_empty: true,
                };
                Ok(Value::String(self.provider.prompt_text(&config)?))
            }
            QuestionKind::Confirm => {
                let config = ConfirmationConfig {
                    prompt: question.help.clone(),
                    default: question.default.as_bool().unwrap_or(false),
                };
                Ok(Value::Bool(self.provider.prompt_confirmation(&config)?))
            }
        }
    }
}

/// Lenient validation: a non-kebab name only produces a warning and the value
/// is still accepted.
fn warn_unless_kebab(value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !is_kebab_case(trimmed) {
        println!(
            "{}",
            style("please use \"kebab-case\": lowercase letters, with hyphens for any punctuation")
                .yellow()
        );
        log::warn!("Library name '{trimmed}' is not kebab-case, accepting it anyway");
    }
}

/// Resolves the accumulated answer record into a complete [`AnswerSet`].
///
/// The library name falls back to the directory-derived candidate when the
/// user confirmed the current name or left the input empty.
pub fn resolve_answers(answers: &Map<String, Value>, candidate: &str) -> AnswerSet {
    let full_name = answers
        .get(keys::FULL_NAME)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string();

    let use_current_library_name = answers
        .get(keys::USE_CURRENT_LIBRARY_NAME)
        .and_then(Value::as_bool)
        .unwrap_or(true);

    let raw_name =
        answers.get(keys::LIBRARY_NAME).and_then(Value::as_str).unwrap_or_default().trim();

    let library_name = if use_current_library_name || raw_name.is_empty() {
        candidate.to_string()
    } else {
        raw_name.to_string()
    };

    AnswerSet { full_name, use_current_library_name, library_name }
}

//! Dialoguer-based implementations of the prompt interfaces

use dialoguer::{Confirm, Input};

use super::interface::{ConfirmationConfig, TextPromptConfig};
use crate::error::Result;

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(&config.prompt);

        if config.allow_empty {
            input = input.allow_empty(true);
        }
        if let Some(default) = &config.default {
            if !default.is_empty() {
                input = input.default(default.clone());
            }
        }

        Ok(input.interact_text()?)
    }
}

impl super::interface::ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let result =
            Confirm::new().with_prompt(&config.prompt).default(config.default).interact()?;

        Ok(result)
    }
}

//! Interactive dialog utilities for user input
//!
//! This module separates abstract prompt interfaces from their terminal-backed
//! implementation so answer collection can run against scripted providers in
//! tests.

pub mod dialoguer;
pub mod interface;

pub use dialoguer::DialoguerPrompter;
pub use interface::{
    ConfirmationConfig, ConfirmationPrompter, PromptProvider, TextPromptConfig,
    TextPrompter,
};

//! Shared domain types and rules for the PromptDeck service.

pub mod error;
pub mod images;
pub mod types;

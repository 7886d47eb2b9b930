//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `promptdeck_db` and map errors
//! via [`crate::error::AppError`].

pub mod prompt;
pub mod search;
pub mod structure;
pub mod subtopic;

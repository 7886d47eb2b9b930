//! PromptDeck API server library.
//!
//! Exposes the core building blocks (config, state, error handling, forms,
//! routes, upload lifecycle) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod uploads;

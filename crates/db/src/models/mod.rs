//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` / plain DTOs used by repositories and handlers

pub mod domain;
pub mod prompt;
pub mod prompt_image;
pub mod subtopic;

//! Prompt entity model and DTOs.

use promptdeck_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub is_template: bool,
    /// Free-form template options payload (`key -> list of choices`).
    pub configurable_options: Option<serde_json::Value>,
    pub subtopic_id: DbId,
}

/// Validated fields for inserting or fully replacing a prompt row.
///
/// `subtopic_id` comes from the hierarchy resolver, never from the client.
#[derive(Debug, Clone)]
pub struct PromptWrite {
    pub title: String,
    pub content: String,
    pub is_template: bool,
    pub configurable_options: Option<serde_json::Value>,
    pub subtopic_id: DbId,
}

/// A prompt joined with its subtopic and domain, as served by the write and
/// search endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptWithContext {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub is_template: bool,
    pub configurable_options: Option<serde_json::Value>,
    pub subtopic_id: DbId,
    pub subtopic_name: String,
    pub domain_id: DbId,
    pub domain_name: String,
}

/// Minimal prompt reference used in the structure payload.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptRef {
    pub id: DbId,
    pub title: String,
    #[serde(skip_serializing)]
    pub subtopic_id: DbId,
}

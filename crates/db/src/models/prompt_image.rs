//! Prompt image attachment model.

use promptdeck_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `prompt_images` table.
///
/// `filename` is the opaque generated name of the file in the upload
/// directory; the row and the file live and die together.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptImage {
    pub id: DbId,
    pub prompt_id: DbId,
    pub filename: String,
    /// 0-based position assigned at attachment time; never renumbered.
    pub sort_order: i32,
}

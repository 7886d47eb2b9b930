//! Domain entity model.

use promptdeck_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `domains` table: a top-level taxonomy category.
///
/// Domains are never created or deleted directly; the hierarchy resolver
/// creates them on first reference and the cascade pruner removes them once
/// their last subtopic is gone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Domain {
    pub id: DbId,
    pub name: String,
}

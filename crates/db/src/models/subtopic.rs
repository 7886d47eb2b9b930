//! Subtopic entity model.

use promptdeck_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `subtopics` table: a second-level taxonomy category scoped
/// to one domain.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subtopic {
    pub id: DbId,
    pub name: String,
    pub domain_id: DbId,
}

/// A subtopic joined with its owning domain, for list endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubtopicWithDomain {
    pub id: DbId,
    pub name: String,
    pub domain_id: DbId,
    pub domain_name: String,
}

//! Repository for the `subtopics` table.

use sqlx::PgPool;

use crate::models::subtopic::{Subtopic, SubtopicWithDomain};

/// Read operations for subtopics. Writes go through
/// [`super::TaxonomyRepo`], which owns find-or-create and pruning.
pub struct SubtopicRepo;

impl SubtopicRepo {
    /// List all subtopics joined with their domain, ordered by subtopic name.
    pub async fn list_with_domain(pool: &PgPool) -> Result<Vec<SubtopicWithDomain>, sqlx::Error> {
        sqlx::query_as::<_, SubtopicWithDomain>(
            "SELECT s.id, s.name, d.id AS domain_id, d.name AS domain_name
             FROM subtopics s
             JOIN domains d ON d.id = s.domain_id
             ORDER BY s.name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// List all subtopics ordered case-insensitively by name, for assembling
    /// the structure payload.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Subtopic>, sqlx::Error> {
        sqlx::query_as::<_, Subtopic>(
            "SELECT id, name, domain_id FROM subtopics ORDER BY LOWER(name) ASC",
        )
        .fetch_all(pool)
        .await
    }
}

//! Repository for the `domains` table.

use sqlx::PgPool;

use crate::models::domain::Domain;

/// Read operations for domains. Writes go through
/// [`super::TaxonomyRepo`], which owns find-or-create and pruning.
pub struct DomainRepo;

impl DomainRepo {
    /// List all domains ordered by name ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Domain>, sqlx::Error> {
        sqlx::query_as::<_, Domain>("SELECT id, name FROM domains ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }
}

//! Hierarchy maintenance for the Domain → Subtopic taxonomy.
//!
//! Both operations take `&mut PgConnection` so they compose into the caller's
//! transaction: resolver inserts commit (or roll back) together with the
//! prompt write they accompany, and pruning observes the just-deleted prompt
//! row before anything commits.

use promptdeck_core::types::DbId;
use sqlx::PgConnection;

use crate::models::domain::Domain;
use crate::models::subtopic::Subtopic;

/// Find-or-create resolution and empty-parent pruning for taxonomy nodes.
pub struct TaxonomyRepo;

impl TaxonomyRepo {
    /// Resolve `(domain_name, subtopic_name)` to their taxonomy nodes,
    /// creating whichever of the two is missing.
    ///
    /// Lookups compare `LOWER(name)`, so names differing only by case map to
    /// the same node and the stored casing of the first-created record wins.
    /// Inserts go through `ON CONFLICT DO NOTHING` against the unique
    /// lower-name indexes: when a concurrent request wins the insert race the
    /// conflict is swallowed and the row is re-read, instead of a constraint
    /// violation aborting the whole transaction.
    ///
    /// Callers must pass non-empty, trimmed names.
    pub async fn resolve_or_create(
        conn: &mut PgConnection,
        domain_name: &str,
        subtopic_name: &str,
    ) -> Result<(Domain, Subtopic), sqlx::Error> {
        let domain = match Self::find_domain(conn, domain_name).await? {
            Some(domain) => domain,
            None => Self::insert_domain(conn, domain_name).await?,
        };

        let subtopic = match Self::find_subtopic(conn, domain.id, subtopic_name).await? {
            Some(subtopic) => subtopic,
            None => Self::insert_subtopic(conn, domain.id, subtopic_name).await?,
        };

        Ok((domain, subtopic))
    }

    /// Remove the parents of a just-deleted prompt if they are now empty.
    ///
    /// The subtopic is checked and pruned strictly before the domain, since
    /// the domain only empties once its last subtopic is gone. Runs inside
    /// the delete transaction, so the conditional deletes see the prompt
    /// removal.
    pub async fn prune_after_prompt_delete(
        conn: &mut PgConnection,
        subtopic_id: DbId,
        domain_id: DbId,
    ) -> Result<(), sqlx::Error> {
        let subtopic_removed = sqlx::query(
            "DELETE FROM subtopics
             WHERE id = $1
               AND NOT EXISTS (SELECT 1 FROM prompts WHERE subtopic_id = $1)",
        )
        .bind(subtopic_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

        if subtopic_removed > 0 {
            sqlx::query(
                "DELETE FROM domains
                 WHERE id = $1
                   AND NOT EXISTS (SELECT 1 FROM subtopics WHERE domain_id = $1)",
            )
            .bind(domain_id)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    async fn find_domain(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<Domain>, sqlx::Error> {
        sqlx::query_as::<_, Domain>("SELECT id, name FROM domains WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn insert_domain(conn: &mut PgConnection, name: &str) -> Result<Domain, sqlx::Error> {
        let inserted = sqlx::query_as::<_, Domain>(
            "INSERT INTO domains (name) VALUES ($1)
             ON CONFLICT (LOWER(name)) DO NOTHING
             RETURNING id, name",
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

        match inserted {
            Some(domain) => Ok(domain),
            // Lost the race to a concurrent insert; the row now exists.
            None => {
                sqlx::query_as::<_, Domain>(
                    "SELECT id, name FROM domains WHERE LOWER(name) = LOWER($1)",
                )
                .bind(name)
                .fetch_one(&mut *conn)
                .await
            }
        }
    }

    async fn find_subtopic(
        conn: &mut PgConnection,
        domain_id: DbId,
        name: &str,
    ) -> Result<Option<Subtopic>, sqlx::Error> {
        sqlx::query_as::<_, Subtopic>(
            "SELECT id, name, domain_id FROM subtopics
             WHERE domain_id = $1 AND LOWER(name) = LOWER($2)",
        )
        .bind(domain_id)
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
    }

    async fn insert_subtopic(
        conn: &mut PgConnection,
        domain_id: DbId,
        name: &str,
    ) -> Result<Subtopic, sqlx::Error> {
        let inserted = sqlx::query_as::<_, Subtopic>(
            "INSERT INTO subtopics (name, domain_id) VALUES ($1, $2)
             ON CONFLICT (domain_id, LOWER(name)) DO NOTHING
             RETURNING id, name, domain_id",
        )
        .bind(name)
        .bind(domain_id)
        .fetch_optional(&mut *conn)
        .await?;

        match inserted {
            Some(subtopic) => Ok(subtopic),
            None => {
                sqlx::query_as::<_, Subtopic>(
                    "SELECT id, name, domain_id FROM subtopics
                     WHERE domain_id = $1 AND LOWER(name) = LOWER($2)",
                )
                .bind(domain_id)
                .bind(name)
                .fetch_one(&mut *conn)
                .await
            }
        }
    }
}

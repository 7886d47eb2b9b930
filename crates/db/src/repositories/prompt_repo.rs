//! Repository for the `prompts` table.

use promptdeck_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::prompt::{Prompt, PromptRef, PromptWithContext, PromptWrite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, is_template, configurable_options, subtopic_id";

/// Columns for the prompt + subtopic + domain join.
const CONTEXT_COLUMNS: &str = "p.id, p.title, p.content, p.is_template, p.configurable_options, \
    s.id AS subtopic_id, s.name AS subtopic_name, d.id AS domain_id, d.name AS domain_name";

/// Provides CRUD and search operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &PromptWrite) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (title, content, is_template, configurable_options, subtopic_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.is_template)
            .bind(&input.configurable_options)
            .bind(input.subtopic_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Replace every mutable field of a prompt. Returns `None` if the id is
    /// unknown.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &PromptWrite,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET
                title = $2,
                content = $3,
                is_template = $4,
                configurable_options = $5,
                subtopic_id = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.is_template)
            .bind(&input.configurable_options)
            .bind(input.subtopic_id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Find a prompt by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a prompt by id, joined with its subtopic and domain.
    pub async fn find_with_context(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PromptWithContext>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTEXT_COLUMNS}
             FROM prompts p
             JOIN subtopics s ON s.id = p.subtopic_id
             JOIN domains d ON d.id = s.domain_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PromptWithContext>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a prompt row. Returns `true` if a row was removed.
    ///
    /// Image rows cascade at the database level; the caller is responsible
    /// for the on-disk files and for pruning emptied parents afterwards.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over title and content, ordered by
    /// title. `keyword` is the raw user query; pattern assembly and
    /// lowercasing happen here.
    pub async fn search(
        pool: &PgPool,
        keyword: &str,
    ) -> Result<Vec<PromptWithContext>, sqlx::Error> {
        let pattern = format!("%{}%", keyword.to_lowercase());
        let query = format!(
            "SELECT {CONTEXT_COLUMNS}
             FROM prompts p
             JOIN subtopics s ON s.id = p.subtopic_id
             JOIN domains d ON d.id = s.domain_id
             WHERE LOWER(p.title) LIKE $1 OR LOWER(p.content) LIKE $1
             ORDER BY p.title ASC"
        );
        sqlx::query_as::<_, PromptWithContext>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// List `{id, title, subtopic_id}` for every prompt, ordered
    /// case-insensitively by title, for assembling the structure payload.
    pub async fn list_refs(pool: &PgPool) -> Result<Vec<PromptRef>, sqlx::Error> {
        sqlx::query_as::<_, PromptRef>(
            "SELECT id, title, subtopic_id FROM prompts ORDER BY LOWER(title) ASC",
        )
        .fetch_all(pool)
        .await
    }
}

//! Repository for the `prompt_images` table.

use promptdeck_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::prompt_image::PromptImage;

const COLUMNS: &str = "id, prompt_id, filename, sort_order";

/// Provides attachment-row operations for prompt images.
///
/// Rows are only ever inserted by the attachment manager and removed by the
/// prompt-delete cascade, so there is no update or single-row delete here.
pub struct PromptImageRepo;

impl PromptImageRepo {
    /// Insert an attachment row.
    pub async fn create(
        conn: &mut PgConnection,
        prompt_id: DbId,
        filename: &str,
        sort_order: i32,
    ) -> Result<PromptImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompt_images (prompt_id, filename, sort_order)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptImage>(&query)
            .bind(prompt_id)
            .bind(filename)
            .bind(sort_order)
            .fetch_one(&mut *conn)
            .await
    }

    /// List a prompt's images ordered by `sort_order` ascending.
    pub async fn list_by_prompt(
        pool: &PgPool,
        prompt_id: DbId,
    ) -> Result<Vec<PromptImage>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM prompt_images WHERE prompt_id = $1 ORDER BY sort_order ASC");
        sqlx::query_as::<_, PromptImage>(&query)
            .bind(prompt_id)
            .fetch_all(pool)
            .await
    }

    /// Count a prompt's images, observing uncommitted writes on `conn`.
    pub async fn count_by_prompt(
        conn: &mut PgConnection,
        prompt_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM prompt_images WHERE prompt_id = $1")
            .bind(prompt_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// The sort order the next attached image should receive: one past the
    /// current maximum, so new images always append after existing ones.
    pub async fn next_sort_order(
        conn: &mut PgConnection,
        prompt_id: DbId,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(MAX(sort_order) + 1, 0) FROM prompt_images WHERE prompt_id = $1",
        )
        .bind(prompt_id)
        .fetch_one(&mut *conn)
        .await
    }
}

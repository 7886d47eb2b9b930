//! Image attachment lifecycle: coupled file + row management.
//!
//! Every `prompt_images` row is paired with a file in the upload directory.
//! Attachment validates the whole batch before the first byte is written, so
//! a rejected batch leaves no file and no row behind; detachment tolerates
//! already-missing files and never fails the surrounding deletion.

use std::io::ErrorKind;
use std::path::Path;

use promptdeck_core::images::{self, UploadedImage};
use promptdeck_core::types::DbId;
use promptdeck_db::models::prompt_image::PromptImage;
use promptdeck_db::repositories::PromptImageRepo;
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};

/// Attach a batch of uploaded files to a prompt.
///
/// Entries with an empty filename (blank file inputs) are dropped. The
/// remaining batch is validated against the prompt's current image count and
/// the type rules as a whole; only then are files written and rows inserted,
/// with `sort_order` continuing after the existing maximum. Runs on the
/// caller's transaction so row inserts roll back together with the enclosing
/// mutation.
pub async fn attach_images(
    conn: &mut PgConnection,
    upload_dir: &Path,
    prompt_id: DbId,
    files: Vec<UploadedImage>,
) -> AppResult<Vec<PromptImage>> {
    let files: Vec<UploadedImage> = files
        .into_iter()
        .filter(|f| !f.filename.is_empty())
        .collect();
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let current = PromptImageRepo::count_by_prompt(conn, prompt_id).await? as usize;
    images::validate_batch(current, &files)?;

    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload directory: {e}")))?;

    let base = PromptImageRepo::next_sort_order(conn, prompt_id).await?;
    let mut attached = Vec::with_capacity(files.len());

    for (index, file) in files.iter().enumerate() {
        let stored_name = images::storage_filename(&file.filename);
        let path = upload_dir.join(&stored_name);
        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store image file: {e}")))?;

        let row =
            PromptImageRepo::create(conn, prompt_id, &stored_name, base + index as i32).await?;
        attached.push(row);
    }

    Ok(attached)
}

/// Remove the on-disk files for a prompt's images.
///
/// An already-missing file is fine; other I/O errors are logged and skipped
/// so file trouble never blocks the prompt deletion. The rows themselves are
/// removed by the prompt-row delete cascade.
pub async fn detach_files(upload_dir: &Path, images: &[PromptImage]) {
    for image in images {
        let path = upload_dir.join(&image.filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(filename = %image.filename, error = %e, "Failed to remove image file");
            }
        }
    }
}

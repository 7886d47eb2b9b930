//! Handlers for the `/prompts` resource.
//!
//! Create and update share one workflow: validate fields, resolve the
//! domain/subtopic placement, persist the prompt row, attach any uploaded
//! images — all inside a single transaction so resolver inserts, the prompt
//! write, and image rows commit or roll back together.

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::Json;
use promptdeck_core::error::CoreError;
use promptdeck_core::types::DbId;
use promptdeck_db::models::prompt::{PromptWithContext, PromptWrite};
use promptdeck_db::models::prompt_image::PromptImage;
use promptdeck_db::repositories::{PromptImageRepo, PromptRepo, TaxonomyRepo};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::forms::{self, PromptFields};
use crate::state::AppState;
use crate::uploads;

/// A prompt image as exposed by the API.
#[derive(Debug, Serialize)]
pub struct ImagePayload {
    pub id: DbId,
    pub filename: String,
    /// Public path the file is served from, stable per stored filename.
    pub url: String,
}

/// Full serialized prompt, including hierarchy metadata and images.
#[derive(Debug, Serialize)]
pub struct PromptPayload {
    #[serde(flatten)]
    pub prompt: PromptWithContext,
    pub images: Vec<ImagePayload>,
}

/// Serialized prompt for the detail endpoint (no hierarchy metadata).
#[derive(Debug, Serialize)]
pub struct PromptDetailPayload {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub is_template: bool,
    pub configurable_options: Option<Value>,
    pub images: Vec<ImagePayload>,
}

pub(crate) fn image_payloads(images: Vec<PromptImage>) -> Vec<ImagePayload> {
    images
        .into_iter()
        .map(|image| ImagePayload {
            url: format!("/uploads/{}", image.filename),
            id: image.id,
            filename: image.filename,
        })
        .collect()
}

/// Load the full serialized form of a prompt that is known to exist.
async fn load_payload(state: &AppState, id: DbId) -> AppResult<PromptPayload> {
    let prompt = PromptRepo::find_with_context(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    let images = PromptImageRepo::list_by_prompt(&state.pool, id).await?;
    Ok(PromptPayload {
        prompt,
        images: image_payloads(images),
    })
}

/// GET /api/v1/prompts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PromptDetailPayload>> {
    let prompt = PromptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    let images = PromptImageRepo::list_by_prompt(&state.pool, id).await?;

    Ok(Json(PromptDetailPayload {
        id: prompt.id,
        title: prompt.title,
        content: prompt.content,
        is_template: prompt.is_template,
        configurable_options: prompt.configurable_options,
        images: image_payloads(images),
    }))
}

/// POST /api/v1/prompts
///
/// Accepts JSON or multipart (fields plus `images` file parts). On success
/// returns 201 with the serialized prompt including hierarchy metadata.
pub async fn create(
    State(state): State<AppState>,
    req: Request,
) -> AppResult<(StatusCode, Json<PromptPayload>)> {
    let submission = forms::extract_prompt_submission(req).await?;
    let fields = forms::validate_prompt_payload(&submission.body).map_err(AppError::Validation)?;

    let mut tx = state.pool.begin().await?;
    let prompt_id = persist_prompt(&mut tx, &state, None, &fields, submission.images).await?;
    tx.commit().await?;

    let payload = load_payload(&state, prompt_id).await?;
    Ok((StatusCode::CREATED, Json(payload)))
}

/// PUT /api/v1/prompts/{id}
///
/// Re-parents the prompt when domain/subtopic names change; emptied former
/// parents are deliberately left in place (pruning is delete-only).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    req: Request,
) -> AppResult<Json<PromptPayload>> {
    // Existence check first: an unknown id is a 404 even if the payload is
    // also invalid.
    PromptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;

    let submission = forms::extract_prompt_submission(req).await?;
    let fields = forms::validate_prompt_payload(&submission.body).map_err(AppError::Validation)?;

    let mut tx = state.pool.begin().await?;
    let prompt_id = persist_prompt(&mut tx, &state, Some(id), &fields, submission.images).await?;
    tx.commit().await?;

    let payload = load_payload(&state, prompt_id).await?;
    Ok(Json(payload))
}

/// Resolve taxonomy, write the prompt row, and attach images on one
/// transaction. `existing_id` selects insert vs. full-field update.
async fn persist_prompt(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    state: &AppState,
    existing_id: Option<DbId>,
    fields: &PromptFields,
    images: Vec<promptdeck_core::images::UploadedImage>,
) -> AppResult<DbId> {
    let (_domain, subtopic) =
        TaxonomyRepo::resolve_or_create(tx, &fields.domain_name, &fields.subtopic_name).await?;

    let write = PromptWrite {
        title: fields.title.clone(),
        content: fields.content.clone(),
        is_template: fields.is_template,
        configurable_options: fields.configurable_options.clone(),
        subtopic_id: subtopic.id,
    };

    let prompt = match existing_id {
        None => PromptRepo::create(tx, &write).await?,
        Some(id) => PromptRepo::update(tx, id, &write)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Prompt",
                id,
            }))?,
    };

    uploads::attach_images(tx, &state.config.upload_dir, prompt.id, images).await?;
    Ok(prompt.id)
}

/// DELETE /api/v1/prompts/{id}
///
/// Removes the prompt's image files, deletes the row (image rows cascade),
/// and prunes the parent subtopic/domain if the deletion emptied them.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let prompt = PromptRepo::find_with_context(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    let images = PromptImageRepo::list_by_prompt(&state.pool, id).await?;

    // Files first; failures are logged inside and never abort the delete.
    uploads::detach_files(&state.config.upload_dir, &images).await;

    let mut tx = state.pool.begin().await?;
    let deleted = PromptRepo::delete(&mut tx, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }));
    }
    TaxonomyRepo::prune_after_prompt_delete(&mut tx, prompt.subtopic_id, prompt.domain_id).await?;
    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

//! Handler for keyword search over prompts.

use axum::extract::{Query, State};
use axum::Json;
use promptdeck_db::repositories::{PromptImageRepo, PromptRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::prompt::{image_payloads, PromptPayload};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/v1/search?q=
///
/// Case-insensitive substring match over prompt titles and content, ordered
/// by title. A blank or missing query returns an empty list.
pub async fn search_prompts(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<PromptPayload>>> {
    let keyword = params.q.as_deref().unwrap_or("").trim().to_string();
    if keyword.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let prompts = PromptRepo::search(&state.pool, &keyword).await?;

    let mut payload = Vec::with_capacity(prompts.len());
    for prompt in prompts {
        let images = PromptImageRepo::list_by_prompt(&state.pool, prompt.id).await?;
        payload.push(PromptPayload {
            prompt,
            images: image_payloads(images),
        });
    }

    Ok(Json(payload))
}

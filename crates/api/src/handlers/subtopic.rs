//! Handler for the `/subtopics` listing.

use axum::extract::State;
use axum::Json;
use promptdeck_core::types::DbId;
use promptdeck_db::repositories::SubtopicRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubtopicPayload {
    pub id: DbId,
    pub name: String,
    pub domain: DomainRef,
}

#[derive(Debug, Serialize)]
pub struct DomainRef {
    pub id: DbId,
    pub name: String,
}

/// GET /api/v1/subtopics
///
/// Returns all subtopics with their related domain metadata, ordered by
/// subtopic name.
pub async fn list_subtopics(State(state): State<AppState>) -> AppResult<Json<Vec<SubtopicPayload>>> {
    let subtopics = SubtopicRepo::list_with_domain(&state.pool).await?;

    let payload = subtopics
        .into_iter()
        .map(|s| SubtopicPayload {
            id: s.id,
            name: s.name,
            domain: DomainRef {
                id: s.domain_id,
                name: s.domain_name,
            },
        })
        .collect();

    Ok(Json(payload))
}

pub mod health;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET    /structure          full domain/subtopic/prompt hierarchy
/// GET    /subtopics          subtopics with domain metadata
/// POST   /prompts            create prompt (JSON or multipart with images)
/// GET    /prompts/{id}       prompt detail
/// PUT    /prompts/{id}       update prompt (JSON or multipart with images)
/// DELETE /prompts/{id}       delete prompt + prune emptied parents
/// GET    /search?q=          keyword search over title/content
/// *                          JSON 404 fallback (API clients never see HTML)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/structure", get(handlers::structure::get_structure))
        .route("/subtopics", get(handlers::subtopic::list_subtopics))
        .route("/prompts", post(handlers::prompt::create))
        .route(
            "/prompts/{id}",
            get(handlers::prompt::get_by_id)
                .put(handlers::prompt::update)
                .delete(handlers::prompt::delete),
        )
        .route("/search", get(handlers::search::search_prompts))
        .fallback(api_not_found)
}

/// JSON 404 for unmatched API paths.
async fn api_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "code": "NOT_FOUND",
        })),
    )
}

//! Tests for error response mapping and the API 404 fallback.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use promptdeck_api::error::{AppError, FieldErrors};
use promptdeck_core::error::CoreError;
use promptdeck_core::images::ImageError;
use sqlx::PgPool;

use common::{body_bytes, body_json, build_test_app, get};

#[tokio::test]
async fn validation_error_serializes_the_field_map() {
    let mut errors = FieldErrors::new();
    errors.insert("title".into(), "Title is required.".into());
    errors.insert("content".into(), "Content is required.".into());

    let response = AppError::Validation(errors).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["errors"]["title"], "Title is required.");
    assert_eq!(body["errors"]["content"], "Content is required.");
}

#[tokio::test]
async fn not_found_names_the_entity_and_id() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Prompt",
        id: 7,
    });
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Prompt with id 7 not found");
}

#[tokio::test]
async fn internal_error_details_never_reach_the_client() {
    let response = AppError::InternalError("connection string user=admin".into()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "An internal error occurred");
    assert_eq!(body["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn image_errors_land_under_the_images_field() {
    let err: AppError = ImageError::InvalidType {
        filename: "script.svg".into(),
    }
    .into();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body["errors"]["images"],
        "File 'script.svg' is not an allowed image type."
    );
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_api_route_returns_json_not_html(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(pool, dir.path());

    let response = get(app, "/api/v1/no-such-route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Not found");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_root_route_is_a_plain_404(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(pool, dir.path());

    let response = get(app, "/no-such-route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_database_status(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(pool, dir.path());

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
    assert!(body["version"].as_str().is_some());
}

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: promptdeck_db::DbPool,
    /// Server configuration (upload directory, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
}

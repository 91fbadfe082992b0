//! Health check endpoint
//!
//! Reports whether the record store can actually serve the advocate list,
//! not just whether the process is up.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the store answered, `"degraded"` otherwise
    pub status: &'static str,
    /// Backing store: `"postgres"` or `"static"`
    pub store: &'static str,
    /// Number of advocates the store returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advocates: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub version: &'static str,
}

/// GET /health
///
/// 200 when listing advocates succeeds, 503 with the store error otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = state.store.kind();
    let version = env!("CARGO_PKG_VERSION");

    match state.store.list().await {
        Ok(advocates) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                store,
                advocates: Some(advocates.len()),
                error: None,
                version,
            }),
        ),
        Err(e) => {
            warn!(store, "Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    store,
                    advocates: None,
                    error: Some(e.to_string()),
                    version,
                }),
            )
        }
    }
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

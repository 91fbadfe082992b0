//! advocates-server library - records endpoint for the advocate directory
//!
//! Serves the full advocate list as `{"data": [...]}`; all filtering happens
//! in the directory client.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod store;

pub use store::RecordStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Where advocate records come from
    pub store: RecordStore,
}

impl AppState {
    /// Create new application state
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/advocates", get(api::list_advocates))
        .route("/api/seed", post(api::seed_advocates))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

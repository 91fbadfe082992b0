//! Advocate records endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use advocates_common::seed;
use advocates_common::{Advocate, AdvocatesEnvelope};

use super::ApiError;
use crate::AppState;

/// Response for `POST /api/seed`
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub advocates: Vec<Advocate>,
}

/// GET /api/advocates
///
/// Returns every advocate wrapped in the `data` envelope. No server-side
/// filtering: the directory client narrows the list itself.
pub async fn list_advocates(
    State(state): State<AppState>,
) -> Result<Json<AdvocatesEnvelope>, ApiError> {
    let data = state.store.list().await?;
    Ok(Json(AdvocatesEnvelope { data }))
}

/// POST /api/seed
///
/// Inserts the bundled seed advocates and returns them with their new ids.
pub async fn seed_advocates(
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, ApiError> {
    if !state.store.is_writable() {
        return Err(ApiError::ReadOnlyStore);
    }

    let advocates = state.store.insert(&seed::seed_advocates()).await?;
    info!("Seeded {} advocates", advocates.len());

    Ok(Json(SeedResponse { advocates }))
}

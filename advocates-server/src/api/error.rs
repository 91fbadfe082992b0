//! Handler errors rendered as `{"error": "..."}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// API errors
#[derive(Debug)]
pub enum ApiError {
    DatabaseError(String),
    InvalidInput(String),
    ReadOnlyStore,
}

impl From<advocates_common::Error> for ApiError {
    fn from(e: advocates_common::Error) -> Self {
        match e {
            advocates_common::Error::InvalidInput(msg) => ApiError::InvalidInput(msg),
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::DatabaseError(msg) => {
                error!("Record store failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ReadOnlyStore => (
                StatusCode::CONFLICT,
                "Record store is read-only".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

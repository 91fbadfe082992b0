//! HTTP API handlers for advocates-server

pub mod advocates;
pub mod error;
pub mod health;

pub use advocates::{list_advocates, seed_advocates};
pub use error::ApiError;
pub use health::health_routes;

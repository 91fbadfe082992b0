//! # Advocates Common Library
//!
//! Shared code for the advocate directory crates:
//! - Advocate record model and the JSON envelope served by the records endpoint
//! - Database setup, schema and queries
//! - Configuration loading
//! - Bundled seed records

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod seed;

pub use error::{Error, Result};
pub use model::{Advocate, AdvocatesEnvelope, NewAdvocate};

//! Database setup, schema and queries
//!
//! The pool is built once at startup from [`DatabaseConfig`] and passed
//! explicitly to whoever needs it; it lives for the whole process.

use crate::config::DatabaseConfig;
use crate::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

pub mod advocates;
pub mod init;

pub use advocates::{insert_advocates, list_advocates};
pub use init::init_schema;

/// Build a lazily-connecting PostgreSQL pool.
///
/// No connection is attempted until the first query, so startup does not
/// depend on the database being reachable.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&config.url)?;

    info!("Configured PostgreSQL pool (lazy connect)");
    Ok(pool)
}

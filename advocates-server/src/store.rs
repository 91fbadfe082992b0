//! Record store backing the records endpoint

use std::sync::Arc;

use advocates_common::db;
use advocates_common::{Advocate, NewAdvocate, Result};
use sqlx::PgPool;

/// Source of advocate records for the HTTP handlers
#[derive(Clone)]
pub enum RecordStore {
    /// Live PostgreSQL pool
    Postgres(PgPool),
    /// Fixed in-memory records (fixtures, tests); read-only
    Static(Arc<[Advocate]>),
}

impl RecordStore {
    /// In-memory store over the given records
    pub fn fixed(advocates: Vec<Advocate>) -> Self {
        Self::Static(advocates.into())
    }

    /// Short name of the backing store, as reported by `/health`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Static(_) => "static",
        }
    }

    /// Whether [`RecordStore::insert`] can succeed
    pub fn is_writable(&self) -> bool {
        matches!(self, Self::Postgres(_))
    }

    /// Every stored advocate
    pub async fn list(&self) -> Result<Vec<Advocate>> {
        match self {
            Self::Postgres(pool) => db::list_advocates(pool).await,
            Self::Static(advocates) => Ok(advocates.to_vec()),
        }
    }

    /// Insert advocates; only valid on a writable store
    pub async fn insert(&self, advocates: &[NewAdvocate]) -> Result<Vec<Advocate>> {
        match self {
            Self::Postgres(pool) => db::insert_advocates(pool, advocates).await,
            Self::Static(_) => Err(advocates_common::Error::InvalidInput(
                "record store is read-only".to_string(),
            )),
        }
    }
}

//! Schema initialization
//!
//! Idempotent: safe to call on every startup.

use crate::Result;
use sqlx::PgPool;
use tracing::info;

/// Create the `advocates` table if it does not exist
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS advocates (
            id SERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            city TEXT NOT NULL,
            degree TEXT NOT NULL,
            specialties JSONB NOT NULL DEFAULT '[]'::jsonb,
            years_of_experience INTEGER NOT NULL,
            phone_number BIGINT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (years_of_experience >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Advocates schema ready");
    Ok(())
}

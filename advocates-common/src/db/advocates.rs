//! Advocate queries

use crate::model::{Advocate, NewAdvocate};
use crate::{Error, Result};
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::debug;

/// Read every advocate, ordered by id
pub async fn list_advocates(pool: &PgPool) -> Result<Vec<Advocate>> {
    let rows = sqlx::query(
        "SELECT id, first_name, last_name, city, degree, specialties,
                years_of_experience, phone_number
         FROM advocates
         ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    let mut advocates = Vec::with_capacity(rows.len());
    for row in rows {
        let years: i32 = row.try_get("years_of_experience")?;
        let Json(specialties): Json<Vec<String>> = row.try_get("specialties")?;

        advocates.push(Advocate {
            id: row.try_get::<i32, _>("id")?.to_string(),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            city: row.try_get("city")?,
            degree: row.try_get("degree")?,
            specialties,
            years_of_experience: u32::try_from(years).map_err(|_| {
                Error::InvalidInput(format!("negative years_of_experience: {}", years))
            })?,
            phone_number: row.try_get::<i64, _>("phone_number")?.to_string(),
        });
    }

    debug!(count = advocates.len(), "Loaded advocates");
    Ok(advocates)
}

/// Insert advocates in one transaction, returning them with assigned ids
pub async fn insert_advocates(pool: &PgPool, advocates: &[NewAdvocate]) -> Result<Vec<Advocate>> {
    // Validate everything before touching the database
    let mut prepared = Vec::with_capacity(advocates.len());
    for advocate in advocates {
        let phone: i64 = advocate.phone_number.parse().map_err(|_| {
            Error::InvalidInput(format!(
                "phone number must be numeric: {:?}",
                advocate.phone_number
            ))
        })?;
        let years = i32::try_from(advocate.years_of_experience).map_err(|_| {
            Error::InvalidInput(format!(
                "years_of_experience out of range: {}",
                advocate.years_of_experience
            ))
        })?;
        prepared.push((advocate, phone, years));
    }

    let mut tx = pool.begin().await?;
    let mut inserted = Vec::with_capacity(prepared.len());

    for (advocate, phone, years) in prepared {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO advocates
                (first_name, last_name, city, degree, specialties, years_of_experience, phone_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&advocate.first_name)
        .bind(&advocate.last_name)
        .bind(&advocate.city)
        .bind(&advocate.degree)
        .bind(Json(&advocate.specialties))
        .bind(years)
        .bind(phone)
        .fetch_one(&mut *tx)
        .await?;

        inserted.push(advocate.clone().with_id(id.to_string()));
    }

    tx.commit().await?;

    debug!(count = inserted.len(), "Inserted advocates");
    Ok(inserted)
}

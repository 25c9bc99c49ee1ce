use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Temperature, TemperatureInput};

pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Temperature>, DatabaseError> {
    let temperature = sqlx::query_as::<_, Temperature>(
        "SELECT id, city_id, temperature, date FROM temperatures WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(temperature)
}

/// Insert a reading and return its generated id
pub async fn insert(pool: &PgPool, input: &TemperatureInput) -> Result<i32, DatabaseError> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO temperatures (city_id, temperature, date) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(input.city_id)
    .bind(input.temperature)
    .bind(input.date)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    input: &TemperatureInput,
) -> Result<Option<i32>, DatabaseError> {
    let updated: Option<i32> = sqlx::query_scalar(
        "UPDATE temperatures SET city_id = $2, temperature = $3, date = $4 WHERE id = $1 RETURNING id",
    )
    .bind(id)
    .bind(input.city_id)
    .bind(input.temperature)
    .bind(input.date)
    .fetch_optional(pool)
    .await?;
    Ok(updated)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM temperatures WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{City, CityAverage, CityInput, CityListing, ClimateAverage};

pub async fn list(pool: &PgPool) -> Result<Vec<CityListing>, DatabaseError> {
    let cities = sqlx::query_as::<_, CityListing>(
        "SELECT c.id, s.name AS state, c.name AS city
         FROM cities c
         INNER JOIN states s ON s.abbrev = c.state_abbrev
         ORDER BY c.id",
    )
    .fetch_all(pool)
    .await?;
    Ok(cities)
}

pub async fn find(pool: &PgPool, id: i32) -> Result<Option<City>, DatabaseError> {
    let city = sqlx::query_as::<_, City>(
        "SELECT id, state_abbrev, name, climate FROM cities WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(city)
}

/// Average temperature of a city. `None` when the city does not exist;
/// a city without readings yields a row with a null average.
pub async fn average(pool: &PgPool, id: i32) -> Result<Option<CityAverage>, DatabaseError> {
    let average = sqlx::query_as::<_, CityAverage>(
        "SELECT c.name, avg(t.temperature) AS avg
         FROM cities c
         LEFT JOIN temperatures t ON t.city_id = c.id
         WHERE c.id = $1
         GROUP BY c.id, c.name",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(average)
}

/// Per-city average temperature for every city of a climate that has readings
pub async fn climate_averages(
    pool: &PgPool,
    climate: &str,
) -> Result<Vec<ClimateAverage>, DatabaseError> {
    let averages = sqlx::query_as::<_, ClimateAverage>(
        "SELECT c.climate, c.name, avg(t.temperature) AS avg
         FROM temperatures t
         INNER JOIN cities c ON c.id = t.city_id
         WHERE c.climate = $1
         GROUP BY c.climate, c.name
         ORDER BY c.name",
    )
    .bind(climate)
    .fetch_all(pool)
    .await?;
    Ok(averages)
}

/// Insert a city and return its generated id
pub async fn insert(pool: &PgPool, input: &CityInput) -> Result<i32, DatabaseError> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO cities (state_abbrev, name, climate) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&input.state_abbrev)
    .bind(&input.name)
    .bind(&input.climate)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Replace every mutable field. Returns `None` when no row matched.
pub async fn update(
    pool: &PgPool,
    id: i32,
    input: &CityInput,
) -> Result<Option<i32>, DatabaseError> {
    let updated: Option<i32> = sqlx::query_scalar(
        "UPDATE cities SET state_abbrev = $2, name = $3, climate = $4 WHERE id = $1 RETURNING id",
    )
    .bind(id)
    .bind(&input.state_abbrev)
    .bind(&input.name)
    .bind(&input.climate)
    .fetch_optional(pool)
    .await?;
    Ok(updated)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM cities WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

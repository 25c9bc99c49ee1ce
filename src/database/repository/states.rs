use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{State, StateInput, StateUpdate};

pub async fn list(pool: &PgPool) -> Result<Vec<State>, DatabaseError> {
    let states = sqlx::query_as::<_, State>("SELECT abbrev, name FROM states ORDER BY abbrev")
        .fetch_all(pool)
        .await?;
    Ok(states)
}

pub async fn find(pool: &PgPool, abbrev: &str) -> Result<Option<State>, DatabaseError> {
    let state = sqlx::query_as::<_, State>("SELECT abbrev, name FROM states WHERE abbrev = $1")
        .bind(abbrev)
        .fetch_optional(pool)
        .await?;
    Ok(state)
}

/// Insert a state and return the stored key
pub async fn insert(pool: &PgPool, input: &StateInput) -> Result<String, DatabaseError> {
    let abbrev: String =
        sqlx::query_scalar("INSERT INTO states (abbrev, name) VALUES ($1, $2) RETURNING abbrev")
            .bind(&input.abbrev)
            .bind(&input.name)
            .fetch_one(pool)
            .await?;
    Ok(abbrev)
}

/// Replace the name of a state. The key is taken from `abbrev` only.
/// Returns `None` when no row matched.
pub async fn update(
    pool: &PgPool,
    abbrev: &str,
    input: &StateUpdate,
) -> Result<Option<String>, DatabaseError> {
    let updated: Option<String> =
        sqlx::query_scalar("UPDATE states SET name = $2 WHERE abbrev = $1 RETURNING abbrev")
            .bind(abbrev)
            .bind(&input.name)
            .fetch_optional(pool)
            .await?;
    Ok(updated)
}

/// Unconditional delete; returns the number of rows removed
pub async fn delete(pool: &PgPool, abbrev: &str) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM states WHERE abbrev = $1")
        .bind(abbrev)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

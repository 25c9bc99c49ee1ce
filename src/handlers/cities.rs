// handlers/cities.rs - /city endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::models::{City, CityAverage, CityInput, CityListing};
use crate::database::repository::cities;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

const CITY_NOT_FOUND: &str = "That city is not found.";

/// GET /city - List cities with the name of their state
pub async fn list(State(app): State<AppState>) -> ApiResult<Vec<CityListing>> {
    let rows = cities::list(app.pool()).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /city/:id - Average temperature of one city
///
/// 404 when the city does not exist; `avg` is null when it has no readings yet.
pub async fn average(
    State(app): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<CityAverage> {
    let average = cities::average(app.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(CITY_NOT_FOUND))?;
    Ok(ApiResponse::success(average))
}

/// POST /city - Create a city and return it with its generated id
pub async fn create(
    State(app): State<AppState>,
    Json(input): Json<CityInput>,
) -> ApiResult<City> {
    let id = cities::insert(app.pool(), &input).await?;
    tracing::info!("Created city {} ({})", id, input.name);

    let city = cities::find(app.pool(), id)
        .await?
        .ok_or_else(|| ApiError::inserted_row_missing("city", id))?;
    Ok(ApiResponse::created(city))
}

/// PUT /city/:id - Replace every mutable field of a city
pub async fn update(
    State(app): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<CityInput>,
) -> ApiResult<City> {
    cities::update(app.pool(), id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found(CITY_NOT_FOUND))?;

    let city = cities::find(app.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(CITY_NOT_FOUND))?;
    Ok(ApiResponse::created(city))
}

/// DELETE /city/:id
pub async fn delete(State(app): State<AppState>, Path(id): Path<i32>) -> ApiResult<()> {
    let removed = cities::delete(app.pool(), id).await?;
    tracing::info!("Deleted city {} ({} row(s))", id, removed);
    Ok(ApiResponse::no_content())
}

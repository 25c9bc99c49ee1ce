// handlers/temperatures.rs - temperature readings and climate averages

use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::models::{ClimateAverage, Temperature, TemperatureInput};
use crate::database::repository::{cities, temperatures};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

const TEMPERATURE_NOT_FOUND: &str = "That temperature record is not found.";

/// POST /temp - Record a temperature for a city and date
pub async fn create(
    State(app): State<AppState>,
    Json(input): Json<TemperatureInput>,
) -> ApiResult<Temperature> {
    let id = temperatures::insert(app.pool(), &input).await?;
    tracing::info!("Created temperature {} for city {} on {}", id, input.city_id, input.date);

    let temperature = temperatures::find(app.pool(), id)
        .await?
        .ok_or_else(|| ApiError::inserted_row_missing("temperature", id))?;
    Ok(ApiResponse::created(temperature))
}

/// GET /temperature/:climate - Average temperature per city of a climate
///
/// Always an array; empty when no city of that climate has readings.
pub async fn climate_averages(
    State(app): State<AppState>,
    Path(climate): Path<String>,
) -> ApiResult<Vec<ClimateAverage>> {
    let rows = cities::climate_averages(app.pool(), &climate).await?;
    Ok(ApiResponse::success(rows))
}

/// PUT /temperature/:id - Replace a reading
pub async fn update(
    State(app): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<TemperatureInput>,
) -> ApiResult<Temperature> {
    temperatures::update(app.pool(), id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found(TEMPERATURE_NOT_FOUND))?;

    let temperature = temperatures::find(app.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(TEMPERATURE_NOT_FOUND))?;
    Ok(ApiResponse::created(temperature))
}

/// DELETE /temperature/:id
pub async fn delete(State(app): State<AppState>, Path(id): Path<i32>) -> ApiResult<()> {
    let removed = temperatures::delete(app.pool(), id).await?;
    tracing::info!("Deleted temperature {} ({} row(s))", id, removed);
    Ok(ApiResponse::no_content())
}

// handlers/states.rs - /states endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::models::{self, StateInput, StateUpdate};
use crate::database::repository::states;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

const STATE_NOT_FOUND: &str = "The state could not be found.";
const STATE_NOT_FOUND_FOR_UPDATE: &str = "That state is not found.";

/// GET /states - List every state
pub async fn list(State(app): State<AppState>) -> ApiResult<Vec<models::State>> {
    let rows = states::list(app.pool()).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /states/:abbrev - Fetch one state, 404 when absent
pub async fn get(
    State(app): State<AppState>,
    Path(abbrev): Path<String>,
) -> ApiResult<models::State> {
    let state = states::find(app.pool(), &abbrev)
        .await?
        .ok_or_else(|| ApiError::not_found(STATE_NOT_FOUND))?;
    Ok(ApiResponse::success(state))
}

/// POST /states - Create a state and return it as stored
pub async fn create(
    State(app): State<AppState>,
    Json(input): Json<StateInput>,
) -> ApiResult<models::State> {
    let abbrev = states::insert(app.pool(), &input).await?;
    tracing::info!("Created state {}", abbrev);

    let state = states::find(app.pool(), &abbrev)
        .await?
        .ok_or_else(|| ApiError::inserted_row_missing("state", &abbrev))?;
    Ok(ApiResponse::created(state))
}

/// PUT /states/:abbrev - Replace the state's name
///
/// The path key is authoritative: an `abbrev` in the body never renames the row.
pub async fn update(
    State(app): State<AppState>,
    Path(abbrev): Path<String>,
    Json(input): Json<StateUpdate>,
) -> ApiResult<models::State> {
    if input.abbrev.as_deref().is_some_and(|body| body != abbrev) {
        tracing::debug!("Ignoring abbrev rename {:?} -> {:?}", abbrev, input.abbrev);
    }

    states::update(app.pool(), &abbrev, &input)
        .await?
        .ok_or_else(|| ApiError::not_found(STATE_NOT_FOUND_FOR_UPDATE))?;

    let state = states::find(app.pool(), &abbrev)
        .await?
        .ok_or_else(|| ApiError::not_found(STATE_NOT_FOUND_FOR_UPDATE))?;
    Ok(ApiResponse::created(state))
}

/// DELETE /states/:abbrev - Remove a state; succeeds whether or not it existed
pub async fn delete(State(app): State<AppState>, Path(abbrev): Path<String>) -> ApiResult<()> {
    let removed = states::delete(app.pool(), &abbrev).await?;
    tracing::info!("Deleted state {} ({} row(s))", abbrev, removed);
    Ok(ApiResponse::no_content())
}

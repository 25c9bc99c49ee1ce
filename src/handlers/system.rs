// handlers/system.rs - service index and health probe

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Service index
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Weather API",
        "version": version,
        "endpoints": {
            "states": "/states[/:abbrev]",
            "cities": "/city[/:id]",
            "temperatures": "/temp, /temperature/:id",
            "climates": "/temperature/:climate",
            "health": "/health",
        }
    }))
}

/// GET /health - 200 when the database answers, 503 otherwise
pub async fn health(State(app): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match app.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}

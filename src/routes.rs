use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, Environment, SecurityConfig};
use crate::handlers::{cities, states, system, temperatures};
use crate::state::AppState;

/// Build the full application router with its global layers
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(state_routes())
        .merge(city_routes())
        .merge(temperature_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if let Some(cors) = cors_layer(config.environment, &config.security) {
        router = router.layer(cors);
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn state_routes() -> Router<AppState> {
    Router::new()
        .route("/states", get(states::list).post(states::create))
        .route(
            "/states/:abbrev",
            get(states::get).put(states::update).delete(states::delete),
        )
}

fn city_routes() -> Router<AppState> {
    Router::new()
        .route("/city", get(cities::list).post(cities::create))
        .route(
            "/city/:id",
            get(cities::average).put(cities::update).delete(cities::delete),
        )
}

fn temperature_routes() -> Router<AppState> {
    // GET addresses a climate, PUT/DELETE a reading id; one segment name serves both
    Router::new()
        .route("/temp", post(temperatures::create))
        .route(
            "/temperature/:key",
            get(temperatures::climate_averages)
                .put(temperatures::update)
                .delete(temperatures::delete),
        )
}

fn cors_layer(environment: Environment, security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }
    if environment == Environment::Development && security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

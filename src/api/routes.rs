//! Development server route configuration.

use axum::{http::HeaderValue, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::config_routes;
use super::AppState;
use crate::errors::{AppError, AppResult};

/// Create the config server router
pub fn create_router(state: AppState) -> AppResult<Router> {
    let cors = cors_layer(&state.settings.cors_origins)?;

    Ok(Router::new()
        .route("/health", get(health))
        .merge(config_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(origins: &[String]) -> AppResult<CorsLayer> {
    let layer = CorsLayer::new().allow_methods([axum::http::Method::GET]);

    if origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|_| AppError::validation(format!("Invalid CORS origin: {}", o)))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

//! Public config handler.

use axum::{
    extract::State,
    http::header::{HeaderValue, CACHE_CONTROL},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::PublicConfig;
use crate::errors::{AppError, AppResult};

/// Create public config routes
pub fn config_routes() -> Router<AppState> {
    Router::new().route("/public-config", get(public_config))
}

/// Upload constraints for browser clients; never cached.
///
/// Only documents that pass the client-side schema are served.
async fn public_config(State(state): State<AppState>) -> AppResult<Response> {
    let document = serde_json::to_value(state.public_config())
        .map_err(|e| AppError::internal(format!("Failed to encode public config: {}", e)))?;

    PublicConfig::from_json(&document).map_err(|violations| {
        AppError::internal(format!("Refusing to serve invalid public config: {}", violations))
    })?;

    let mut response = Json(document).into_response();
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    Ok(response)
}

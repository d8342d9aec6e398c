use axum::{extract::State, http::StatusCode, response::Response};

use crate::config::AppState;
use crate::routes::ENDPOINTS;
use crate::utils::error::ApiError;
use crate::utils::response::json_response;

/// Upstream reachability, API version and uptime. 503 when an upstream is down.
pub async fn status(State(state): State<AppState>) -> Result<Response, ApiError> {
    let health = state.status.service_health().await;
    let code = if health.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    json_response(code, &health)
}

pub async fn index() -> String {
    format!("Available endpoints:\n{}\n", ENDPOINTS.join("\n"))
}

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};
use serde::Serialize;

use crate::utils::error::ApiError;

/// Encodes `value` as a JSON response, surfacing encoder failures as `Internal`.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(value)
        .map_err(|e| ApiError::Internal(format!("failed to encode response: {}", e)))?;

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(bytes))
        .map_err(|e| ApiError::Internal(format!("response build failed: {}", e)))
}

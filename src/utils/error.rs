use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use thiserror::Error;

/// Failure talking to one of the upstream providers.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{0} endpoint is not configured")]
    NotConfigured(&'static str),
    #[error("failed to reach {provider} endpoint: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{provider} endpoint returned status {status}")]
    Status { provider: &'static str, status: u16 },
    #[error("{0} endpoint returned non-JSON response")]
    NotJson(&'static str),
    #[error("failed to decode {provider} response: {message}")]
    Decode { provider: &'static str, message: String },
}

impl UpstreamError {
    /// The provider answered, and its answer was "no such resource".
    pub fn is_not_found(&self) -> bool {
        matches!(self, UpstreamError::Status { status: 404, .. })
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid_input: {0}")]
    InvalidInput(String),
    #[error("not_found: {0}")]
    NotFound(String),
    #[error("upstream_unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        ApiError::UpstreamUnavailable(e.to_string())
    }
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")] pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: "Invalid country code", details: Some(msg) }),
            ).into_response(),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody { error: "Not found", details: Some(msg) }),
            ).into_response(),
            ApiError::UpstreamUnavailable(msg) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody { error: "Upstream data source unavailable", details: Some(msg) }),
            ).into_response(),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: "Internal server error", details: Some(msg) }),
            ).into_response(),
        }
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use std::{future::Future, time::Duration};
use tracing::warn;

use crate::config::AppState;
use crate::services::exchange_service::neighbour_exchange;
use crate::services::info_service::country_info;
use crate::utils::error::ApiError;
use crate::utils::response::json_response;

/// Runs `work` under the request deadline. Expiry drops `work`, cancelling its
/// in-flight upstream calls, and reports the upstream as unavailable.
async fn within_deadline<T>(
    limit: Duration,
    work: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    tokio::time::timeout(limit, work).await.map_err(|_| {
        warn!(deadline_ms = limit.as_millis() as u64, "request deadline exceeded");
        ApiError::UpstreamUnavailable(format!(
            "upstream data not available within {} ms",
            limit.as_millis()
        ))
    })?
}

pub async fn get_info(
    State(state): State<AppState>,
    Path(country_code): Path<String>,
) -> Result<Response, ApiError> {
    let info = within_deadline(
        state.request_timeout,
        country_info(state.countries.as_ref(), &country_code),
    )
    .await?;
    json_response(StatusCode::OK, &info)
}

pub async fn get_exchange(
    State(state): State<AppState>,
    Path(country_code): Path<String>,
) -> Result<Response, ApiError> {
    let exchange = within_deadline(
        state.request_timeout,
        neighbour_exchange(
            state.countries.as_ref(),
            state.currencies.as_ref(),
            &country_code,
        ),
    )
    .await?;
    json_response(StatusCode::OK, &exchange)
}

//! HTTP clients for the two upstream providers.
//!
//! The core only sees the [`CountryDirectory`] and [`ExchangeRateSource`] traits, so
//! handlers run against the real clients and tests run against in-memory doubles.

pub mod countries;
pub mod currencies;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde::de::DeserializeOwned;

use crate::types::external::{CountryRecord, RateTable};
use crate::utils::error::UpstreamError;

pub use countries::CountriesClient;
pub use currencies::CurrencyClient;

#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Looks a country up by alpha-2 (or alpha-3) code. An empty vec means "unknown".
    async fn lookup(&self, code: &str) -> Result<Vec<CountryRecord>, UpstreamError>;
}

#[async_trait]
pub trait ExchangeRateSource: Send + Sync {
    /// Rates quoted against `base`. Case of `base` does not matter.
    async fn rates(&self, base: &str) -> Result<RateTable, UpstreamError>;
}

/// GETs `url` and decodes a JSON body, enforcing a 2xx status and, when
/// `require_json_content_type` is set, an `application/json` content type.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    provider: &'static str,
    require_json_content_type: bool,
) -> Result<T, UpstreamError> {
    let res = http
        .get(url)
        .send()
        .await
        .map_err(|source| UpstreamError::Transport { provider, source })?;

    let status = res.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { provider, status: status.as_u16() });
    }

    if require_json_content_type {
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if !content_type.starts_with("application/json") {
            return Err(UpstreamError::NotJson(provider));
        }
    }

    let body = res
        .bytes()
        .await
        .map_err(|source| UpstreamError::Transport { provider, source })?;

    serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode {
        provider,
        message: e.to_string(),
    })
}

/// Lightweight GET used by the status endpoint; yields the upstream status code.
pub async fn probe(http: &Client, url: &str, provider: &'static str) -> Result<u16, UpstreamError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(UpstreamError::NotConfigured(provider));
    }

    let res = http
        .get(url)
        .send()
        .await
        .map_err(|source| UpstreamError::Transport { provider, source })?;

    let status = res.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { provider, status: status.as_u16() });
    }
    Ok(status.as_u16())
}

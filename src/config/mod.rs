use reqwest::Client;
use std::{env, sync::Arc, time::Duration};
use tracing::info;

use crate::clients::{CountriesClient, CountryDirectory, CurrencyClient, ExchangeRateSource};
use crate::services::status_service::StatusProbe;
use crate::utils::input::clean_base_url;

#[derive(Clone)]
pub struct AppState {
    pub countries: Arc<dyn CountryDirectory>,
    pub currencies: Arc<dyn ExchangeRateSource>,
    pub status: StatusProbe,
    /// Deadline for a whole info or exchange request.
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub countries_endpoint: String,
    pub currency_endpoint: String,
    pub external_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub status_probe_timeout_ms: u64,
}

fn millis(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let port: u16 = env::var("PORT").unwrap_or_else(|_| "8080".into()).parse()?;
        let countries_endpoint = clean_base_url(&env::var("COUNTRIES_ENDPOINT").unwrap_or_default());
        let currency_endpoint = clean_base_url(&env::var("CURRENCY_ENDPOINT").unwrap_or_default());

        let mut missing = Vec::new();
        if countries_endpoint.is_empty() {
            missing.push("COUNTRIES_ENDPOINT is required");
        }
        if currency_endpoint.is_empty() {
            missing.push("CURRENCY_ENDPOINT is required");
        }
        if !missing.is_empty() {
            anyhow::bail!(missing.join("\n"));
        }

        Ok(Self {
            port,
            countries_endpoint,
            currency_endpoint,
            external_timeout_ms: millis("EXTERNAL_TIMEOUT_MS", 5_000),
            request_timeout_ms: millis("REQUEST_TIMEOUT_MS", 10_000),
            status_probe_timeout_ms: millis("STATUS_PROBE_TIMEOUT_MS", 3_000),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn build_state(&self) -> Result<AppState, anyhow::Error> {
        // upstream clients share one pool; probes get their own shorter timeout
        let http = Client::builder()
            .timeout(Duration::from_millis(self.external_timeout_ms))
            .build()?;
        let probe_http = Client::builder()
            .timeout(Duration::from_millis(self.status_probe_timeout_ms))
            .build()?;

        info!(
            countries = %self.countries_endpoint,
            currency = %self.currency_endpoint,
            "upstream endpoints configured"
        );

        Ok(AppState {
            countries: Arc::new(CountriesClient::new(http.clone(), &self.countries_endpoint)),
            currencies: Arc::new(CurrencyClient::new(http, &self.currency_endpoint)),
            status: StatusProbe::new(probe_http, &self.countries_endpoint, &self.currency_endpoint),
            request_timeout: self.request_timeout(),
        })
    }
}

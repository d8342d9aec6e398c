use reqwest::Client;
use tracing::warn;

use crate::clients::probe;
use crate::models::status::ServiceHealth;
use crate::utils::error::UpstreamError;
use crate::utils::input::clean_base_url;
use crate::utils::uptime::uptime_secs;

pub const API_VERSION: &str = "v1";

const COUNTRY_PROBE_PATH: &str = "alpha/no";
const CURRENCY_PROBE_PATH: &str = "NOK";

/// Probe targets for the status endpoint.
#[derive(Clone)]
pub struct StatusProbe {
    http: Client,
    country_url: String,
    currency_url: String,
}

impl StatusProbe {
    pub fn new(http: Client, countries_endpoint: &str, currency_endpoint: &str) -> Self {
        Self {
            http,
            country_url: probe_url(countries_endpoint, COUNTRY_PROBE_PATH),
            currency_url: probe_url(currency_endpoint, CURRENCY_PROBE_PATH),
        }
    }

    pub async fn service_health(&self) -> ServiceHealth {
        let (country, currency) = tokio::join!(
            probe(&self.http, &self.country_url, "restcountriesapi"),
            probe(&self.http, &self.currency_url, "currenciesapi"),
        );

        let health = ServiceHealth {
            country_api: status_code(&country),
            currency_api: status_code(&currency),
            version: API_VERSION,
            uptime: uptime_secs(),
        };

        if !health.is_healthy() {
            let errors: Vec<String> = [country.err(), currency.err()]
                .into_iter()
                .flatten()
                .map(|e| e.to_string())
                .collect();
            warn!(
                errors = %errors.join("; "),
                restcountriesapi = health.country_api,
                currenciesapi = health.currency_api,
                "one or more upstream services are unhealthy"
            );
        }
        health
    }
}

fn probe_url(base: &str, suffix: &str) -> String {
    let base = clean_base_url(base);
    if base.is_empty() {
        return base;
    }
    format!("{}{}", base, suffix)
}

fn status_code(result: &Result<u16, UpstreamError>) -> u16 {
    match result {
        Ok(code) => *code,
        Err(UpstreamError::Status { status, .. }) => *status,
        Err(_) => 0,
    }
}

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::{fetch_json, ExchangeRateSource};
use crate::types::external::RateTable;
use crate::utils::error::UpstreamError;
use crate::utils::input::clean_base_url;

const PROVIDER: &str = "currency";

/// Client for the exchange-rate service, e.g. `http://host:9090/currency`.
#[derive(Clone)]
pub struct CurrencyClient {
    http: Client,
    base_url: String,
}

impl CurrencyClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self { http, base_url: clean_base_url(base_url) }
    }
}

#[async_trait]
impl ExchangeRateSource for CurrencyClient {
    #[instrument(name = "rate_lookup", skip(self))]
    async fn rates(&self, base: &str) -> Result<RateTable, UpstreamError> {
        if self.base_url.is_empty() {
            return Err(UpstreamError::NotConfigured(PROVIDER));
        }

        let url = format!("{}{}", self.base_url, base.to_ascii_uppercase());
        debug!(%url, "requesting rates");
        fetch_json(&self.http, &url, PROVIDER, false).await
    }
}

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::{fetch_json, CountryDirectory};
use crate::types::external::CountryRecord;
use crate::utils::error::UpstreamError;
use crate::utils::input::clean_base_url;

const PROVIDER: &str = "countries";
const ALPHA_PATH: &str = "alpha/";

/// Client for a REST Countries style directory, e.g. `https://restcountries.com/v3.1`.
#[derive(Clone)]
pub struct CountriesClient {
    http: Client,
    base_url: String,
}

impl CountriesClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self { http, base_url: clean_base_url(base_url) }
    }
}

#[async_trait]
impl CountryDirectory for CountriesClient {
    #[instrument(name = "country_lookup", skip(self))]
    async fn lookup(&self, code: &str) -> Result<Vec<CountryRecord>, UpstreamError> {
        if self.base_url.is_empty() {
            return Err(UpstreamError::NotConfigured(PROVIDER));
        }

        let url = format!("{}{}{}", self.base_url, ALPHA_PATH, code);
        debug!(%url, "requesting country");
        fetch_json(&self.http, &url, PROVIDER, true).await
    }
}

use serde::Serialize;

/// Body of `GET /countryinfo/v1/status`. Probe codes are `0` when the upstream
/// could not be reached at all.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceHealth {
    #[serde(rename = "restcountriesapi")]
    pub country_api: u16,
    #[serde(rename = "currenciesapi")]
    pub currency_api: u16,
    pub version: &'static str,
    pub uptime: i64,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        is_success(self.country_api) && is_success(self.currency_api)
    }
}

fn is_success(code: u16) -> bool {
    (200..300).contains(&code)
}

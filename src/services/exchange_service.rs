use std::collections::{BTreeSet, HashMap};
use tracing::{debug, error, info, instrument};

use crate::clients::{CountryDirectory, ExchangeRateSource};
use crate::models::exchange::{ExchangeResponse, RateEntry};
use crate::services::lookup::{resolve_country, validated_code};
use crate::services::neighbours::resolve_neighbour_currencies;
use crate::utils::error::ApiError;

/// Exchange rates of a country's base currency against the currencies of its
/// land neighbours.
///
/// Only the subject lookup and the rate lookup can fail the request; neighbour
/// lookups are best effort. Countries without borders never reach the rate source.
#[instrument(skip(directory, rates))]
pub async fn neighbour_exchange(
    directory: &dyn CountryDirectory,
    rates: &dyn ExchangeRateSource,
    raw_code: &str,
) -> Result<ExchangeResponse, ApiError> {
    let code = validated_code(raw_code)?;
    let subject = resolve_country(directory, &code).await?;

    let base_currency = subject
        .base_currency()
        .ok_or_else(|| ApiError::NotFound(format!("no currency for country: {}", code)))?
        .to_string();

    if subject.borders.is_empty() {
        info!(country_code = %code, %base_currency, "country has no land borders");
        return Ok(ExchangeResponse {
            country: subject.name.common,
            base_currency,
            exchange_rates: Vec::new(),
        });
    }

    let neighbours = resolve_neighbour_currencies(directory, &subject.borders).await;

    let table = rates.rates(&base_currency).await.map_err(|e| {
        error!(%base_currency, error = %e, "upstream currency request failed");
        ApiError::from(e)
    })?;
    debug!(quoted_base = %table.base_code, quoted = table.rates.len(), "rates received");

    let exchange_rates = neighbour_rates(&neighbours.currencies, &table.rates);

    info!(
        country_code = %code,
        %base_currency,
        rates = exchange_rates.len(),
        skipped_neighbours = neighbours.warnings.len(),
        "exchange request completed"
    );

    Ok(ExchangeResponse {
        country: subject.name.common,
        base_currency,
        exchange_rates,
    })
}

/// Rates for the neighbour currencies the table knows about, ascending by code.
pub fn neighbour_rates(neighbours: &BTreeSet<String>, rates: &HashMap<String, f64>) -> Vec<RateEntry> {
    neighbours
        .iter()
        .filter_map(|code| {
            rates.get(code).map(|rate| RateEntry { code: code.clone(), rate: *rate })
        })
        .collect()
}

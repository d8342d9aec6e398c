use futures::future::join_all;
use std::collections::BTreeSet;
use tracing::{instrument, warn};

use crate::clients::CountryDirectory;
use crate::types::external::CountryRecord;

/// A border code that could not be resolved, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighbourWarning {
    pub border: String,
    pub reason: String,
}

/// Currencies used by the neighbours that could be resolved, plus the ones that could not.
#[derive(Debug, Default)]
pub struct NeighbourCurrencies {
    pub currencies: BTreeSet<String>,
    pub warnings: Vec<NeighbourWarning>,
}

/// Looks up every border code and collects the currency codes of the neighbours.
///
/// A failed or empty lookup is recorded as a warning and skipped; it never fails
/// the whole walk. Lookups run concurrently and results are folded in border order.
#[instrument(skip(directory, borders), fields(border_count = borders.len()))]
pub async fn resolve_neighbour_currencies(
    directory: &dyn CountryDirectory,
    borders: &[String],
) -> NeighbourCurrencies {
    let lookups = borders.iter().map(|border| lookup_neighbour(directory, border));

    join_all(lookups)
        .await
        .into_iter()
        .fold(NeighbourCurrencies::default(), |mut acc, result| {
            match result {
                Ok(neighbour) => acc.currencies.extend(neighbour.currencies.into_keys()),
                Err(w) => {
                    warn!(border = %w.border, reason = %w.reason, "skipping neighbour");
                    acc.warnings.push(w);
                }
            }
            acc
        })
}

async fn lookup_neighbour(
    directory: &dyn CountryDirectory,
    border: &str,
) -> Result<CountryRecord, NeighbourWarning> {
    let code = border.trim().to_ascii_lowercase();
    match directory.lookup(&code).await {
        Ok(records) => records.into_iter().next().ok_or_else(|| NeighbourWarning {
            border: code,
            reason: "no country found".into(),
        }),
        Err(e) => Err(NeighbourWarning { border: code, reason: e.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{country, FakeDirectory};

    fn borders(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[tokio::test]
    async fn collects_and_deduplicates_currencies() {
        let dir = FakeDirectory::default()
            .with("fin", country("Finland", &["EUR"], &[]))
            .with("swe", country("Sweden", &["SEK"], &[]))
            .with("est", country("Estonia", &["EUR"], &[]));

        let got = resolve_neighbour_currencies(&dir, &borders(&["FIN", "SWE", "EST"])).await;
        assert_eq!(got.currencies.into_iter().collect::<Vec<_>>(), vec!["EUR", "SEK"]);
        assert!(got.warnings.is_empty());
        assert_eq!(dir.calls(), vec!["fin", "swe", "est"]);
    }

    #[tokio::test]
    async fn failures_and_unknown_codes_become_warnings() {
        let dir = FakeDirectory::default()
            .with("swe", country("Sweden", &["SEK"], &[]))
            .failing("fin");

        let got = resolve_neighbour_currencies(&dir, &borders(&["FIN", "SWE", "XXX"])).await;
        assert_eq!(got.currencies.into_iter().collect::<Vec<_>>(), vec!["SEK"]);
        let skipped: Vec<_> = got.warnings.iter().map(|w| w.border.as_str()).collect();
        assert_eq!(skipped, vec!["fin", "xxx"]);
        assert_eq!(got.warnings[1].reason, "no country found");
    }

    #[tokio::test]
    async fn all_failures_yield_an_empty_set() {
        let dir = FakeDirectory::default().failing("fin").failing("swe");
        let got = resolve_neighbour_currencies(&dir, &borders(&["FIN", "SWE"])).await;
        assert!(got.currencies.is_empty());
        assert_eq!(got.warnings.len(), 2);
    }

    #[tokio::test]
    async fn multi_currency_neighbours_contribute_every_code() {
        let dir = FakeDirectory::default()
            .with("zwe", country("Zimbabwe", &["ZWL", "USD", "BWP"], &[]));
        let got = resolve_neighbour_currencies(&dir, &borders(&["ZWE"])).await;
        assert_eq!(got.currencies.into_iter().collect::<Vec<_>>(), vec!["BWP", "USD", "ZWL"]);
    }
}

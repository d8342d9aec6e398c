use serde::{de::IgnoredAny, Deserialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
}

/// One country as returned by `GET <countries-base>/alpha/{code}`.
///
/// Territories such as Antarctica omit currencies, borders and capital, so every
/// collection defaults to empty. Maps are sorted so iteration is deterministic.
/// Only currency codes matter; the per-currency details are skipped.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CountryRecord {
    #[serde(default)]
    pub name: CountryName,
    #[serde(default)]
    pub currencies: BTreeMap<String, IgnoredAny>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub flags: Flags,
}

impl CountryRecord {
    /// Lexicographically smallest currency code, if the country has any.
    pub fn base_currency(&self) -> Option<&str> {
        self.currencies.keys().next().map(String::as_str)
    }
}

/// Body of `GET <currency-base>/{BASE}`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RateTable {
    #[serde(default)]
    pub base_code: String,
    pub rates: HashMap<String, f64>,
}

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::external::CountryRecord;

/// Public shape of `GET /countryinfo/v1/info/{code}`.
///
/// `capital` is `null` when the directory lists no capital.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InfoResponse {
    pub name: String,
    pub continents: Vec<String>,
    pub population: u64,
    pub area: u64,
    pub languages: BTreeMap<String, String>,
    pub borders: Vec<String>,
    pub flag: String,
    pub capital: Option<String>,
}

impl From<CountryRecord> for InfoResponse {
    fn from(c: CountryRecord) -> Self {
        Self {
            name: c.name.common,
            continents: c.continents,
            population: c.population,
            // truncates, never rounds
            area: c.area as u64,
            languages: c.languages,
            borders: c.borders,
            flag: c.flags.png,
            capital: c.capital.into_iter().next(),
        }
    }
}

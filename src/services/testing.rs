//! In-memory upstream doubles for service tests.

use async_trait::async_trait;
use serde::de::IgnoredAny;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::clients::{CountryDirectory, ExchangeRateSource};
use crate::types::external::{CountryName, CountryRecord, RateTable};
use crate::utils::error::UpstreamError;

pub fn country(name: &str, currencies: &[&str], borders: &[&str]) -> CountryRecord {
    CountryRecord {
        name: CountryName { common: name.to_string() },
        currencies: currencies
            .iter()
            .map(|c| (c.to_string(), IgnoredAny))
            .collect::<BTreeMap<_, _>>(),
        borders: borders.iter().map(|b| b.to_string()).collect(),
        capital: vec![format!("{} City", name)],
        ..Default::default()
    }
}

enum Answer {
    Records(Vec<CountryRecord>),
    Fail(u16),
}

/// Directory keyed by lower-case code. Unknown codes answer with an empty list.
#[derive(Default)]
pub struct FakeDirectory {
    answers: HashMap<String, Answer>,
    calls: Mutex<Vec<String>>,
}

impl FakeDirectory {
    pub fn with(mut self, code: &str, record: CountryRecord) -> Self {
        self.answers.insert(code.to_string(), Answer::Records(vec![record]));
        self
    }

    pub fn with_many(mut self, code: &str, records: Vec<CountryRecord>) -> Self {
        self.answers.insert(code.to_string(), Answer::Records(records));
        self
    }

    pub fn failing(self, code: &str) -> Self {
        self.failing_with(code, 500)
    }

    pub fn failing_with(mut self, code: &str, status: u16) -> Self {
        self.answers.insert(code.to_string(), Answer::Fail(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CountryDirectory for FakeDirectory {
    async fn lookup(&self, code: &str) -> Result<Vec<CountryRecord>, UpstreamError> {
        self.calls.lock().unwrap().push(code.to_string());
        match self.answers.get(code) {
            Some(Answer::Records(records)) => Ok(records.clone()),
            Some(Answer::Fail(status)) => {
                Err(UpstreamError::Status { provider: "countries", status: *status })
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Rate source returning one fixed table, or failing, and counting calls.
#[derive(Default)]
pub struct FakeRates {
    table: Option<RateTable>,
    calls: Mutex<Vec<String>>,
}

impl FakeRates {
    pub fn with(base: &str, rates: &[(&str, f64)]) -> Self {
        Self {
            table: Some(RateTable {
                base_code: base.to_string(),
                rates: rates.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExchangeRateSource for FakeRates {
    async fn rates(&self, base: &str) -> Result<RateTable, UpstreamError> {
        self.calls.lock().unwrap().push(base.to_string());
        self.table
            .clone()
            .ok_or(UpstreamError::Status { provider: "currency", status: 502 })
    }
}

use serde::{ser::SerializeMap, Serialize, Serializer};

/// One `{code: rate}` entry of the exchange view.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEntry {
    pub code: String,
    pub rate: f64,
}

impl Serialize for RateEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.code, &self.rate)?;
        map.end()
    }
}

/// Public shape of `GET /countryinfo/v1/exchange/{code}`.
///
/// `exchange_rates` is a list of single-key objects ordered by code, so the
/// ordering survives on the wire.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExchangeResponse {
    pub country: String,
    #[serde(rename = "base-currency")]
    pub base_currency: String,
    #[serde(rename = "exchange-rates")]
    pub exchange_rates: Vec<RateEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_serialize_as_ordered_single_key_objects() {
        let resp = ExchangeResponse {
            country: "Norway".into(),
            base_currency: "NOK".into(),
            exchange_rates: vec![
                RateEntry { code: "EUR".into(), rate: 0.086536 },
                RateEntry { code: "SEK".into(), rate: 0.914075 },
            ],
        };
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"country":"Norway","base-currency":"NOK","exchange-rates":[{"EUR":0.086536},{"SEK":0.914075}]}"#
        );
    }

    #[test]
    fn empty_rates_serialize_as_empty_list() {
        let resp = ExchangeResponse {
            country: "Iceland".into(),
            base_currency: "ISK".into(),
            exchange_rates: vec![],
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["exchange-rates"], serde_json::json!([]));
    }
}

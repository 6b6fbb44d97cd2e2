use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::price::parse_price;

/// Latest prices for the tracked tickers, as published in `latest.json`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub generated_at_utc: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<PriceRow>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceRow {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticker: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub price_time_utc: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

// An explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Numbers and numeric strings are prices; null, booleans, objects and
// unparsable strings are treated as absent.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => parse_price(&text),
        _ => None,
    })
}

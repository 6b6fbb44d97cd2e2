use std::collections::HashMap;

use crate::price::parse_price;
use crate::tickers::TIMESTAMP_COLUMN;

/// One time bucket of the price history, keyed by the header names of the
/// file it came from. Fields missing from a short row are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryRecord {
    fields: HashMap<String, String>,
}

impl HistoryRecord {
    /// Pairs header names with row values. Surplus values are dropped and
    /// surplus headers stay unset. A repeated header keeps its last value.
    pub fn from_columns<H, V>(headers: H, values: V) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let fields = headers
            .into_iter()
            .zip(values)
            .map(|(header, value)| (header.into(), value.into()))
            .collect();

        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.get(TIMESTAMP_COLUMN)
    }

    pub fn price(&self, ticker: &str) -> Option<f64> {
        self.get(ticker).and_then(parse_price)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

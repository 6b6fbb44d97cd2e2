use std::fmt;

use qwatch_shared_models::{PLACEHOLDER, TIMESTAMP_COLUMN, TRACKED_TICKERS};

use crate::table::TableBody;

pub const PRICE_TABLE_ID: &str = "priceTable";
pub const HISTORY_TABLE_ID: &str = "historyTable";
/// The manual refresh control.
pub const REFRESH_CONTROL_ID: &str = "refreshBtn";

const PRICE_HEADER: [&str; 4] = ["Ticker", "Name", "Price (USD)", "Price time (UTC)"];

/// Display surface: a status line and two tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    updated_at: String,
    prices: TableBody,
    history: TableBody,
}

impl Board {
    pub fn new() -> Self {
        let history_header = std::iter::once(TIMESTAMP_COLUMN)
            .chain(TRACKED_TICKERS)
            .collect();

        Self {
            updated_at: PLACEHOLDER.to_string(),
            prices: TableBody::new(PRICE_TABLE_ID, PRICE_HEADER.to_vec()),
            history: TableBody::new(HISTORY_TABLE_ID, history_header),
        }
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn set_updated_at(&mut self, value: impl Into<String>) {
        self.updated_at = value.into();
    }

    pub fn prices(&self) -> &TableBody {
        &self.prices
    }

    pub fn prices_mut(&mut self) -> &mut TableBody {
        &mut self.prices
    }

    pub fn history(&self) -> &TableBody {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut TableBody {
        &mut self.history
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated (UTC): {}", self.updated_at)?;
        writeln!(f)?;
        writeln!(f, "Latest prices")?;
        write!(f, "{}", self.prices.to_table())?;
        writeln!(f)?;
        writeln!(f, "History (most recent first)")?;
        if self.history.is_empty() {
            writeln!(f, "  no history yet")
        } else {
            write!(f, "{}", self.history.to_table())
        }
    }
}

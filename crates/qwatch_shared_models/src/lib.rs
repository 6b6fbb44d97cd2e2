pub mod history;
pub mod price;
pub mod snapshot;
pub mod tickers;

pub use history::HistoryRecord;
pub use price::{fmt_price, parse_price};
pub use snapshot::{PriceRow, Snapshot};
pub use tickers::{PLACEHOLDER, TIMESTAMP_COLUMN, TRACKED_TICKERS, ticker_name};

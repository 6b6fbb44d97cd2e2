/// Shown wherever a value is missing or cannot be displayed.
pub const PLACEHOLDER: &str = "-";

/// First column of every history record.
pub const TIMESTAMP_COLUMN: &str = "timestamp_utc";

/// Tickers tracked in the history file, in column order.
pub const TRACKED_TICKERS: [&str; 5] = ["QSI", "QBTS", "RGTI", "IONQ", "QTUM"];

const TICKER_NAMES: [(&str, &str); 5] = [
    ("QSI", "Quantum-Si"),
    ("QBTS", "D-Wave Quantum"),
    ("RGTI", "Rigetti Computing"),
    ("IONQ", "IonQ"),
    ("QTUM", "Defiance Quantum ETF (QTUM)"),
];

/// Display name for a ticker, or [`PLACEHOLDER`] if it is not in the catalog.
pub fn ticker_name(ticker: &str) -> &'static str {
    TICKER_NAMES
        .iter()
        .find(|(symbol, _)| *symbol == ticker)
        .map(|(_, name)| *name)
        .unwrap_or(PLACEHOLDER)
}

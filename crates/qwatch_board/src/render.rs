use qwatch_shared_models::{
    HistoryRecord, PLACEHOLDER, PriceRow, Snapshot, TRACKED_TICKERS, fmt_price, ticker_name,
};

use crate::board::Board;

/// How many history records are shown when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 80;

/// Ticker, display name, formatted price, observation time.
pub fn price_row(row: &PriceRow) -> Vec<String> {
    vec![
        row.ticker.clone(),
        ticker_name(&row.ticker).to_string(),
        fmt_price(row.price_usd),
        row.price_time_utc
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    ]
}

/// Time followed by one formatted price per tracked ticker.
pub fn history_row(record: &HistoryRecord) -> Vec<String> {
    let time = record.timestamp().unwrap_or(PLACEHOLDER).to_string();

    std::iter::once(time)
        .chain(
            TRACKED_TICKERS
                .iter()
                .map(|ticker| fmt_price(record.price(ticker))),
        )
        .collect()
}

/// Writes the snapshot onto the board, replacing every price row.
pub fn render_latest(board: &mut Board, snapshot: &Snapshot) {
    board.set_updated_at(
        snapshot
            .generated_at_utc
            .as_deref()
            .unwrap_or(PLACEHOLDER),
    );

    let rows = snapshot.rows.iter().map(price_row).collect();
    board.prices_mut().replace_rows(rows);
}

/// Shows the last `limit` records, most recent first, replacing every history
/// row. With no records the table is left as it was.
///
/// Returns the number of rows now on the board, or `None` if nothing changed.
pub fn render_history(board: &mut Board, records: &[HistoryRecord], limit: usize) -> Option<usize> {
    if records.is_empty() {
        return None;
    }

    let rows: Vec<Vec<String>> = records.iter().rev().take(limit).map(history_row).collect();
    let count = rows.len();
    board.history_mut().replace_rows(rows);

    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ticker: &str, price: Option<f64>, time: Option<&str>) -> PriceRow {
        PriceRow {
            ticker: ticker.to_string(),
            price_usd: price,
            price_time_utc: time.map(str::to_string),
            source: None,
        }
    }

    #[test]
    fn price_row_columns() {
        assert_eq!(
            price_row(&row("QBTS", Some(3.0), Some("2026-01-05T14:30:00+00:00"))),
            vec!["QBTS", "D-Wave Quantum", "3.00", "2026-01-05T14:30:00+00:00"]
        );
    }

    #[test]
    fn price_row_placeholders() {
        assert_eq!(price_row(&row("ZZZ", None, None)), vec!["ZZZ", "-", "-", "-"]);
    }

    #[test]
    fn history_row_uses_fixed_column_order() {
        // file order differs from display order
        let record = HistoryRecord::from_columns(
            ["QTUM", "IONQ", "timestamp_utc", "QSI"],
            ["70.5", "x", "t1", "2"],
        );

        assert_eq!(
            history_row(&record),
            vec!["t1", "2.00", "-", "-", "-", "70.50"]
        );
    }

    #[test]
    fn history_row_without_time() {
        let record = HistoryRecord::from_columns(["QSI"], ["1"]);
        assert_eq!(history_row(&record)[0], "-");
    }

    #[test]
    fn limit_zero_renders_no_rows() {
        let mut board = Board::new();
        let records = vec![HistoryRecord::from_columns(["timestamp_utc"], ["t1"])];

        assert_eq!(render_history(&mut board, &records, 0), Some(0));
        assert!(board.history().is_empty());
    }
}

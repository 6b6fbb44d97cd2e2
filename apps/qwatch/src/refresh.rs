use parking_lot::Mutex;
use qwatch_board::{Board, render_history, render_latest};
use qwatch_feed::{FeedClient, FeedError, Source, parse_history};

/// What happened to the history table during a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStage {
    /// The table was replaced with this many rows.
    Rendered(usize),
    /// History was fetched but held no records; the table was left as is.
    Empty,
    /// The history resource is not published yet; the table was left as is.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
    pub prices: usize,
    pub history: HistoryStage,
}

/// Fetches the snapshot and renders it, then does the same for the history on
/// a best-effort basis.
///
/// A snapshot failure returns before the history is requested. The board lock
/// is only taken to swap table contents, never across a fetch.
pub async fn refresh_all<S: Source>(
    client: &FeedClient<S>,
    board: &Mutex<Board>,
    history_limit: usize,
) -> Result<RefreshReport, FeedError> {
    let latest = client.load_latest().await?;
    render_latest(&mut board.lock(), &latest);
    let prices = latest.rows.len();

    let history = match client.load_history_csv().await? {
        Some(text) => {
            let records = parse_history(&text);
            let rendered = render_history(&mut board.lock(), &records, history_limit);
            match rendered {
                Some(count) => HistoryStage::Rendered(count),
                None => HistoryStage::Empty,
            }
        }
        None => HistoryStage::Unavailable,
    };

    Ok(RefreshReport { prices, history })
}

use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;
use qwatch_board::{Board, REFRESH_CONTROL_ID};
use qwatch_feed::{FeedClient, FeedError, Source};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::refresh::{HistoryStage, RefreshReport, refresh_all};
use crate::trigger::Trigger;

/// The board together with the client that fills it.
pub struct Dashboard<S> {
    client: Arc<FeedClient<S>>,
    board: Arc<Mutex<Board>>,
    history_limit: usize,
    interactive: bool,
}

impl<S> Clone for Dashboard<S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            board: Arc::clone(&self.board),
            history_limit: self.history_limit,
            interactive: self.interactive,
        }
    }
}

impl<S> Dashboard<S>
where
    S: Source + Send + Sync + 'static,
{
    pub fn new(client: FeedClient<S>, history_limit: usize, interactive: bool) -> Self {
        Self {
            client: Arc::new(client),
            board: Arc::new(Mutex::new(Board::new())),
            history_limit,
            interactive,
        }
    }

    pub async fn refresh(&self, trigger: Trigger) -> Result<RefreshReport, FeedError> {
        tracing::info!(%trigger, "Refreshing board");

        let report = refresh_all(&self.client, &self.board, self.history_limit).await?;

        match report.history {
            HistoryStage::Rendered(rows) => {
                tracing::info!(%trigger, prices = report.prices, history = rows, "Board refreshed");
            }
            HistoryStage::Empty => {
                tracing::info!(%trigger, prices = report.prices, "Board refreshed, history has no records");
            }
            HistoryStage::Unavailable => {
                tracing::info!(%trigger, prices = report.prices, "Board refreshed, history not available yet");
            }
        }

        Ok(report)
    }

    /// Refreshes and shows the board. Manual failures are put in front of the
    /// user, automatic ones only reach the log.
    pub async fn handle(&self, trigger: Trigger) {
        match self.refresh(trigger).await {
            Ok(_) => self.print(trigger),
            Err(e) if trigger == Trigger::Manual => alert(&e),
            Err(e) => tracing::error!(%trigger, error = %e, "Refresh failed"),
        }
    }

    pub fn print(&self, trigger: Trigger) {
        let board = self.board.lock();
        println!("{board}");
        if self.interactive {
            println!(
                "Refreshed {} ({trigger}). [{REFRESH_CONTROL_ID}] Enter: refresh, q: quit",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            );
        }
    }

    /// Starts a refresh for every trigger received. Refreshes are not
    /// coordinated: overlapping ones run side by side and the last to finish
    /// wins each table.
    ///
    /// Cancellation aborts refreshes still in flight; a closed trigger channel
    /// lets them finish first.
    pub async fn run(&self, mut triggers: mpsc::Receiver<Trigger>, cancel: CancellationToken) {
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::debug!(in_flight = in_flight.len(), "Board cancelled");
                    in_flight.shutdown().await;
                    return;
                }
                trigger = triggers.recv() => {
                    let Some(trigger) = trigger else { break };
                    let dashboard = self.clone();
                    in_flight.spawn(async move { dashboard.handle(trigger).await });
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    report_join(joined);
                }
            }
        }

        while let Some(joined) = in_flight.join_next().await {
            report_join(joined);
        }
    }
}

fn report_join(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        if e.is_panic() {
            tracing::error!(error = %e, "Refresh task panicked");
        }
    }
}

fn alert(error: &FeedError) {
    eprintln!();
    eprintln!("!! Refresh failed: {error}");
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use qwatch_feed::DirSource;
    use std::path::Path;

    const LATEST: &str = r#"{"generated_at_utc": "2026-01-05T14:35:00+00:00", "rows": [{"ticker": "QSI", "price_usd": 2.5}]}"#;

    fn dashboard(root: &Path) -> Dashboard<DirSource> {
        let client = FeedClient::builder().source(DirSource::new(root)).build();
        Dashboard::new(client, 80, false)
    }

    #[tokio::test]
    async fn triggers_refresh_the_board() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/latest.json"), LATEST).unwrap();
        std::fs::write(
            dir.path().join("data/history.csv"),
            "timestamp_utc,QSI\nt0,2.4\nt1,2.5\n",
        )
        .unwrap();

        let dashboard = dashboard(dir.path());
        let (tx, rx) = mpsc::channel(4);
        tx.send(Trigger::Initial).await.unwrap();
        tx.send(Trigger::Manual).await.unwrap();
        drop(tx);

        dashboard.run(rx, CancellationToken::new()).await;

        let board = dashboard.board.lock();
        assert_eq!(board.updated_at(), "2026-01-05T14:35:00+00:00");
        assert_eq!(board.prices().len(), 1);
        assert_eq!(board.history().rows()[0][0], "t1");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_board() {
        let dir = tempfile::tempdir().unwrap();
        let dashboard = dashboard(dir.path());

        assert!(matches!(
            dashboard.refresh(Trigger::Interval).await,
            Err(FeedError::Retrieval(_))
        ));

        // neither path panics or touches the board
        dashboard.handle(Trigger::Manual).await;
        dashboard.handle(Trigger::Interval).await;
        assert_eq!(*dashboard.board.lock(), Board::new());
    }

    #[tokio::test]
    async fn cancellation_stops_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let dashboard = dashboard(dir.path());
        let (_tx, rx) = mpsc::channel::<Trigger>(1);
        let cancel = CancellationToken::new();
        cancel.cancel();

        dashboard.run(rx, cancel).await;
    }
}

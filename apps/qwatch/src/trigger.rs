use std::fmt;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Why a refresh was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Initial,
    Interval,
    Manual,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Initial => write!(f, "initial"),
            Trigger::Interval => write!(f, "interval"),
            Trigger::Manual => write!(f, "manual"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Quit,
    Unknown(String),
}

impl Command {
    /// An empty line or `r` refreshes, `q` quits.
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "r" | "refresh" => Command::Refresh,
            "q" | "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Sends [`Trigger::Initial`] right away, then [`Trigger::Interval`] every
/// `period` until cancelled or the receiver goes away.
pub fn spawn_timer(
    period: Duration,
    tx: mpsc::Sender<Trigger>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tx.send(Trigger::Initial).await.is_err() {
            return;
        }

        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::debug!("Refresh timer cancelled");
                    break;
                }
                _ = interval.tick() => {
                    if tx.send(Trigger::Interval).await.is_err() {
                        break;
                    }
                }
            }
        }
    })
}

/// Turns lines of `input` into manual triggers. `q` cancels the whole board;
/// the end of input only stops listening.
pub fn spawn_manual_input<R>(
    input: R,
    tx: mpsc::Sender<Trigger>,
    cancel: CancellationToken,
) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(input).lines();

        loop {
            let line = tokio::select! {
                () = cancel.cancelled() => break,
                line = lines.next_line() => line,
            };

            match line {
                Ok(Some(line)) => match Command::parse(&line) {
                    Command::Refresh => {
                        if tx.send(Trigger::Manual).await.is_err() {
                            break;
                        }
                    }
                    Command::Quit => {
                        tracing::info!("Quit requested");
                        cancel.cancel();
                        break;
                    }
                    Command::Unknown(other) => {
                        eprintln!("Unknown command '{other}': press Enter to refresh, q to quit");
                    }
                },
                Ok(None) => {
                    tracing::debug!("Input closed, manual refresh disabled");
                    break;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read input, manual refresh disabled");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(""), Command::Refresh);
        assert_eq!(Command::parse(" R \n"), Command::Refresh);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("QUIT"), Command::Quit);
        assert_eq!(Command::parse("x"), Command::Unknown("x".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_fires_initial_then_every_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let cancel = CancellationToken::new();
        let started = Instant::now();
        let handle = spawn_timer(Duration::from_secs(300), tx, cancel.clone());

        assert_eq!(rx.recv().await, Some(Trigger::Initial));
        assert!(started.elapsed() < Duration::from_secs(1));

        assert_eq!(rx.recv().await, Some(Trigger::Interval));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(300) && elapsed < Duration::from_secs(301));

        assert_eq!(rx.recv().await, Some(Trigger::Interval));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(600) && elapsed < Duration::from_secs(601));

        cancel.cancel();
        handle.await.unwrap();
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let handle = spawn_timer(Duration::from_secs(1), tx, CancellationToken::new());

        handle.await.unwrap();
    }

    #[tokio::test]
    async fn input_lines_become_manual_triggers() {
        let (tx, mut rx) = mpsc::channel(8);
        let cancel = CancellationToken::new();

        let handle = spawn_manual_input(&b"\nr\nwhat\nq\nr\n"[..], tx, cancel.clone());
        handle.await.unwrap();

        assert_eq!(rx.recv().await, Some(Trigger::Manual));
        assert_eq!(rx.recv().await, Some(Trigger::Manual));
        // nothing after quit
        assert_eq!(rx.recv().await, None);
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn end_of_input_does_not_cancel() {
        let (tx, mut rx) = mpsc::channel(8);
        let cancel = CancellationToken::new();

        spawn_manual_input(&b"r\n"[..], tx, cancel.clone())
            .await
            .unwrap();

        assert_eq!(rx.recv().await, Some(Trigger::Manual));
        assert_eq!(rx.recv().await, None);
        assert!(!cancel.is_cancelled());
    }
}

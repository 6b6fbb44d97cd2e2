use std::time::Duration;

use clap::Parser;
use qwatch_board::DEFAULT_HISTORY_LIMIT;
use qwatch_feed::{DEFAULT_HISTORY_PATH, DEFAULT_SNAPSHOT_PATH};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Terminal board for the quantum watchlist prices", long_about = None)]
pub struct Args {
    /// Where the data lives: an http(s) URL or a local directory
    #[arg(long, env = "QWATCH_BASE", default_value = ".")]
    pub base: String,

    /// Snapshot resource, relative to the base
    #[arg(long, env = "QWATCH_SNAPSHOT_PATH", default_value = DEFAULT_SNAPSHOT_PATH)]
    pub snapshot_path: String,

    /// History resource, relative to the base
    #[arg(long, env = "QWATCH_HISTORY_PATH", default_value = DEFAULT_HISTORY_PATH)]
    pub history_path: String,

    /// Seconds between automatic refreshes
    #[arg(long, env = "QWATCH_INTERVAL_SECS", default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: u64,

    /// Number of history rows to show
    #[arg(long, env = "QWATCH_HISTORY_LIMIT", default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    /// Per-request timeout in seconds (transport default when unset)
    #[arg(long, env = "QWATCH_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Refresh once and exit
    #[arg(long)]
    pub once: bool,
}

impl Args {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub mod client;
pub mod error;
pub mod history;
pub mod source;

pub use client::{DEFAULT_HISTORY_PATH, DEFAULT_SNAPSHOT_PATH, FeedClient};
pub use error::{FeedError, SNAPSHOT_UNAVAILABLE};
pub use history::parse_history;
pub use source::{DirSource, FeedSource, Fetched, HttpSource, Source};

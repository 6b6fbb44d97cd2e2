use thiserror::Error;

/// Fixed message raised when the snapshot resource answers with a failure status.
pub const SNAPSHOT_UNAVAILABLE: &str = "could not load latest.json";

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("{0}")]
    Retrieval(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Error reading resource: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error decoding response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid base location: {0}")]
    InvalidBase(String),
}

use bon::Builder;
use qwatch_shared_models::Snapshot;

use crate::error::{FeedError, SNAPSHOT_UNAVAILABLE};
use crate::source::Source;

pub const DEFAULT_SNAPSHOT_PATH: &str = "data/latest.json";
pub const DEFAULT_HISTORY_PATH: &str = "data/history.csv";

/// Loads the snapshot and history resources from a [`Source`].
#[derive(Builder)]
#[builder(on(String, into))]
pub struct FeedClient<S> {
    source: S,
    #[builder(default = DEFAULT_SNAPSHOT_PATH.to_string())]
    snapshot_path: String,
    #[builder(default = DEFAULT_HISTORY_PATH.to_string())]
    history_path: String,
}

impl<S: Source> FeedClient<S> {
    /// Fetches and decodes the latest snapshot. A failure status is an error.
    pub async fn load_latest(&self) -> Result<Snapshot, FeedError> {
        let fetched = self.source.fetch(&self.snapshot_path).await?;
        if !fetched.is_success() {
            tracing::debug!(status = fetched.status, path = %self.snapshot_path, "Snapshot unavailable");
            return Err(FeedError::Retrieval(SNAPSHOT_UNAVAILABLE));
        }

        Ok(serde_json::from_str(&fetched.body)?)
    }

    /// Fetches the raw history text. A failure status means the history has not
    /// been published yet and yields `None`.
    pub async fn load_history_csv(&self) -> Result<Option<String>, FeedError> {
        let fetched = self.source.fetch(&self.history_path).await?;
        if !fetched.is_success() {
            tracing::debug!(status = fetched.status, path = %self.history_path, "History not available yet");
            return Ok(None);
        }

        Ok(Some(fetched.body))
    }
}

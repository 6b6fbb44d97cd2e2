use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use bon::bon;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use reqwest::{Client, ClientBuilder, Url};

use crate::error::FeedError;

/// Raw answer for one resource: a status code and the body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: String,
}

impl Fetched {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Somewhere the board's resources can be read from, addressed by relative path.
///
/// A resource that does not exist is reported as a failure status, not as an
/// error; errors are reserved for transport problems.
pub trait Source {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<Fetched, FeedError>> + Send;
}

/// Reads resources over HTTP with caching disabled.
pub struct HttpSource {
    base: Url,
    reqwest: Client,
}

#[bon]
impl HttpSource {
    #[builder]
    pub fn new(base: &str, timeout: Option<Duration>) -> Result<Self, FeedError> {
        let base = base_url(base)?;

        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let mut builder = ClientBuilder::new().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base,
            reqwest: builder.build()?,
        })
    }
}

// Relative paths are resolved against the base as a directory, so
// `https://host/board` and `https://host/board/` behave the same.
fn base_url(base: &str) -> Result<Url, FeedError> {
    let mut url = Url::parse(base).map_err(|e| FeedError::InvalidBase(format!("{base}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(FeedError::InvalidBase(base.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl Source for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, FeedError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| FeedError::InvalidBase(format!("{path}: {e}")))?;

        tracing::debug!(%url, "Fetching resource");

        let response = self.reqwest.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Fetched { status, body })
    }
}

/// Reads resources from a local directory. Missing files answer 404.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Source for DirSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, FeedError> {
        let file = self.root.join(path);
        tracing::debug!(path = %file.display(), "Reading resource");

        // decoded lossily, as the HTTP source does
        match tokio::fs::read(&file).await {
            Ok(bytes) => Ok(Fetched {
                status: 200,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Fetched {
                status: 404,
                body: String::new(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Source chosen from a base location: URLs go over HTTP, anything else is a
/// directory on disk.
pub enum FeedSource {
    Http(HttpSource),
    Dir(DirSource),
}

impl FeedSource {
    pub fn from_base(base: &str, timeout: Option<Duration>) -> Result<Self, FeedError> {
        if base.starts_with("http://") || base.starts_with("https://") {
            let source = HttpSource::builder()
                .base(base)
                .maybe_timeout(timeout)
                .build()?;
            Ok(Self::Http(source))
        } else {
            Ok(Self::Dir(DirSource::new(base)))
        }
    }
}

impl Source for FeedSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, FeedError> {
        match self {
            Self::Http(source) => source.fetch(path).await,
            Self::Dir(source) => source.fetch(path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let fetched = |status| Fetched {
            status,
            body: String::new(),
        };
        assert!(fetched(200).is_success());
        assert!(fetched(204).is_success());
        assert!(!fetched(304).is_success());
        assert!(!fetched(404).is_success());
        assert!(!fetched(500).is_success());
    }

    #[test]
    fn base_url_is_treated_as_directory() {
        let url = base_url("https://example.com/board").unwrap();
        assert_eq!(
            url.join("data/latest.json").unwrap().as_str(),
            "https://example.com/board/data/latest.json"
        );

        let url = base_url("https://example.com/board/").unwrap();
        assert_eq!(url.path(), "/board/");
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(matches!(
            base_url("not a url"),
            Err(FeedError::InvalidBase(_))
        ));
        assert!(matches!(
            base_url("mailto:someone@example.com"),
            Err(FeedError::InvalidBase(_))
        ));
    }

    #[test]
    fn base_picks_source_kind() {
        assert!(matches!(
            FeedSource::from_base("https://example.com", None),
            Ok(FeedSource::Http(_))
        ));
        assert!(matches!(
            FeedSource::from_base("./public", None),
            Ok(FeedSource::Dir(_))
        ));
    }
}

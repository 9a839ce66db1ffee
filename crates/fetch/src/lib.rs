//! Idempotent HTTP asset fetching into the archive tree.
//!
//! Every asset URL maps to `<archive>/external/<host>/<url path>` — the
//! URL with its scheme stripped, used verbatim as a relative path. A file
//! existing at the destination means the asset is already satisfied and
//! no request is made.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// Subdirectory of the archive holding mirrored assets.
pub const EXTERNAL_DIR: &str = "external";

/// Errors from a fetch, tagged with the offending URL or path.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("URL has no scheme: {0}")]
    InvalidUrl(String),

    #[error("HTTP error fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a [`Fetcher::ensure`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The asset was fetched and written.
    Downloaded,
    /// A file already existed at the destination; nothing was fetched.
    AlreadyPresent,
}

/// Fetches assets into the archive's `external/` tree at most once per
/// destination path.
pub struct Fetcher {
    http: reqwest::Client,
    external_root: PathBuf,
}

impl Fetcher {
    /// Creates a fetcher rooted at the given archive directory.
    pub fn new(archive_dir: &Path) -> Self {
        Self::with_client(reqwest::Client::new(), archive_dir)
    }

    /// Creates a fetcher with a caller-supplied HTTP client.
    pub fn with_client(http: reqwest::Client, archive_dir: &Path) -> Self {
        Self {
            http,
            external_root: archive_dir.join(EXTERNAL_DIR),
        }
    }

    /// Maps a URL to its destination path under the archive.
    pub fn external_path(&self, url: &str) -> Result<PathBuf, FetchError> {
        let (_, rest) = url
            .split_once("://")
            .ok_or_else(|| FetchError::InvalidUrl(url.to_string()))?;
        Ok(self.external_root.join(rest))
    }

    /// Fetches `url` unless its destination file already exists.
    ///
    /// The existence check and the write are not atomic: two concurrent
    /// calls for the same destination can both fetch and both write the
    /// same bytes. That is redundant work, not a correctness problem.
    pub async fn ensure(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        let path = self.external_path(url)?;

        match tokio::fs::try_exists(&path).await {
            Ok(true) => {
                trace!(url, "already present, skipping");
                return Ok(FetchOutcome::AlreadyPresent);
            }
            Ok(false) => {}
            Err(source) => return Err(FetchError::Io { path, source }),
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| FetchError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

        tokio::fs::write(&path, &body)
            .await
            .map_err(|source| FetchError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(url, bytes = body.len(), "downloaded");
        Ok(FetchOutcome::Downloaded)
    }
}

//! Snapshot run errors.

use std::path::PathBuf;

/// Errors that end a snapshot run.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Resuming a partial archive is unsupported; remove the directory
    /// and rerun.
    #[error("archive directory {} already exists", .0.display())]
    ArchiveExists(PathBuf),

    #[error("session error: {0}")]
    Session(#[from] shopsnap_protocol::session::SessionError),

    #[error("session ended before the catalog was complete")]
    SessionEnded,

    #[error(transparent)]
    Catalog(#[from] shopsnap_catalog::CatalogError),

    #[error(transparent)]
    Fetch(#[from] shopsnap_fetch::FetchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A sibling task failed first; never the reported run cause.
    #[error("cancelled")]
    Cancelled,

    #[error("download task panicked")]
    TaskPanic,
}

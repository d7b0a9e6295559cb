//! Error types for mirrorsync-engine.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from the sync workflows.
///
/// Every variant is fatal: errors propagate to the binary and terminate the
/// process with a non-zero status. There is no local recovery and no retry;
/// the only non-fatal subprocess outcome (the downloader's "not found"
/// status) is handled inline in the initializer and never becomes an error.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An external command exited non-zero (or was signal-terminated).
    #[error("command `{command}` failed with status {status}")]
    CommandFailed { command: String, status: i32 },

    /// The downloader failed with a status other than the tolerated
    /// "not found" code.
    #[error("download of {url} failed with status {status}")]
    DownloadFailed { url: String, status: i32 },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure to connect to or write to the progress socket. Fatal — the
    /// supervisor is expected to be listening for the whole run.
    #[error("progress socket error at {path}: {source}")]
    Socket {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (progress messages).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`SyncError::Socket`].
pub(crate) fn socket_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Socket {
        path: path.into(),
        source,
    }
}

//! Error types for mirrorsync-core.

use thiserror::Error;

/// All errors that can arise from parsing the configuration argument.
///
/// Configuration errors are fatal — there is no retry and no default
/// fallback for a missing data directory.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The argument was not valid JSON, or lacked `storage-file.data-directory`.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

//! The JSON configuration argument.
//!
//! Both binaries take exactly one positional argument: a JSON object of
//! (at minimum) the shape
//!
//! ```text
//! {"storage-file": {"data-directory": "/var/cache/mirrors/maven"}}
//! ```
//!
//! Only `storage-file.data-directory` is consumed; every other field is
//! ignored. The value is parsed once at process start and read-only
//! thereafter.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Parsed mirror configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MirrorConfig {
    #[serde(rename = "storage-file")]
    pub storage_file: StorageFile,
}

/// The `storage-file` section of the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageFile {
    /// Absolute path to the local mirror tree.
    #[serde(rename = "data-directory")]
    pub data_directory: PathBuf,
}

impl MirrorConfig {
    /// Parse the raw CLI argument. A missing `storage-file` section or
    /// `data-directory` field is a parse error, same as malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn data_dir(&self) -> &Path {
        &self.storage_file.data_directory
    }
}

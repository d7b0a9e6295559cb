//! Upstream endpoints, external tool paths, and the supervisor socket.
//!
//! The defaults match the production deployment; tests override individual
//! fields to point at fake tools and a scratch socket.

use std::path::PathBuf;

pub const RSYNC_SOURCE: &str = "rsync://mirrors.tuna.tsinghua.edu.cn/maven";
pub const FILE_SOURCE: &str = "https://mirrors.tuna.tsinghua.edu.cn/maven";
pub const API_SOCKET: &str = "/run/mirrors/api.socket";

pub const RSYNC_BIN: &str = "/usr/bin/rsync";
pub const WGET_BIN: &str = "/usr/bin/wget";

/// Where to sync from, which tools to invoke, and where to report progress.
#[derive(Debug, Clone)]
pub struct Sources {
    /// rsync endpoint used for the listing and the authoritative pass.
    pub rsync_source: String,
    /// HTTP endpoint used for per-file downloads; joined with each file's
    /// relative path by plain segment concatenation.
    pub file_source: String,
    /// Unix socket of the supervising process (initializer only).
    pub socket_path: PathBuf,
    pub rsync_bin: PathBuf,
    pub wget_bin: PathBuf,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            rsync_source: RSYNC_SOURCE.to_string(),
            file_source: FILE_SOURCE.to_string(),
            socket_path: PathBuf::from(API_SOCKET),
            rsync_bin: PathBuf::from(RSYNC_BIN),
            wget_bin: PathBuf::from(WGET_BIN),
        }
    }
}

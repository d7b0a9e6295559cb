//! Updater workflow — one incremental rsync pass over an initialized mirror.
//!
//! No listing, no per-file logic, no progress reporting; rsync's own
//! consistency semantics (including deletions and symlinks) are
//! authoritative. Any non-zero rsync status is fatal — there are no
//! tolerated codes here.

use log::info;

use mirrorsync_core::MirrorConfig;

use crate::error::SyncError;
use crate::process::run_command;
use crate::sources::Sources;

/// Re-sync the configured data directory from the rsync source.
pub fn run(config: &MirrorConfig, sources: &Sources) -> Result<(), SyncError> {
    let data_dir = config.data_dir();
    info!("updating mirror at {}", data_dir.display());
    let destination = data_dir.display().to_string();
    run_command(
        &sources.rsync_bin,
        [
            "-v",
            "-a",
            "-z",
            "--delete",
            sources.rsync_source.as_str(),
            destination.as_str(),
        ],
    )
}

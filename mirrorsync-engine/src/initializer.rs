//! Initializer workflow — three-stage bulk population of the local mirror.
//!
//! ## Stages and progress weights
//!
//! 1. **Listing (10%)** — dry-run enumeration of the remote tree; local
//!    directories are created, non-directory entries become download
//!    candidates.
//! 2. **Download (70%)** — each missing candidate is fetched over HTTP into
//!    a `.tmp` sibling, then renamed into place (atomic on POSIX).
//! 3. **Rsync (20%)** — one authoritative pass that fixes up symlinks and
//!    permissions and deletes files gone upstream, none of which stage 2
//!    handles.
//!
//! Progress is emitted after each unit of work and is monotonically
//! non-decreasing across the run: 10, then `10 + 70·i/total` per candidate,
//! then 80 unconditionally (integer division undershoots), then 100.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use rand::seq::SliceRandom;
use rand::thread_rng;

use mirrorsync_core::{listing, MirrorConfig};

use crate::error::{io_err, SyncError};
use crate::process::{run_command, shell_call, shell_call_with_status};
use crate::progress::ProgressReporter;
use crate::sources::Sources;

const PROGRESS_STAGE_1: u8 = 10;
const PROGRESS_STAGE_2: u8 = 70;

/// wget exit status for "server issued an error response" (HTTP 404 among
/// them). Tolerated: the rsync listing source and the HTTP download source
/// are different physical mirrors and may transiently disagree about which
/// files exist. Hard-coded to wget's convention; revisit if the downloader
/// tool changes.
const WGET_NOT_FOUND: i32 = 8;

/// Run the full initializer workflow against `sources`, populating the
/// configured data directory and reporting progress through `reporter`.
pub fn run<W: Write>(
    config: &MirrorConfig,
    sources: &Sources,
    reporter: &mut ProgressReporter<W>,
) -> Result<(), SyncError> {
    let data_dir = config.data_dir();

    info!("start fetching file list");
    let candidates = make_dirs_and_list_files(sources, data_dir)?;
    info!("file list fetched, total {} files", candidates.len());
    reporter.send(PROGRESS_STAGE_1)?;

    download_candidates(sources, data_dir, candidates, reporter)?;
    reporter.send(PROGRESS_STAGE_1 + PROGRESS_STAGE_2)?;

    // Authoritative pass: symlinks, permissions, upstream deletions.
    let destination = data_dir.display().to_string();
    run_command(
        &sources.rsync_bin,
        [
            "-a",
            "-z",
            "--delete",
            sources.rsync_source.as_str(),
            destination.as_str(),
        ],
    )?;

    reporter.send(100)?;
    Ok(())
}

/// Stage 1: list the remote tree, create local directories, and return the
/// relative paths of all download candidates.
///
/// Hidden entries and symlinks are excluded before anything else — a hidden
/// directory is neither created nor descended into by the downloader, and
/// symlinks are left to the stage-3 rsync pass.
fn make_dirs_and_list_files(
    sources: &Sources,
    data_dir: &Path,
) -> Result<Vec<String>, SyncError> {
    let output = shell_call(&format!(
        "{} -a --no-motd --list-only {} 2>&1",
        sources.rsync_bin.display(),
        sources.rsync_source,
    ))?;

    let mut candidates = Vec::new();
    for entry in listing::parse_listing(&output) {
        if entry.is_hidden() || entry.is_symlink() {
            continue;
        }
        if entry.is_dir() {
            let dir = data_dir.join(&entry.path);
            std::fs::create_dir_all(&dir).map_err(|e| io_err(dir, e))?;
        } else {
            candidates.push(entry.path);
        }
    }
    Ok(candidates)
}

/// Stage 2: download every candidate that is not already present locally.
///
/// Candidates are visited in random order, shuffled independently each run,
/// to bound load spikes on the mirror servers when many initializers run
/// concurrently.
fn download_candidates<W: Write>(
    sources: &Sources,
    data_dir: &Path,
    mut candidates: Vec<String>,
    reporter: &mut ProgressReporter<W>,
) -> Result<(), SyncError> {
    candidates.shuffle(&mut thread_rng());

    let total = candidates.len();
    for (i, relative) in candidates.iter().enumerate() {
        let target = data_dir.join(relative);
        if target.exists() {
            info!("file \"{relative}\" exists");
        } else {
            info!("download file \"{relative}\"");
            download_one(sources, relative, &target)?;
        }
        let done = i + 1;
        let progress =
            PROGRESS_STAGE_1 as usize + PROGRESS_STAGE_2 as usize * done / total;
        reporter.send(progress as u8)?;
    }
    Ok(())
}

/// Download one file into `<target>.tmp`, renaming into place on success.
///
/// The tolerated not-found status leaves the local file absent (no retry in
/// this run; stage 3 or a later run picks it up if the mirrors converge).
/// Any other failure is fatal and leaves the `.tmp` file on disk for
/// inspection.
fn download_one(sources: &Sources, relative: &str, target: &Path) -> Result<(), SyncError> {
    let tmp = tmp_path(target);
    let url = format!("{}/{}", sources.file_source, relative);
    let (status, _) = shell_call_with_status(&format!(
        "{} -O \"{}\" {}",
        sources.wget_bin.display(),
        tmp.display(),
        url,
    ))?;

    match status {
        0 => std::fs::rename(&tmp, target).map_err(|e| io_err(target, e)),
        WGET_NOT_FOUND => {
            info!("file \"{relative}\" not found on download source, skipped");
            let _ = std::fs::remove_file(&tmp);
            Ok(())
        }
        status => Err(SyncError::DownloadFailed { url, status }),
    }
}

fn tmp_path(target: &Path) -> PathBuf {
    PathBuf::from(format!("{}.tmp", target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/tmp/m/sub/a.jar")),
            PathBuf::from("/tmp/m/sub/a.jar.tmp")
        );
    }

    #[test]
    fn stage2_progress_formula_matches_weights() {
        let progress = |done: usize, total: usize| {
            PROGRESS_STAGE_1 as usize + PROGRESS_STAGE_2 as usize * done / total
        };
        assert_eq!(progress(1, 1), 80);
        assert_eq!(progress(1, 3), 33);
        assert_eq!(progress(2, 3), 56);
        assert_eq!(progress(3, 3), 80);
        // Integer division undershoots; the workflow emits 80 after the
        // loop to correct the shortfall.
        assert_eq!(progress(6, 7), 70);
    }
}

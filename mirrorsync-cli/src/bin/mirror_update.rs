//! `mirror-update` — incremental re-sync of an initialized Maven mirror.
//!
//! # Usage
//!
//! ```text
//! mirror-update '{"storage-file": {"data-directory": "/var/cache/mirrors/maven"}}'
//! ```
//!
//! One rsync pass, no progress reporting, no socket interaction. Exit
//! status is 0 on success, non-zero when rsync fails.

use anyhow::{Context, Result};
use clap::Parser;

use mirrorsync_core::MirrorConfig;
use mirrorsync_engine::{updater, Sources};

#[derive(Parser, Debug)]
#[command(
    name = "mirror-update",
    version,
    about = "Periodic incremental update of a local Maven repository mirror",
    long_about = None,
)]
struct Cli {
    /// JSON configuration: {"storage-file": {"data-directory": "<path>"}}
    config: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config =
        MirrorConfig::from_json(&cli.config).context("invalid configuration argument")?;
    updater::run(&config, &Sources::default())?;
    Ok(())
}

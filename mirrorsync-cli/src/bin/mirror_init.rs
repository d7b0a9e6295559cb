//! `mirror-init` — bulk-populate a local Maven mirror from upstream.
//!
//! # Usage
//!
//! ```text
//! mirror-init '{"storage-file": {"data-directory": "/var/cache/mirrors/maven"}}'
//! ```
//!
//! Progress percentages are reported to the supervisor over the
//! `/run/mirrors/api.socket` Unix socket; exit status is 0 on success,
//! non-zero on any fatal error.

use anyhow::{Context, Result};
use clap::Parser;

use mirrorsync_core::MirrorConfig;
use mirrorsync_engine::{initializer, ProgressReporter, Sources};

#[derive(Parser, Debug)]
#[command(
    name = "mirror-init",
    version,
    about = "Initial bulk population of a local Maven repository mirror",
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
    let sources = Sources::default();

    // The reporter is held for the whole run and dropped (closing the
    // socket) on every exit path, including error propagation.
    let mut reporter = ProgressReporter::connect(&sources.socket_path)
        .with_context(|| format!("cannot reach supervisor at {}", sources.socket_path.display()))?;
    initializer::run(&config, &sources, &mut reporter)?;
    Ok(())
}

//! # mirrorsync-core
//!
//! Configuration and remote-listing model shared by the `mirror-init` and
//! `mirror-update` binaries.
//!
//! Public API surface:
//! - [`config`] — the JSON configuration argument
//! - [`listing`] — rsync `--list-only` output model
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod listing;

pub use config::MirrorConfig;
pub use error::ConfigError;
pub use listing::{parse_listing, ListingEntry};

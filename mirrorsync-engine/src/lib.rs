//! # mirrorsync-engine
//!
//! Synchronization workflows for a Maven repository mirror.
//!
//! Call [`initializer::run`] to bulk-populate a local mirror from the
//! upstream source (with progress reporting over the supervisor socket),
//! or [`updater::run`] for the lightweight incremental re-sync.

pub mod error;
pub mod initializer;
pub mod process;
pub mod progress;
pub mod sources;
pub mod updater;

pub use error::SyncError;
pub use progress::ProgressReporter;
pub use sources::Sources;

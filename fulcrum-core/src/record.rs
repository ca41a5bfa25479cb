//! Types for recording and reporting training progress.
//!
//! * [`Record`] - a container for key-value pairs of various data types,
//!   used to hand results between drivers and their callers.
//! * [`RunHistory`] - the append-only buffer of completed-episode statistics
//!   maintained by the [`Trainer`](crate::Trainer).
//! * [`ProgressReporter`] - an observer that absorbs new entries of a
//!   [`RunHistory`] and periodically logs a human-readable summary.
mod base;
mod history;
mod progress;

pub use base::{Record, RecordValue};
pub use history::{EpisodeStats, RunHistory};
pub use progress::ProgressReporter;

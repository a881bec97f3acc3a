//! # jstamp-core
//!
//! Timestamp insertion with daily-journal cross-references.
//!
//! This crate holds everything that does not depend on where notes live:
//! - [`Stamp`] — UTC date, time, and epoch millis of one insertion
//! - [`link`] — fragment, block link, and embed line builders
//! - [`insert_timestamp`] — the inserter, over the [`host`] capability traits
//! - [`append_cross_reference`] — the idempotent daily-note append
//! - [`Settings`] — per-vault settings
//! - Error type ([`JstampError`])

pub mod appender;
pub mod error;
pub mod host;
pub mod inserter;
pub mod link;
pub mod settings;
pub mod stamp;

#[cfg(test)]
mod test_support;

pub use appender::{append_cross_reference, AppendOutcome};
pub use error::{JstampError, Result};
pub use host::{ActiveEditor, DailyNoteStore, Workspace};
pub use inserter::{insert_timestamp, insert_timestamp_with, AbortReason, InsertOutcome};
pub use settings::Settings;
pub use stamp::Stamp;

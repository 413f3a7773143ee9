//! Core type definitions for the Bunian admin panel.
//!
//! This crate defines the small shared vocabulary used by the store and
//! model layers:
//! - Record identifiers (decimal strings derived from millisecond timestamps)
//! - Calendar helpers for the date stamps persisted alongside records
//! - The [`Record`] trait keying a value into its collection
//!
//! Entity definitions (projects, requests, trends) belong in `bunian-model`,
//! not here.

mod dates;
mod ids;
mod record;

pub use dates::{month_year, now_millis, now_secs, today};
pub use ids::RecordId;
pub use record::Record;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid record id: {0:?}")]
    InvalidRecordId(String),
}

//! Identifier types for admin-managed records.
//!
//! Ids are plain decimal strings derived from a millisecond Unix timestamp,
//! matching the shape already present in persisted data. Seed datasets use
//! short ordinals ("1", "2", ...), which are equally valid ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{dates, Error};

/// Unique identifier for a record within one collection.
///
/// Serialized transparently as a string. Uniqueness within a collection
/// comes from the collection engine's id assignment, not from this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new id from the current wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self(dates::now_millis().to_string())
    }

    /// Creates an id from a raw millisecond timestamp.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses an id from a string. Only emptiness is rejected; seed ids are
    /// short ordinals rather than timestamps.
    pub fn parse(s: &str) -> crate::Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidRecordId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

//! The trait connecting entity types to the generic collection engine.

use crate::RecordId;

/// A value that lives in an id-keyed collection.
pub trait Record {
    /// The unique id of this record within its collection.
    fn id(&self) -> &RecordId;
}

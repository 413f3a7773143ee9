//! Keyed JSON persistence for the Bunian admin panel.
//!
//! Storage is deliberately simple: one JSON blob per named key, mirroring the
//! browser-local store the admin panel originally persisted into. There are
//! no cross-key transactions; each collection is written independently and a
//! crash between two writes leaves one updated and one stale.
//!
//! # Architecture
//!
//! - [`RecordStore`] reads and writes whole blobs, either as files in a data
//!   directory or in memory for tests
//! - [`Collection`] layers the ordered list-of-records contract on top:
//!   seed-on-first-load, append-with-fresh-id, modify/remove by id
//! - [`Document`] is the single-record analogue used for the market snapshot
//!   and UI preferences
//! - [`keys`] fixes the blob names; they predate this implementation and
//!   must not change

mod collection;
mod error;
pub mod keys;
mod store;

pub use collection::{Collection, Document};
pub use error::{StoreError, StoreResult};
pub use store::RecordStore;

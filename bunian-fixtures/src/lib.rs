//! Seed datasets for the Bunian admin collections.
//!
//! Each function returns the default content a collection is populated with
//! on first launch, before any admin edits exist. The values here are the
//! canonical marketing-site content; once a collection has been persisted,
//! these are only consulted again if its stored blob goes missing or fails
//! to decode.
//!
//! Seed ids are short ordinals ("1", "2", ...) rather than timestamps, and
//! admin-created records must never collide with them.

mod agriculture;
mod projects;
mod requests;
mod trends;

pub use agriculture::agriculture_projects;
pub use projects::projects;
pub use requests::property_requests;
pub use trends::market_trend;

//! Admin panel state for the Bunian marketing site.
//!
//! This module handles:
//! - Opening the content store and loading every admin collection
//! - The full mutation surface: project/agriculture CRUD, request intake
//!   and triage, market-trend edits, the sidebar preference
//! - Read-only queries the public pages serve from
//! - CSV export of property requests
//!
//! # Architecture
//!
//! [`AdminPanel`] is the single funnel: it owns the [`RecordStore`], the
//! session gate, and the in-memory image of each collection. Every mutation
//! goes through a panel method and persists its collection before returning,
//! so the store never lags the image. Nothing else in the workspace writes
//! to the admin keys.
//!
//! [`RecordStore`]: bunian_store::RecordStore

mod error;
mod export;
mod panel;

pub use error::{AdminError, AdminResult};
pub use export::{export_filename, requests_to_csv, REQUEST_CSV_HEADERS};
pub use panel::{AdminPanel, DashboardStats};

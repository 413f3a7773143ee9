//! Admin authentication for the Bunian content store.
//!
//! This module handles:
//! - Credential resolution (environment, credentials file, built-in default)
//! - Session issuance and expiry under the `adminAuth` store key
//! - Read-only authentication checks for gating admin operations
//!
//! # Design Principles
//!
//! - **Single admin**: One credential pair guards the whole panel; there is
//!   no user table and no role model
//! - **Expiring sessions**: A login is valid for [`SESSION_TTL_SECS`] and
//!   then silently lapses; stale or unreadable session blobs never grant
//!   access
//! - **No credential persistence**: The store only ever holds the session
//!   timestamps, never the email or password

mod credentials;
mod error;
mod session;

pub use credentials::Credentials;
pub use error::{SessionError, SessionResult};
pub use session::{Session, SessionGate, SESSION_TTL_SECS};

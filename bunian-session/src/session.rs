//! Session issuance and the authentication gate.

use bunian_store::{keys, RecordStore};
use bunian_types::now_secs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::credentials::Credentials;
use crate::error::SessionResult;

/// How long a login stays valid, in seconds (12 hours).
pub const SESSION_TTL_SECS: i64 = 12 * 60 * 60;

/// A persisted admin session.
///
/// Stored as JSON under the `adminAuth` key. Timestamps are unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    started_at: i64,
    expires_at: i64,
}

impl Session {
    /// Starts a session at `now`, expiring after [`SESSION_TTL_SECS`].
    #[must_use]
    pub fn begin(now: i64) -> Self {
        Self {
            started_at: now,
            expires_at: now + SESSION_TTL_SECS,
        }
    }

    /// When the session was issued (unix seconds).
    #[must_use]
    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    /// When the session lapses (unix seconds).
    #[must_use]
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Whether the session is still live at `now`.
    #[must_use]
    pub fn is_active(&self, now: i64) -> bool {
        now < self.expires_at
    }
}

/// Checks credentials and manages the persisted session record.
///
/// The gate never stores the credential pair; only session timestamps
/// reach the record store.
#[derive(Debug, Clone)]
pub struct SessionGate {
    credentials: Credentials,
}

impl SessionGate {
    /// Builds a gate around a resolved credential pair.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// The credential pair this gate checks against.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // ── Login / logout ───────────────────────────────────────────

    /// Attempts a login. `Ok(false)` on a credential mismatch with nothing
    /// persisted; `Ok(true)` once the session record is written. There is
    /// no lockout and no attempt counter.
    pub fn login(&self, store: &RecordStore, email: &str, password: &str) -> SessionResult<bool> {
        if !self.credentials.matches(email, password) {
            warn!("admin login rejected: credential mismatch");
            return Ok(false);
        }
        let session = Session::begin(now_secs());
        store.save(keys::ADMIN_AUTH, &session)?;
        debug!(expires_at = session.expires_at, "admin session started");
        Ok(true)
    }

    /// Ends the session by removing the record. A no-op when logged out.
    pub fn logout(&self, store: &RecordStore) -> SessionResult<()> {
        store.remove(keys::ADMIN_AUTH)?;
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Whether a live session exists. Absent, expired, or undecodable
    /// session blobs (including the legacy literal `"true"`) all read as
    /// unauthenticated. Never writes.
    #[must_use]
    pub fn is_authenticated(&self, store: &RecordStore) -> bool {
        self.current_session(store)
            .is_some_and(|s| s.is_active(now_secs()))
    }

    /// The persisted session record, if one decodes. Expiry is not checked
    /// here; callers wanting a liveness answer use [`Self::is_authenticated`].
    #[must_use]
    pub fn current_session(&self, store: &RecordStore) -> Option<Session> {
        match store.load::<Session>(keys::ADMIN_AUTH) {
            Ok(session) => session,
            Err(err) => {
                debug!(%err, "treating unreadable session record as logged out");
                None
            }
        }
    }
}

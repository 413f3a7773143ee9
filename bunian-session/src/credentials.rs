//! Admin credential resolution.
//!
//! Credentials come from the first available source:
//! 1. `BUNIAN_ADMIN_EMAIL` / `BUNIAN_ADMIN_PASSWORD` environment variables
//! 2. A JSON credentials file (`{"email": "...", "password": "..."}`)
//! 3. The built-in placeholder pair

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SessionResult;

/// Environment variable holding the admin email.
pub const EMAIL_ENV: &str = "BUNIAN_ADMIN_EMAIL";
/// Environment variable holding the admin password.
pub const PASSWORD_ENV: &str = "BUNIAN_ADMIN_PASSWORD";

const BUILTIN_EMAIL: &str = "admin@bunian.com";
const BUILTIN_PASSWORD: &str = "bunian2024";

/// The single admin credential pair.
///
/// There is no user table; one pair guards the whole panel.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Builds a credential pair from explicit values.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The built-in placeholder pair used when nothing else is configured.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_EMAIL, BUILTIN_PASSWORD)
    }

    /// Reads the pair from the environment, if both variables are set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        match (env::var(EMAIL_ENV), env::var(PASSWORD_ENV)) {
            (Ok(email), Ok(password)) => Some(Self { email, password }),
            _ => None,
        }
    }

    /// Reads the pair from a JSON credentials file.
    pub fn from_file(path: &Path) -> SessionResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Resolves credentials: environment, then the optional file, then the
    /// built-in pair. A present-but-malformed file logs a warning and falls
    /// through rather than locking the admin out.
    #[must_use]
    pub fn resolve(file: Option<&Path>) -> Self {
        if let Some(creds) = Self::from_env() {
            return creds;
        }
        if let Some(path) = file {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(creds) => return creds,
                    Err(err) => {
                        warn!(path = %path.display(), %err, "ignoring unreadable credentials file");
                    }
                }
            }
        }
        Self::builtin()
    }

    /// The configured admin email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the supplied pair matches. Both fields must be exact;
    /// the email comparison is case-sensitive.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

//! Error types for the session module.

use thiserror::Error;

/// Session-specific errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Underlying record store failed.
    #[error("store error: {0}")]
    Store(#[from] bunian_store::StoreError),

    /// Credentials file exists but could not be read.
    #[error("cannot read credentials file: {0}")]
    CredentialsIo(#[from] std::io::Error),

    /// Credentials file exists but is not valid JSON.
    #[error("invalid credentials file: {0}")]
    CredentialsFormat(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

//! Error types for the admin panel.

use thiserror::Error;

/// Admin-panel errors.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Underlying record store failed.
    #[error("store error: {0}")]
    Store(#[from] bunian_store::StoreError),

    /// Session gate failed.
    #[error("session error: {0}")]
    Session(#[from] bunian_session::SessionError),

    /// CSV serialization failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error while writing an export.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for admin-panel operations.
pub type AdminResult<T> = Result<T, AdminError>;

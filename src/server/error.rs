//! Error types for the HTTP server.

use thiserror::Error;

use crate::server::store::StoreError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The served directory could not complete a read or write.
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Whether this error only means the requested resource is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::StoreError(StoreError::NotFound(_)))
    }
}

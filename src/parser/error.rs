//! Error types for the HTTP request decoder.

use thiserror::Error;

/// Errors that can occur while decoding an HTTP request.
#[derive(Debug, Error)]
pub enum Error {
    /// The start line has no request target (fewer than two tokens).
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The request is empty.
    #[error("Empty request")]
    EmptyRequest,
}

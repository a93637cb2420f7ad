//! Domain error types

use thiserror::Error;

/// Domain-level errors. These are programmer-facing precondition
/// violations; runtime outcomes of API calls are envelopes, never errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided base URL is invalid or malformed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP method is not supported by the booking API.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

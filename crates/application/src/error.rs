//! Application error types

use spacebook_domain::DomainError;
use thiserror::Error;

use crate::ports::TransportError;

/// Application-level errors.
///
/// Only construction-time failures surface here. Once a client exists,
/// every call resolves to an envelope; transport and server failures are
/// data, not errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A transport could not be constructed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

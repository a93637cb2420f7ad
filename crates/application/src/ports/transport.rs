//! HTTP transport port

use async_trait::async_trait;
use spacebook_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// application layer to be independent of specific HTTP libraries.
/// Transport policy (timeouts, proxies, TLS) lives behind this boundary;
/// the dispatcher enforces none of it.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes one HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was obtained at all:
    /// timeout, DNS failure, refused connection, or a malformed URL. A
    /// completed exchange is `Ok` regardless of its status code.
    async fn send(&self, request: &RequestSpec) -> Result<ResponseSpec, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn send(&self, request: &RequestSpec) -> Result<ResponseSpec, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn send(&self, request: &RequestSpec) -> Result<ResponseSpec, TransportError> {
        (**self).send(request).await
    }
}

/// Failures that prevent an HTTP exchange from completing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// The host that failed to resolve.
        host: String,
        /// The resolver's error text.
        message: String,
    },

    /// The host actively refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// The host that refused.
        host: String,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Other(String),
}

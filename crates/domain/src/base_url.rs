//! Normalized API base URL
//!
//! The caller supplies the deployment root (`https://booking.example.com`);
//! the client talks to the versioned API underneath it. Normalization
//! strips trailing slashes and appends the version prefix once, at
//! construction. Invalid roots fail here rather than as a deferred
//! network error on the first call.

use std::fmt;

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Path segment appended to every deployment root.
pub const API_PREFIX: &str = "/api/v1";

/// A validated, versioned base URL. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl {
    inner: String,
}

impl ApiBaseUrl {
    /// Normalizes and validates a deployment root.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBaseUrl`] when the root does not
    /// parse as an absolute URL.
    pub fn parse(root: &str) -> DomainResult<Self> {
        let inner = format!("{}{API_PREFIX}", root.trim_end_matches('/'));
        Url::parse(&inner).map_err(|e| DomainError::InvalidBaseUrl(format!("{e}: {root}")))?;
        Ok(Self { inner })
    }

    /// Returns the versioned base URL as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Joins a catalog path (starting with `/`) onto the base.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.inner)
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_appends_version_prefix() {
        let base = ApiBaseUrl::parse("https://booking.example.com").unwrap();
        assert_eq!(base.as_str(), "https://booking.example.com/api/v1");
    }

    #[test]
    fn test_strips_trailing_slashes() {
        let base = ApiBaseUrl::parse("https://booking.example.com//").unwrap();
        assert_eq!(base.as_str(), "https://booking.example.com/api/v1");
    }

    #[test]
    fn test_join() {
        let base = ApiBaseUrl::parse("http://localhost:8000").unwrap();
        assert_eq!(
            base.join("/event-spaces/3"),
            "http://localhost:8000/api/v1/event-spaces/3"
        );
    }

    #[test]
    fn test_rejects_relative_roots() {
        let result = ApiBaseUrl::parse("booking.example.com");
        assert!(matches!(result, Err(DomainError::InvalidBaseUrl(_))));
    }
}

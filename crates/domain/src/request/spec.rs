//! Request specification type

use serde::{Deserialize, Serialize};

use crate::request::HttpMethod;

/// One fully-built outgoing request, ready for a transport to execute.
///
/// The dispatcher produces these; transports consume them without further
/// interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL, query string included.
    pub url: String,
    /// Header name/value pairs in the order they were attached.
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, for methods that carry one.
    pub body: Option<String>,
}

impl RequestSpec {
    /// Creates a body-less request.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

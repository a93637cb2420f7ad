//! The uniform response envelope
//!
//! Every catalog operation resolves to exactly one `ApiEnvelope`,
//! regardless of what happened on the wire. `success: false` is an
//! ordinary value for the caller to inspect, never a control-flow error.
//! The shape mirrors the server's own envelope: `success` defaults to
//! false when the key is absent, everything else is optional.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category name under which local request failures are reported.
pub const REQUEST_ERROR_CATEGORY: &str = "request";

/// The one response shape callers ever see.
///
/// Generic over the payload type so endpoint operations can choose how
/// much structure to impose; resource schemas are opaque to this layer,
/// so the catalog instantiates `T = serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Application-level status reported by the server. Not derived from
    /// the HTTP status code.
    #[serde(default)]
    pub success: bool,
    /// Payload, shaped by the remote resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable status or error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Auxiliary info such as pagination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    /// Field/category name mapped to error strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl<T> ApiEnvelope<T> {
    /// Builds the failure envelope for a request that never produced a
    /// usable server reply (transport failure or undecodable body).
    #[must_use]
    pub fn request_failure(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let mut errors = BTreeMap::new();
        errors.insert(REQUEST_ERROR_CATEGORY.to_string(), vec![detail.clone()]);

        Self {
            success: false,
            data: None,
            message: Some(format!("request failed: {detail}")),
            meta: None,
            errors: Some(errors),
        }
    }

    /// Returns the error strings recorded under a category, if any.
    #[must_use]
    pub fn errors_for(&self, category: &str) -> Option<&[String]> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(category))
            .map(Vec::as_slice)
    }
}

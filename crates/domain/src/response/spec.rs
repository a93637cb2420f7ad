//! Response specification type
//!
//! A completed HTTP exchange as the transport saw it. The dispatcher never
//! branches on the status code; the server's envelope inside the body is
//! the unit of meaning. The status is kept for diagnostics and logging.

use serde::{Deserialize, Serialize};

/// Raw result of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec`.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true if the status code is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

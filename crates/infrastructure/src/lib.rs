//! Spacebook Infrastructure - transport adapters
//!
//! Concrete implementations of the application layer's ports, plus the
//! composition helper that wires the default adapter into a client.

pub mod adapters;

pub use adapters::ReqwestTransport;

use spacebook_application::{ApplicationResult, BookingClient};

/// Builds a [`BookingClient`] backed by the default reqwest transport.
///
/// # Errors
///
/// Returns an error when the transport cannot be constructed or the base
/// URL is not an absolute URL.
pub fn default_client(base_url: &str) -> ApplicationResult<BookingClient<ReqwestTransport>> {
    let transport = ReqwestTransport::new()?;
    BookingClient::new(transport, base_url)
}

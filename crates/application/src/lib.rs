//! Spacebook Application - the booking API client
//!
//! This crate holds the two layers of the client: the request dispatcher,
//! which turns a logical call into exactly one response envelope, and the
//! endpoint catalog, a fixed set of typed operations that feed the
//! dispatcher a method, a path, and a payload. The actual HTTP exchange
//! goes through the [`HttpTransport`] port so the client stays independent
//! of any particular HTTP library.

pub mod client;
pub mod error;
pub mod ports;

pub use client::BookingClient;
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpTransport, TransportError};

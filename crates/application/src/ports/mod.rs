//! Ports: interfaces the application layer depends on

pub mod transport;

pub use transport::{HttpTransport, TransportError};

//! Spacebook Domain - core types for the booking API client
//!
//! This crate defines the domain model for the Spacebook client:
//! request and response shapes, the uniform response envelope, filter
//! parameters, and session state. All types here are pure Rust with no
//! I/O dependencies.

pub mod base_url;
pub mod envelope;
pub mod error;
pub mod filters;
pub mod request;
pub mod response;
pub mod session;

pub use base_url::ApiBaseUrl;
pub use envelope::ApiEnvelope;
pub use error::{DomainError, DomainResult};
pub use filters::{BookingStatus, CalendarFilters, EventFilters};
pub use request::{HttpMethod, QueryPairs, RequestSpec};
pub use response::ResponseSpec;
pub use session::Session;

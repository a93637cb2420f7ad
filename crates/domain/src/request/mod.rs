//! Request types
//!
//! Everything needed to describe one outgoing API call: the HTTP method,
//! ordered query parameters, and the full request specification handed to
//! the transport.

pub mod method;
pub mod query;
pub mod spec;

pub use method::HttpMethod;
pub use query::QueryPairs;
pub use spec::RequestSpec;

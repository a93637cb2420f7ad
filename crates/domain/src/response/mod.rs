//! Response types

pub mod spec;

pub use spec::ResponseSpec;

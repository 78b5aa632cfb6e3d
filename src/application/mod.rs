//! Application layer - use case handlers over the domain.

pub mod handlers;

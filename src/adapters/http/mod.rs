//! HTTP adapters - REST API implementations.

pub mod diagnostic;

// Re-export key types for convenience
pub use diagnostic::diagnostic_routes;

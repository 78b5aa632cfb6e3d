//! Diagnostic HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::diagnostic_routes;

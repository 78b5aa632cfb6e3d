//! Adapters - implementations binding the application to the outside world.

pub mod http;

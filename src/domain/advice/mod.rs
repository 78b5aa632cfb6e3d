//! Tier and category advice lookup.

mod advisor;

pub use advisor::{AdviceEntry, Advisor};

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `questionnaire` - Question definitions, answer state, business category
//! - `scoring` - Orbit tier ladder and the scorer
//! - `advice` - Tier and category advice lookup

pub mod advice;
pub mod foundation;
pub mod questionnaire;
pub mod scoring;

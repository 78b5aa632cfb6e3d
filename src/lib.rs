//! Orbit Navigator - Entrepreneur Business Maturity Diagnostic
//!
//! This crate implements the Orbit framework: eight fixed questions score a
//! business into one of five ordinal "orbit" tiers, each with tier-specific
//! and category-specific advice.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

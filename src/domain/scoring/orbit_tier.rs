//! Orbit tier enum: the five ordinal business maturity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of five ordinal maturity tiers, ordered by increasing total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OrbitTier {
    Foundation = 1,
    Stability = 2,
    Scale = 3,
    Freedom = 4,
    Legacy = 5,
}

impl OrbitTier {
    /// Returns all tiers in ascending order.
    pub fn all() -> &'static [OrbitTier] {
        &[
            OrbitTier::Foundation,
            OrbitTier::Stability,
            OrbitTier::Scale,
            OrbitTier::Freedom,
            OrbitTier::Legacy,
        ]
    }

    /// Returns the ordinal level (1 to 5).
    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            OrbitTier::Foundation => "Orbit 1 — Foundation",
            OrbitTier::Stability => "Orbit 2 — Stability",
            OrbitTier::Scale => "Orbit 3 — Scale",
            OrbitTier::Freedom => "Orbit 4 — Freedom",
            OrbitTier::Legacy => "Orbit 5 — Legacy",
        }
    }

    /// Buckets a total score into its tier.
    ///
    /// The ladder is a sequence of inclusive upper bounds; the first match
    /// wins. Every total resolves, including out-of-nominal totals from
    /// partially answered sets (a total of 0 lands in Foundation).
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=12 => OrbitTier::Foundation,
            13..=20 => OrbitTier::Stability,
            21..=28 => OrbitTier::Scale,
            29..=35 => OrbitTier::Freedom,
            _ => OrbitTier::Legacy,
        }
    }

    /// Creates a tier from an ordinal level, returning error if out of range.
    pub fn try_from_level(level: u8) -> Result<Self, ValidationError> {
        match level {
            1 => Ok(OrbitTier::Foundation),
            2 => Ok(OrbitTier::Stability),
            3 => Ok(OrbitTier::Scale),
            4 => Ok(OrbitTier::Freedom),
            5 => Ok(OrbitTier::Legacy),
            _ => Err(ValidationError::out_of_range("orbit_level", 1, 5, level as i32)),
        }
    }

    /// Creates a tier from an ordinal level, falling back to Foundation for
    /// anything outside 1 to 5.
    pub fn from_level_or_foundation(level: u8) -> Self {
        Self::try_from_level(level).unwrap_or(OrbitTier::Foundation)
    }
}

impl fmt::Display for OrbitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! Pure scoring: total computation and the orbit tier ladder.

mod orbit_tier;
mod scorer;

pub use orbit_tier::OrbitTier;
pub use scorer::{ScoreSummary, Scorer};

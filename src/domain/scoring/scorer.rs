//! Scorer - sums answer contributions and buckets the total into a tier.

use serde::{Deserialize, Serialize};

use crate::domain::questionnaire::{AnswerSet, QuestionKey};

use super::OrbitTier;

/// Result of scoring an answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Sum of per-question contributions (0 to 40).
    pub total: u8,
    /// Tier the total buckets into.
    pub tier: OrbitTier,
}

/// Pure scoring over an answer set.
pub struct Scorer;

impl Scorer {
    /// Computes the total score and tier for an answer set.
    ///
    /// Each answered question contributes `index + 1` (1 to 5); an
    /// unanswered question contributes 0. This mirrors the questionnaire's
    /// original behavior exactly: scoring never blocks on incomplete
    /// answers, so a fully empty set totals 0 and lands in Foundation.
    /// Callers that want to treat incompleteness as an error must check
    /// [`AnswerSet::is_complete`] themselves.
    pub fn score(answers: &AnswerSet) -> ScoreSummary {
        let total = QuestionKey::all()
            .iter()
            .map(|key| answers.selection(*key).map_or(0, |index| index.points()))
            .sum();

        ScoreSummary {
            total,
            tier: OrbitTier::from_total(total),
        }
    }
}

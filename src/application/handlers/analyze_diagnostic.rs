//! AnalyzeDiagnosticHandler - Query handler for running a diagnostic.
//!
//! Scores the answer set, buckets the total into a tier, and attaches the
//! tier and category advice. The two domain functions are invoked in
//! sequence; the handler itself carries no state.

use serde::{Deserialize, Serialize};

use crate::domain::advice::Advisor;
use crate::domain::questionnaire::{AnswerSet, QuestionKey};
use crate::domain::scoring::Scorer;

/// Query to analyze a filled (or partially filled) answer set.
#[derive(Debug, Clone)]
pub struct AnalyzeDiagnosticQuery {
    /// The caller's current selections plus business category.
    pub answers: AnswerSet,
}

/// Complete diagnostic result for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Ordinal tier level (1 to 5).
    pub orbit_level: u8,
    /// Tier display label.
    pub orbit_label: String,
    /// Total score (0 to 40).
    pub total: u8,
    /// What to work on next for this tier.
    pub next_steps: String,
    /// Support and remedial actions, with any category suffix applied.
    pub support_actions: String,
    /// Questions still without a selection, in questionnaire order.
    /// Scoring proceeds regardless; completeness policy is the caller's.
    pub unanswered: Vec<QuestionKey>,
}

/// Handler for running the diagnostic analysis.
pub struct AnalyzeDiagnosticHandler;

impl AnalyzeDiagnosticHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: AnalyzeDiagnosticQuery) -> DiagnosticReport {
        let summary = Scorer::score(&query.answers);
        let advice = Advisor::advise(summary.tier, query.answers.category());

        DiagnosticReport {
            orbit_level: summary.tier.level(),
            orbit_label: summary.tier.label().to_string(),
            total: summary.total,
            next_steps: advice.next_steps,
            support_actions: advice.support_actions,
            unanswered: query.answers.unanswered(),
        }
    }
}

impl Default for AnalyzeDiagnosticHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OptionIndex;
    use crate::domain::questionnaire::BusinessCategory;
    use crate::domain::scoring::OrbitTier;

    fn full_answers(index: u8, category: Option<BusinessCategory>) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for key in QuestionKey::all() {
            answers.select(*key, OptionIndex::try_from_u8(index).unwrap());
        }
        answers.set_category(category);
        answers
    }

    #[test]
    fn complete_strong_answers_report_legacy() {
        let handler = AnalyzeDiagnosticHandler::new();
        let report = handler.handle(AnalyzeDiagnosticQuery {
            answers: full_answers(4, None),
        });

        assert_eq!(report.orbit_level, 5);
        assert_eq!(report.orbit_label, "Orbit 5 — Legacy");
        assert_eq!(report.total, 40);
        assert!(report.unanswered.is_empty());
    }

    #[test]
    fn category_suffix_reaches_the_report() {
        let handler = AnalyzeDiagnosticHandler::new();
        let report = handler.handle(AnalyzeDiagnosticQuery {
            answers: full_answers(2, Some(BusinessCategory::Manufacturing)),
        });

        assert_eq!(report.orbit_level, 3);
        assert!(report.support_actions.contains("For manufacturing:"));
    }

    #[test]
    fn partial_answers_still_produce_a_report() {
        let mut answers = AnswerSet::new();
        answers.select(QuestionKey::Revenue, OptionIndex::try_from_u8(3).unwrap());

        let handler = AnalyzeDiagnosticHandler::new();
        let report = handler.handle(AnalyzeDiagnosticQuery { answers });

        assert_eq!(report.total, 4);
        assert_eq!(report.orbit_level, 1);
        assert_eq!(report.unanswered.len(), 7);
        assert!(!report.unanswered.contains(&QuestionKey::Revenue));
    }

    #[test]
    fn report_tier_matches_ladder() {
        let handler = AnalyzeDiagnosticHandler::new();
        // 8 questions at index 1 -> total 16 -> Stability
        let report = handler.handle(AnalyzeDiagnosticQuery {
            answers: full_answers(1, None),
        });

        assert_eq!(report.total, 16);
        assert_eq!(report.orbit_level, OrbitTier::Stability.level());
    }
}

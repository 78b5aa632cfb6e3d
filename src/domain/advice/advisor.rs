//! Advisor - tier-specific advice with optional category suffix.

use serde::{Deserialize, Serialize};

use crate::domain::questionnaire::BusinessCategory;
use crate::domain::scoring::OrbitTier;

/// Immutable per-tier advice texts, tiers 1 through 5 in order.
const BASE_ADVICE: [(&str, &str); 5] = [
    (
        "Build consistent monthly sales, product-market fit, basic bookkeeping.",
        "Mentorship, refine offering, simple CRM, bookkeeping (Zoho/QuickBooks).",
    ),
    (
        "Delegate repetitive tasks, hire first managers, document SOPs.",
        "CRM + Invoicing automation, HR basics, simple ERP-lite, management courses.",
    ),
    (
        "Strengthen middle management, scale operations & marketing, track KPIs.",
        "ERP/financial dashboards, hire department heads, invest in marketing & brand.",
    ),
    (
        "Leadership succession, market expansion, strategic partnerships.",
        "Advisory board, M&A strategy, institutional governance.",
    ),
    (
        "Mentor & invest, create long-term legacy structures.",
        "Family office / holding structure, succession planning.",
    ),
];

/// Advice for a tier: what to do next and where support should go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceEntry {
    pub next_steps: String,
    pub support_actions: String,
}

/// Pure advice lookup over the fixed base records.
pub struct Advisor;

impl Advisor {
    /// Returns the advice for a tier, with the category suffix appended to
    /// `support_actions` when a known category is given.
    ///
    /// The entry is assembled fresh from the static base records on every
    /// call, so repeated lookups never accumulate duplicate suffixes.
    pub fn advise(tier: OrbitTier, category: Option<BusinessCategory>) -> AdviceEntry {
        let (next_steps, base_support) = BASE_ADVICE[tier.level() as usize - 1];

        let support_actions = match category {
            Some(category) => format!("{} {}", base_support, category_suffix(category)),
            None => base_support.to_string(),
        };

        AdviceEntry {
            next_steps: next_steps.to_string(),
            support_actions,
        }
    }

    /// Returns advice for a raw ordinal level, falling back to Foundation's
    /// record when the level is outside 1 to 5.
    pub fn advise_for_level(level: u8, category: Option<BusinessCategory>) -> AdviceEntry {
        Self::advise(OrbitTier::from_level_or_foundation(level), category)
    }
}

/// Category-specific sentence appended to support actions, independent of tier.
fn category_suffix(category: BusinessCategory) -> &'static str {
    match category {
        BusinessCategory::Construction => {
            "For construction: strengthen safety & compliance, project management software, \
             digitize measurement & billing."
        }
        BusinessCategory::Education => {
            "For education: build curriculum IP, teacher training, accreditation, franchise \
             playbook."
        }
        BusinessCategory::Manufacturing => {
            "For manufacturing: lean ops, QC, supplier consolidation, export readiness."
        }
        BusinessCategory::Services => {
            "For services: productize offerings, subscription models, service-level SOPs."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tier_has_distinct_base_advice() {
        let entries: Vec<AdviceEntry> = OrbitTier::all()
            .iter()
            .map(|tier| Advisor::advise(*tier, None))
            .collect();

        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn advice_without_category_is_base_text_only() {
        let entry = Advisor::advise(OrbitTier::Stability, None);
        assert_eq!(
            entry.next_steps,
            "Delegate repetitive tasks, hire first managers, document SOPs."
        );
        assert_eq!(
            entry.support_actions,
            "CRM + Invoicing automation, HR basics, simple ERP-lite, management courses."
        );
    }

    #[test]
    fn category_suffix_follows_base_text() {
        let entry = Advisor::advise(OrbitTier::Scale, Some(BusinessCategory::Construction));
        let base = "ERP/financial dashboards, hire department heads, invest in marketing & brand.";

        assert!(entry.support_actions.starts_with(base));
        assert!(entry.support_actions.contains("For construction:"));
        assert_eq!(entry.support_actions.matches("For construction:").count(), 1);
    }

    #[test]
    fn every_category_appends_exactly_one_suffix() {
        for category in BusinessCategory::all() {
            let entry = Advisor::advise(OrbitTier::Foundation, Some(*category));
            let marker = format!("For {}:", category.as_str());
            assert_eq!(entry.support_actions.matches(marker.as_str()).count(), 1);
        }
    }

    #[test]
    fn repeated_calls_do_not_accumulate_suffixes() {
        let first = Advisor::advise(OrbitTier::Freedom, Some(BusinessCategory::Services));
        let second = Advisor::advise(OrbitTier::Freedom, Some(BusinessCategory::Services));
        let third = Advisor::advise(OrbitTier::Freedom, Some(BusinessCategory::Services));

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(third.support_actions.matches("For services:").count(), 1);
    }

    #[test]
    fn out_of_range_level_falls_back_to_foundation_advice() {
        let fallback = Advisor::advise_for_level(6, Some(BusinessCategory::Education));
        let foundation = Advisor::advise(OrbitTier::Foundation, Some(BusinessCategory::Education));

        assert_eq!(fallback, foundation);
        assert!(fallback
            .next_steps
            .starts_with("Build consistent monthly sales"));
        assert!(fallback.support_actions.contains("For education:"));
    }

    #[test]
    fn in_range_level_matches_tier_lookup() {
        for tier in OrbitTier::all() {
            assert_eq!(
                Advisor::advise_for_level(tier.level(), None),
                Advisor::advise(*tier, None)
            );
        }
    }
}

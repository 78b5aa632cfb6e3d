//! The fixed diagnostic questionnaire: 8 questions, 5 options each.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for each of the 8 diagnostic questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    Revenue,
    Dependency,
    Sops,
    Team,
    Cashflow,
    Management,
    Automation,
    Focus,
}

impl QuestionKey {
    /// Returns all question keys in questionnaire order.
    pub fn all() -> &'static [QuestionKey] {
        &[
            QuestionKey::Revenue,
            QuestionKey::Dependency,
            QuestionKey::Sops,
            QuestionKey::Team,
            QuestionKey::Cashflow,
            QuestionKey::Management,
            QuestionKey::Automation,
            QuestionKey::Focus,
        ]
    }

    /// Returns the stable string form used in payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::Revenue => "revenue",
            QuestionKey::Dependency => "dependency",
            QuestionKey::Sops => "sops",
            QuestionKey::Team => "team",
            QuestionKey::Cashflow => "cashflow",
            QuestionKey::Management => "management",
            QuestionKey::Automation => "automation",
            QuestionKey::Focus => "focus",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable question definition: key, display label, and exactly 5
/// options ordered from weakest to strongest maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionDefinition {
    pub key: QuestionKey,
    pub label: &'static str,
    pub options: [&'static str; 5],
}

/// The fixed set of 8 diagnostic questions.
pub const QUESTIONS: [QuestionDefinition; 8] = [
    QuestionDefinition {
        key: QuestionKey::Revenue,
        label: "Annual Revenue Range (₹)",
        options: ["<1 Cr", "1–10 Cr", "10–50 Cr", "50–200 Cr", "200+ Cr"],
    },
    QuestionDefinition {
        key: QuestionKey::Dependency,
        label: "Founder Dependency",
        options: ["High", "Medium High", "Medium", "Low", "None"],
    },
    QuestionDefinition {
        key: QuestionKey::Sops,
        label: "SOPs / Processes Documented",
        options: ["None", "Basic", "Partial", "Mostly", "Fully"],
    },
    QuestionDefinition {
        key: QuestionKey::Team,
        label: "Team Size",
        options: ["0–3", "4–10", "11–30", "31–100", "100+"],
    },
    QuestionDefinition {
        key: QuestionKey::Cashflow,
        label: "Cash Flow Stability",
        options: ["Poor", "Unstable", "Average", "Good", "Excellent"],
    },
    QuestionDefinition {
        key: QuestionKey::Management,
        label: "Management Layer",
        options: ["None", "Weak", "Moderate", "Strong", "Fully Functional"],
    },
    QuestionDefinition {
        key: QuestionKey::Automation,
        label: "Automation & Systems",
        options: ["None", "Basic", "Partial", "Integrated", "Fully Automated"],
    },
    QuestionDefinition {
        key: QuestionKey::Focus,
        label: "Founder Focus on Strategy vs Operations",
        options: ["0% Strategy", "25%", "50%", "75%", "100% Strategy"],
    },
];

/// Hint shown alongside the questionnaire relating revenue buckets to orbits.
pub const REVENUE_ORBIT_TIP: &str = "Tip: revenue buckets map to orbits (Orbit 1 = upto ₹1 Cr, \
     Orbit 2 = ₹1–10 Cr, Orbit 3 = ₹10–50 Cr, Orbit 4 = ₹50–200 Cr, Orbit 5 = ₹200Cr+).";

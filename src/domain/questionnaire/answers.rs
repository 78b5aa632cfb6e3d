//! Answer state for a questionnaire session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{OptionIndex, ValidationError};

use super::QuestionKey;

/// Business category selected alongside the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessCategory {
    Construction,
    Education,
    Manufacturing,
    Services,
}

impl BusinessCategory {
    /// Returns all categories in display order.
    pub fn all() -> &'static [BusinessCategory] {
        &[
            BusinessCategory::Construction,
            BusinessCategory::Education,
            BusinessCategory::Manufacturing,
            BusinessCategory::Services,
        ]
    }

    /// Returns the stable string form used in payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessCategory::Construction => "construction",
            BusinessCategory::Education => "education",
            BusinessCategory::Manufacturing => "manufacturing",
            BusinessCategory::Services => "services",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            BusinessCategory::Construction => "Construction",
            BusinessCategory::Education => "Education",
            BusinessCategory::Manufacturing => "Manufacturing",
            BusinessCategory::Services => "Services",
        }
    }
}

impl FromStr for BusinessCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "construction" => Ok(BusinessCategory::Construction),
            "education" => Ok(BusinessCategory::Education),
            "manufacturing" => Ok(BusinessCategory::Manufacturing),
            "services" => Ok(BusinessCategory::Services),
            other => Err(ValidationError::invalid_format(
                "business_category",
                format!("unknown category '{}'", other),
            )),
        }
    }
}

impl fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user's current selections across all questions plus chosen category.
///
/// A single exclusively-owned value: created empty, mutated one field at a
/// time as the user selects, then read by the scorer. Unanswered questions
/// stay absent from the map and score as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(default)]
    selections: BTreeMap<QuestionKey, OptionIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<BusinessCategory>,
}

impl AnswerSet {
    /// Creates an empty answer set with no selections and no category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the selection for one question, replacing any prior choice.
    pub fn select(&mut self, key: QuestionKey, index: OptionIndex) {
        self.selections.insert(key, index);
    }

    /// Sets or clears the business category.
    pub fn set_category(&mut self, category: Option<BusinessCategory>) {
        self.category = category;
    }

    /// Returns the selection for a question, if answered.
    pub fn selection(&self, key: QuestionKey) -> Option<OptionIndex> {
        self.selections.get(&key).copied()
    }

    /// Returns the chosen business category, if set.
    pub fn category(&self) -> Option<BusinessCategory> {
        self.category
    }

    /// Returns true when every question has a selection.
    pub fn is_complete(&self) -> bool {
        QuestionKey::all()
            .iter()
            .all(|key| self.selections.contains_key(key))
    }

    /// Returns the keys of questions still without a selection, in
    /// questionnaire order.
    pub fn unanswered(&self) -> Vec<QuestionKey> {
        QuestionKey::all()
            .iter()
            .filter(|key| !self.selections.contains_key(key))
            .copied()
            .collect()
    }
}

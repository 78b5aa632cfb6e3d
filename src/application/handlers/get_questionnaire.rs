//! GetQuestionnaireHandler - Query handler for the questionnaire definition.
//!
//! Returns the fixed question set and category choices so a client can
//! render the form without hardcoding them.

use serde::Serialize;

use crate::domain::questionnaire::{
    BusinessCategory, QuestionDefinition, QUESTIONS, REVENUE_ORBIT_TIP,
};

/// A business category choice for the form's selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// The complete questionnaire definition for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireView {
    pub questions: &'static [QuestionDefinition],
    pub business_categories: Vec<CategoryChoice>,
    pub tip: &'static str,
}

/// Handler for retrieving the questionnaire definition.
pub struct GetQuestionnaireHandler;

impl GetQuestionnaireHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> QuestionnaireView {
        QuestionnaireView {
            questions: &QUESTIONS,
            business_categories: BusinessCategory::all()
                .iter()
                .map(|category| CategoryChoice {
                    value: category.as_str(),
                    label: category.label(),
                })
                .collect(),
            tip: REVENUE_ORBIT_TIP,
        }
    }
}

impl Default for GetQuestionnaireHandler {
    fn default() -> Self {
        Self::new()
    }
}

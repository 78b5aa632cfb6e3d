//! Questionnaire definitions and answer state.

mod answers;
mod question;

pub use answers::{AnswerSet, BusinessCategory};
pub use question::{QuestionDefinition, QuestionKey, QUESTIONS, REVENUE_ORBIT_TIP};

//! Diagnostic query handlers.
//!
//! Stateless handlers composing the pure domain functions. There is no
//! repository or provider seam here: the whole domain fits in static data,
//! so the handlers are synchronous.

mod analyze_diagnostic;
mod get_questionnaire;

pub use analyze_diagnostic::{AnalyzeDiagnosticHandler, AnalyzeDiagnosticQuery, DiagnosticReport};
pub use get_questionnaire::{CategoryChoice, GetQuestionnaireHandler, QuestionnaireView};

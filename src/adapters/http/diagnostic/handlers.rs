//! HTTP handlers for diagnostic endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AnalyzeDiagnosticHandler, AnalyzeDiagnosticQuery, GetQuestionnaireHandler,
};
use crate::domain::foundation::OptionIndex;
use crate::domain::questionnaire::{AnswerSet, BusinessCategory, QuestionKey};

use super::dto::{AnalyzeRequest, DiagnosticReport, ErrorResponse, QuestionnaireView};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Diagnostic API error that implements IntoResponse.
#[derive(Debug)]
pub enum DiagnosticApiError {
    BadRequest(String),
}

impl IntoResponse for DiagnosticApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DiagnosticApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request Parsing
// ════════════════════════════════════════════════════════════════════════════════

/// Parses the raw request body into a domain AnswerSet.
///
/// Unknown question keys and out-of-range indices are rejected; an
/// unrecognized business category degrades to unset, matching the
/// advisor's total-function stance on categories.
fn parse_answer_set(request: AnalyzeRequest) -> Result<AnswerSet, DiagnosticApiError> {
    let mut answers = AnswerSet::new();

    for (raw_key, raw_index) in request.answers {
        let key: QuestionKey = serde_json::from_value(serde_json::Value::String(raw_key.clone()))
            .map_err(|_| {
                DiagnosticApiError::BadRequest(format!("Unknown question key '{}'", raw_key))
            })?;

        let index = OptionIndex::try_from_u8(raw_index)
            .map_err(|err| DiagnosticApiError::BadRequest(err.to_string()))?;

        answers.select(key, index);
    }

    let category = request
        .business_category
        .as_deref()
        .and_then(|raw| raw.parse::<BusinessCategory>().ok());
    answers.set_category(category);

    Ok(answers)
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/questionnaire
///
/// Returns the fixed question set, category choices, and the revenue tip.
pub async fn get_questionnaire() -> Json<QuestionnaireView> {
    let handler = GetQuestionnaireHandler::new();
    Json(handler.handle())
}

/// POST /api/diagnostics/analyze
///
/// Scores the submitted answers and returns the full diagnostic report.
pub async fn analyze_diagnostic(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<DiagnosticReport>, DiagnosticApiError> {
    let answers = parse_answer_set(request)?;

    let handler = AnalyzeDiagnosticHandler::new();
    let report = handler.handle(AnalyzeDiagnosticQuery { answers });

    Ok(Json(report))
}

/// GET /health
///
/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

//! HTTP routes for diagnostic endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze_diagnostic, get_questionnaire, health};

/// Creates the diagnostic router with all routes.
pub fn diagnostic_routes() -> Router {
    Router::new()
        // GET /api/questionnaire
        .route("/api/questionnaire", get(get_questionnaire))
        // POST /api/diagnostics/analyze
        .route("/api/diagnostics/analyze", post(analyze_diagnostic))
        // GET /health
        .route("/health", get(health))
}

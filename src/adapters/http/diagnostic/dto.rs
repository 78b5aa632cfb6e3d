//! HTTP DTOs for diagnostic endpoints.
//!
//! The questionnaire and report views are already designed for
//! serialization in the application layer, so they are re-exported
//! directly. Requests arrive as raw strings and integers and are parsed
//! into domain types at the handler boundary.

pub use crate::application::handlers::{CategoryChoice, DiagnosticReport, QuestionnaireView};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for the analyze endpoint.
///
/// `answers` maps question keys to selected option indices. Questions may
/// be omitted (they score as zero). `business_category` is free-form; an
/// unrecognized value is treated as unset rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, u8>,
    #[serde(default)]
    pub business_category: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

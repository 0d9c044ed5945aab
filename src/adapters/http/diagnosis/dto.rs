//! HTTP DTOs for diagnosis endpoints.
//!
//! The domain result is already shaped for serialization, so it is
//! re-exported directly as the response body.

pub use crate::domain::diagnosis::DiagnosisResult as DiagnosisResponse;

use serde::{Deserialize, Serialize};

use crate::domain::diagnosis::{RawResponses, Rule, RuleBase};
use crate::domain::foundation::ErrorCode;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/diagnosis`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunDiagnosisRequest {
    /// Answers keyed by `"<Category>_<questionIndex>"`.
    pub responses: RawResponses,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Active rule base listing.
#[derive(Debug, Clone, Serialize)]
pub struct RuleBaseResponse {
    pub count: usize,
    pub rules: Vec<Rule>,
}

impl From<&RuleBase> for RuleBaseResponse {
    fn from(rule_base: &RuleBase) -> Self {
        Self {
            count: rule_base.len(),
            rules: rule_base.rules().to_vec(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub rules: usize,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }
}

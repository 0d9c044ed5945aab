//! HTTP handlers for diagnosis endpoints.
//!
//! These handlers connect Axum routes to the application layer handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::diagnosis::{RunDiagnosisCommand, RunDiagnosisHandler};
use crate::domain::diagnosis::{DiagnosisEngine, IncompleteResponses};
use crate::domain::foundation::ErrorCode;

use super::dto::{DiagnosisResponse, ErrorResponse, HealthResponse, RuleBaseResponse, RunDiagnosisRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Diagnosis API error that implements IntoResponse.
#[derive(Debug)]
pub enum DiagnosisApiError {
    /// The body could not be read as a diagnosis request.
    MalformedRequest(JsonRejection),
    /// The questionnaire is missing answers or holds unknown keys.
    Incomplete(IncompleteResponses),
}

impl IntoResponse for DiagnosisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DiagnosisApiError::MalformedRequest(rejection) => {
                (rejection.status(), ErrorResponse::bad_request(rejection.body_text()))
            }
            DiagnosisApiError::Incomplete(report) => {
                let details = serde_json::to_value(&report).unwrap_or(serde_json::Value::Null);
                let error = ErrorResponse::new(ErrorCode::IncompleteResponses, report.to_string())
                    .with_details(details);
                (StatusCode::UNPROCESSABLE_ENTITY, error)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for DiagnosisApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection)
    }
}

impl From<IncompleteResponses> for DiagnosisApiError {
    fn from(report: IncompleteResponses) -> Self {
        Self::Incomplete(report)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing the engine.
#[derive(Clone)]
pub struct DiagnosisAppState {
    pub engine: Arc<DiagnosisEngine>,
}

impl DiagnosisAppState {
    pub fn new(engine: Arc<DiagnosisEngine>) -> Self {
        Self { engine }
    }

    pub fn run_diagnosis_handler(&self) -> RunDiagnosisHandler {
        RunDiagnosisHandler::new(self.engine.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Diagnose a questionnaire.
///
/// POST /api/diagnosis
pub async fn run_diagnosis(
    State(state): State<DiagnosisAppState>,
    payload: Result<Json<RunDiagnosisRequest>, JsonRejection>,
) -> Result<Json<DiagnosisResponse>, DiagnosisApiError> {
    let Json(request) = payload?;
    let command = RunDiagnosisCommand {
        responses: request.responses,
    };

    let result = state.run_diagnosis_handler().handle(command)?;
    Ok(Json(result))
}

/// List the active rule base.
///
/// GET /api/diagnosis/rules
pub async fn get_rule_base(State(state): State<DiagnosisAppState>) -> impl IntoResponse {
    Json(RuleBaseResponse::from(state.engine.rule_base()))
}

/// Liveness check.
///
/// GET /health
pub async fn health(State(state): State<DiagnosisAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        rules: state.engine.rule_base().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnosis::{RawResponses, ResponseAggregator};

    #[test]
    fn incomplete_responses_map_to_unprocessable_entity() {
        let report = ResponseAggregator::aggregate(&RawResponses::new()).unwrap_err();
        let response = DiagnosisApiError::from(report).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

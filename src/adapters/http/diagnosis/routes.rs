//! HTTP routes for diagnosis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_rule_base, health, run_diagnosis, DiagnosisAppState};

/// Creates the diagnosis router with all routes.
///
/// # Routes
///
/// - `POST /api/diagnosis` - Diagnose a questionnaire
/// - `GET /api/diagnosis/rules` - List the active rule base
/// - `GET /health` - Liveness check
pub fn diagnosis_router(state: DiagnosisAppState) -> Router {
    Router::new()
        .route("/api/diagnosis", post(run_diagnosis))
        .route("/api/diagnosis/rules", get(get_rule_base))
        .route("/health", get(health))
        .with_state(state)
}

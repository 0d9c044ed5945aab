//! Diagnosis HTTP adapter - REST API for the fuzzy diagnosis engine.
//!
//! Provides endpoints for:
//! - Diagnosing a submitted questionnaire
//! - Inspecting the active rule base
//! - Liveness checks

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::DiagnosisAppState;
pub use routes::diagnosis_router;

//! HTTP adapters - REST API implementations.

pub mod diagnosis;

pub use diagnosis::{diagnosis_router, DiagnosisAppState};

//! Diagnosis handlers.
//!
//! Validate submitted questionnaires and run them through the engine.

mod run_diagnosis;

pub use run_diagnosis::{RunDiagnosisCommand, RunDiagnosisHandler};

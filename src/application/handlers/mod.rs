//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod diagnosis;

pub use diagnosis::{RunDiagnosisCommand, RunDiagnosisHandler};

//! RunDiagnosisHandler - Command handler for diagnosing a submitted questionnaire.
//!
//! Completeness is checked before inference so that callers can tell the
//! user exactly which answers are missing. Any other validation failure is
//! absorbed by the engine's default result.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::diagnosis::{DiagnosisEngine, DiagnosisResult, IncompleteResponses, RawResponses, ResponseAggregator};

/// Command to diagnose one questionnaire.
#[derive(Debug, Clone)]
pub struct RunDiagnosisCommand {
    pub responses: RawResponses,
}

/// Handler for running a diagnosis.
pub struct RunDiagnosisHandler {
    engine: Arc<DiagnosisEngine>,
}

impl RunDiagnosisHandler {
    pub fn new(engine: Arc<DiagnosisEngine>) -> Self {
        Self { engine }
    }

    /// Validates completeness, then runs fail-soft inference.
    ///
    /// # Errors
    /// `IncompleteResponses` when answers are missing or unrecognized.
    pub fn handle(&self, cmd: RunDiagnosisCommand) -> Result<DiagnosisResult, IncompleteResponses> {
        if let Err(report) = ResponseAggregator::aggregate(&cmd.responses) {
            warn!(
                expected = report.expected_total,
                actual = report.actual_total,
                missing = ?report.missing_keys(),
                "Questionnaire incomplete"
            );
            return Err(report);
        }

        let result = self.engine.inference(&cmd.responses);

        info!(
            diagnosis = %result.diagnosis,
            confidence = result.confidence.value(),
            extreme_case = result.is_extreme_case,
            fallback = result.is_fallback(),
            "Diagnosis computed"
        );

        Ok(result)
    }
}

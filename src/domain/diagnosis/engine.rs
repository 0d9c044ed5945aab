//! Diagnosis Engine - The full inference pipeline.
//!
//! ```text
//! raw answers ─► ResponseAggregator ─► CategoryScores ─► ExtremeCaseDetector ─┐
//!                                                                              │ (override)
//!              RuleEngine ─► Defuzzifier ─► ConfidenceEstimator ─► DiagnosisResult
//! ```
//!
//! The engine holds only an immutable, shared rule base and can be called
//! concurrently from any number of threads.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::category::Category;
use super::confidence::ConfidenceEstimator;
use super::defuzzifier::Defuzzifier;
use super::errors::DiagnosisError;
use super::extreme_case::ExtremeCaseDetector;
use super::responses::{CategoryScores, RawResponses, ResponseAggregator};
use super::result::DiagnosisResult;
use super::rule_engine::RuleEngine;
use super::rules::{Diagnosis, RuleBase};

/// Fuzzy behavioral-diagnosis engine.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    rule_base: Arc<RuleBase>,
}

impl DiagnosisEngine {
    pub fn new(rule_base: Arc<RuleBase>) -> Self {
        Self { rule_base }
    }

    /// Engine backed by the embedded standard rule base.
    pub fn standard() -> Self {
        Self::new(RuleBase::shared_standard())
    }

    pub fn rule_base(&self) -> &RuleBase {
        &self.rule_base
    }

    /// Runs the pipeline, never failing.
    ///
    /// Validation errors produce the default result: "Búsqueda Atención",
    /// 0% confidence, `error` set, and dominant factors computed from
    /// whatever answers are present.
    pub fn inference(&self, responses: &RawResponses) -> DiagnosisResult {
        match self.try_inference(responses) {
            Ok(result) => result,
            Err(error) => {
                warn!(code = %error.code(), error = %error, answers = responses.len(), "Diagnosis input rejected, returning default result");
                DiagnosisResult::fallback(&error, ResponseAggregator::partial_means(responses))
            }
        }
    }

    /// Runs the pipeline, returning validation failures to the caller.
    pub fn try_inference(&self, responses: &RawResponses) -> Result<DiagnosisResult, DiagnosisError> {
        let means = ResponseAggregator::aggregate(responses)?;
        ResponseAggregator::validate_answers(responses)?;
        let scores = CategoryScores::try_from_map(&means)?;

        if let Some(case) = ExtremeCaseDetector::detect(responses) {
            debug!(case = ?case, diagnosis = %case.diagnosis(), "Extreme answer pattern, skipping inference");
            return Ok(DiagnosisResult::extreme(case, scores.to_map()));
        }

        Ok(self.evaluate(&scores))
    }

    /// Runs inference on precomputed category scores.
    ///
    /// Without raw answers the extreme-case override cannot apply.
    pub fn infer_from_scores(&self, scores: &BTreeMap<Category, f64>) -> Result<DiagnosisResult, DiagnosisError> {
        let scores = CategoryScores::try_from_map(scores)?;
        Ok(self.evaluate(&scores))
    }

    fn evaluate(&self, scores: &CategoryScores) -> DiagnosisResult {
        let activations = RuleEngine::evaluate(scores, &self.rule_base);

        let diagnosis = Defuzzifier::select(&activations, &self.rule_base).unwrap_or_else(|| {
            debug!("No rule fired, defaulting diagnosis");
            Diagnosis::LOW_ENGAGEMENT
        });
        let confidence = ConfidenceEstimator::estimate(diagnosis, &activations);

        debug!(
            diagnosis = %diagnosis,
            confidence = confidence.value(),
            fired_rules = activations.len(),
            "Fuzzy inference complete"
        );

        DiagnosisResult::inferred(diagnosis, confidence, activations, scores.to_map())
    }
}

impl Default for DiagnosisEngine {
    fn default() -> Self {
        Self::standard()
    }
}

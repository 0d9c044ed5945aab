//! Diagnosis result returned to the host.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::dominant_factors::{DominantFactor, DominantFactorRanker};
use super::errors::DiagnosisError;
use super::extreme_case::ExtremeCase;
use super::rule_engine::Activation;
use super::rules::Diagnosis;
use crate::domain::foundation::Percentage;

/// Outcome of one inference call. Always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub diagnosis: Diagnosis,
    /// Integer confidence in [0, 100].
    pub confidence: Percentage,
    pub dominant_factors: Vec<DominantFactor>,
    pub activations: Vec<Activation>,
    pub category_scores: BTreeMap<Category, f64>,
    pub is_extreme_case: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiagnosisResult {
    /// Result of regular fuzzy inference.
    pub fn inferred(
        diagnosis: Diagnosis,
        confidence: Percentage,
        activations: Vec<Activation>,
        category_scores: BTreeMap<Category, f64>,
    ) -> Self {
        Self {
            diagnosis,
            confidence,
            dominant_factors: DominantFactorRanker::rank(&category_scores),
            activations,
            category_scores,
            is_extreme_case: false,
            error: None,
        }
    }

    /// Result of an extreme-case override; no rules are evaluated.
    pub fn extreme(case: ExtremeCase, category_scores: BTreeMap<Category, f64>) -> Self {
        Self {
            diagnosis: case.diagnosis(),
            confidence: case.confidence(),
            dominant_factors: DominantFactorRanker::rank(&category_scores),
            activations: Vec::new(),
            category_scores,
            is_extreme_case: true,
            error: None,
        }
    }

    /// Default result for input that failed validation.
    ///
    /// Non-finite scores are left out of the display data.
    pub fn fallback(error: &DiagnosisError, available_scores: BTreeMap<Category, f64>) -> Self {
        let category_scores: BTreeMap<Category, f64> = available_scores
            .into_iter()
            .filter(|(_, score)| score.is_finite())
            .collect();

        Self {
            diagnosis: Diagnosis::LOW_ENGAGEMENT,
            confidence: Percentage::ZERO,
            dominant_factors: DominantFactorRanker::rank(&category_scores),
            activations: Vec::new(),
            category_scores,
            is_extreme_case: false,
            error: Some(error.to_string()),
        }
    }

    /// Returns true when the result is the fail-soft default.
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

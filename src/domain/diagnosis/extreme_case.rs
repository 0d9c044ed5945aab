//! Extreme Case Detector - Overrides inference for uniform all-min or all-max answers.
//!
//! A questionnaire answered entirely at one end of the scale is treated as
//! disengaged or pattern-filled rather than as genuine signal, so fuzzy
//! inference is skipped and a fixed diagnosis is returned.

use super::category::{ANSWER_MAX, ANSWER_MIN, TOTAL_QUESTIONS};
use super::responses::RawResponses;
use super::rules::Diagnosis;
use crate::domain::foundation::Percentage;

/// Confidence reported for every extreme-case override.
pub const EXTREME_CASE_CONFIDENCE: Percentage = Percentage::HALF;

/// Which end of the scale every answer sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremeCase {
    AllMinimum,
    AllMaximum,
}

impl ExtremeCase {
    /// Fixed diagnosis for this pattern.
    pub fn diagnosis(&self) -> Diagnosis {
        match self {
            ExtremeCase::AllMinimum => Diagnosis::LOW_ENGAGEMENT,
            ExtremeCase::AllMaximum => Diagnosis::HIGH_DEPENDENCY,
        }
    }

    pub fn confidence(&self) -> Percentage {
        EXTREME_CASE_CONFIDENCE
    }
}

/// Detects degenerate answer patterns on the raw answers.
pub struct ExtremeCaseDetector;

impl ExtremeCaseDetector {
    /// Returns the extreme case when all 20 answers share the scale minimum or maximum.
    pub fn detect(responses: &RawResponses) -> Option<ExtremeCase> {
        if responses.len() != TOTAL_QUESTIONS {
            return None;
        }

        if responses.values().all(|value| is_at(value, ANSWER_MIN)) {
            Some(ExtremeCase::AllMinimum)
        } else if responses.values().all(|value| is_at(value, ANSWER_MAX)) {
            Some(ExtremeCase::AllMaximum)
        } else {
            None
        }
    }
}

fn is_at(value: f64, bound: f64) -> bool {
    (value - bound).abs() < f64::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_minimum_is_low_engagement() {
        let case = ExtremeCaseDetector::detect(&RawResponses::uniform(0.0)).unwrap();
        assert_eq!(case, ExtremeCase::AllMinimum);
        assert_eq!(case.diagnosis(), Diagnosis::BusquedaAtencion);
        assert_eq!(case.confidence().value(), 50);
    }

    #[test]
    fn all_maximum_is_high_dependency() {
        let case = ExtremeCaseDetector::detect(&RawResponses::uniform(6.4)).unwrap();
        assert_eq!(case, ExtremeCase::AllMaximum);
        assert_eq!(case.diagnosis(), Diagnosis::ConductaDependiente);
    }

    #[test]
    fn one_deviating_answer_disables_override() {
        let mut responses = RawResponses::uniform(6.4);
        responses.insert("Temerosidad_2", 4.8);
        assert_eq!(ExtremeCaseDetector::detect(&responses), None);
    }

    #[test]
    fn uniform_middle_answers_are_not_extreme() {
        assert_eq!(ExtremeCaseDetector::detect(&RawResponses::uniform(3.2)), None);
    }

    #[test]
    fn incomplete_questionnaire_is_not_extreme() {
        let mut responses = RawResponses::uniform(0.0);
        responses.remove("Minuciosidad_1");
        assert_eq!(ExtremeCaseDetector::detect(&responses), None);
    }
}

//! Diagnosis Module - Fuzzy behavioral-diagnosis engine.
//!
//! Converts a 20-item questionnaire (4 items × 5 behavioral categories, each
//! answered on a 5-point ordinal scale) into one of three diagnoses using
//! fuzzy membership, rule evaluation and defuzzification.
//!
//! # Components
//!
//! - `ResponseAggregator` - Completeness validation, per-category means
//! - `MembershipEvaluator` - "Normal"/"Alto" membership degrees
//! - `ExtremeCaseDetector` - All-min/all-max override before inference
//! - `RuleEngine` - 32-rule evaluation with fuzzy AND (minimum)
//! - `Defuzzifier` - Sum-of-activations label selection with tie-break
//! - `ConfidenceEstimator` - 0-100 confidence from activation statistics
//! - `DominantFactorRanker` - Category ranking for display
//! - `DiagnosisEngine` - The full pipeline
//!
//! All computation is pure and synchronous. The only shared state is the
//! immutable rule base.

mod category;
mod confidence;
mod defuzzifier;
mod dominant_factors;
mod engine;
mod errors;
mod extreme_case;
mod membership;
mod responses;
mod result;
mod rule_engine;
mod rules;

pub use category::{
    Category, LinguisticTerm, QuestionKey, ANSWER_MAX, ANSWER_MIN, ANSWER_SCALE,
    QUESTIONS_PER_CATEGORY, TOTAL_QUESTIONS,
};
pub use confidence::ConfidenceEstimator;
pub use defuzzifier::{Defuzzifier, LabelScore, TIE_TOLERANCE};
pub use dominant_factors::{DominantFactor, DominantFactorRanker, DISPLAY_LEVEL_THRESHOLD};
pub use engine::DiagnosisEngine;
pub use errors::{CategoryCompleteness, DiagnosisError, IncompleteResponses};
pub use extreme_case::{ExtremeCase, ExtremeCaseDetector, EXTREME_CASE_CONFIDENCE};
pub use membership::MembershipEvaluator;
pub use responses::{CategoryScores, RawResponses, ResponseAggregator};
pub use result::DiagnosisResult;
pub use rule_engine::{Activation, RuleEngine};
pub use rules::{Diagnosis, Rule, RuleBase, RuleBaseDocument, RuleBaseError, RULE_COUNT};

//! Dominant Factor Ranker - Orders category scores for display.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::category::{Category, LinguisticTerm};

/// Display cut between "Normal" and "Alto".
///
/// This is a presentation simplification and is unrelated to the
/// membership functions used by inference.
pub const DISPLAY_LEVEL_THRESHOLD: f64 = 3.5;

/// One category's contribution, for explanatory display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantFactor {
    pub category: Category,
    /// Score rounded to two decimals.
    pub score: f64,
    pub level: LinguisticTerm,
}

pub struct DominantFactorRanker;

impl DominantFactorRanker {
    /// Ranks categories by score, highest first.
    ///
    /// Categories with equal scores keep questionnaire order.
    pub fn rank(scores: &BTreeMap<Category, f64>) -> Vec<DominantFactor> {
        let mut factors: Vec<DominantFactor> = scores
            .iter()
            .map(|(category, score)| DominantFactor {
                category: *category,
                score: round_to_hundredths(*score),
                level: Self::level(*score),
            })
            .collect();

        factors.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        factors
    }

    /// Display level of a score: "Alto" strictly above 3.5, "Normal" otherwise.
    pub fn level(score: f64) -> LinguisticTerm {
        if score > DISPLAY_LEVEL_THRESHOLD {
            LinguisticTerm::Alto
        } else {
            LinguisticTerm::Normal
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Membership Evaluator - Fuzzy membership degrees of a category score.
//!
//! Both terms are piecewise-linear over the score domain [0, 6.4]:
//!
//! ```text
//!  1 |        /\        ________
//!    |       /  \      /
//!    |      /    \    /
//!  0 |_____/      \__/__________
//!    0    1    3  4          6.4
//!         Normal      Alto
//! ```
//!
//! The two terms overlap only on (3, 4).

use super::category::{LinguisticTerm, ANSWER_MAX};

/// Evaluates membership functions for linguistic terms.
pub struct MembershipEvaluator;

impl MembershipEvaluator {
    /// Degree to which `score` is "Normal".
    ///
    /// Rises from 1 to a peak at 3, then falls to 0 at 4.
    pub fn normal(score: f64) -> f64 {
        let degree = if score <= 1.0 {
            0.0
        } else if score < 3.0 {
            (score - 1.0) / 2.0
        } else if score < 4.0 {
            4.0 - score
        } else {
            0.0
        };
        clamp_degree(degree)
    }

    /// Degree to which `score` is "Alto".
    ///
    /// Rises from 3 to full membership at 4 and stays there up to 6.4.
    pub fn alto(score: f64) -> f64 {
        let degree = if score <= 3.0 {
            0.0
        } else if score < 4.0 {
            score - 3.0
        } else if score <= ANSWER_MAX {
            1.0
        } else {
            0.0
        };
        clamp_degree(degree)
    }

    /// Degree of `score` in `term`.
    pub fn degree(term: LinguisticTerm, score: f64) -> f64 {
        match term {
            LinguisticTerm::Normal => Self::normal(score),
            LinguisticTerm::Alto => Self::alto(score),
        }
    }
}

/// Degrees are clamped to [0, 1] before use.
fn clamp_degree(degree: f64) -> f64 {
    if degree.is_nan() {
        0.0
    } else {
        degree.clamp(0.0, 1.0)
    }
}

//! Rule Engine - Fires every rule against the category scores.

use serde::{Deserialize, Serialize};

use super::membership::MembershipEvaluator;
use super::responses::CategoryScores;
use super::rules::{Diagnosis, Rule, RuleBase};

/// Strength with which a single rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    pub rule_id: u32,
    pub consequent: Diagnosis,
    /// Activation degree in (0, 1].
    pub degree: f64,
}

/// Evaluates a rule base with fuzzy AND (minimum).
pub struct RuleEngine;

impl RuleEngine {
    /// Activations of every rule that fires, in rule base order.
    ///
    /// Rules whose degree is zero are dropped.
    pub fn evaluate(scores: &CategoryScores, rule_base: &RuleBase) -> Vec<Activation> {
        rule_base
            .rules()
            .iter()
            .filter_map(|rule| {
                let degree = Self::degree(rule, scores);
                (degree > 0.0).then(|| Activation {
                    rule_id: rule.id(),
                    consequent: rule.consequent(),
                    degree,
                })
            })
            .collect()
    }

    /// Minimum membership across the rule's antecedent terms.
    pub fn degree(rule: &Rule, scores: &CategoryScores) -> f64 {
        rule.antecedent()
            .map(|(category, term)| MembershipEvaluator::degree(term, scores.get(category)))
            .fold(1.0, f64::min)
    }
}

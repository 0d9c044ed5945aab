//! Defuzzifier - Turns rule activations into a single diagnosis.
//!
//! # Algorithm
//! 1. Sum activation degrees per consequent label
//! 2. The label with the highest sum wins
//! 3. On a tie, the label whose contributing rules use more "Alto"/"Inestable"
//!    terms wins
//! 4. A tie that survives step 3 goes to the earliest label in
//!    [`Diagnosis::ALL`]

use serde::Serialize;
use tracing::debug;

use super::rule_engine::Activation;
use super::rules::{Diagnosis, RuleBase};

/// Sums closer than this are considered tied.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Aggregated activation of one diagnosis label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelScore {
    pub diagnosis: Diagnosis,
    /// Sum of activation degrees.
    pub total: f64,
    /// Elevated antecedent terms across all contributing rules.
    pub elevated_terms: usize,
    pub rule_count: usize,
}

/// Sum-of-activations defuzzification.
pub struct Defuzzifier;

impl Defuzzifier {
    /// Groups activations by label, in [`Diagnosis::ALL`] order.
    ///
    /// Labels without activations are omitted.
    pub fn aggregate(activations: &[Activation], rule_base: &RuleBase) -> Vec<LabelScore> {
        Diagnosis::ALL
            .into_iter()
            .filter_map(|diagnosis| {
                let contributing: Vec<&Activation> = activations
                    .iter()
                    .filter(|a| a.consequent == diagnosis)
                    .collect();

                if contributing.is_empty() {
                    return None;
                }

                let elevated_terms = contributing
                    .iter()
                    .filter_map(|a| rule_base.get(a.rule_id))
                    .map(|rule| rule.elevated_term_count())
                    .sum();

                Some(LabelScore {
                    diagnosis,
                    total: contributing.iter().map(|a| a.degree).sum(),
                    elevated_terms,
                    rule_count: contributing.len(),
                })
            })
            .collect()
    }

    /// Selects the winning diagnosis; `None` when nothing fired.
    pub fn select(activations: &[Activation], rule_base: &RuleBase) -> Option<Diagnosis> {
        let scores = Self::aggregate(activations, rule_base);

        let best_total = scores
            .iter()
            .map(|s| s.total)
            .fold(f64::NEG_INFINITY, f64::max);

        let tied: Vec<&LabelScore> = scores
            .iter()
            .filter(|s| best_total - s.total <= TIE_TOLERANCE)
            .collect();

        if tied.len() > 1 {
            debug!(
                tied = ?tied.iter().map(|s| s.diagnosis.label()).collect::<Vec<_>>(),
                total = best_total,
                "Breaking defuzzification tie by elevated term count"
            );
        }

        tied.into_iter()
            .fold(None, |best: Option<&LabelScore>, candidate| match best {
                Some(current) if current.elevated_terms >= candidate.elevated_terms => Some(current),
                _ => Some(candidate),
            })
            .map(|winner| winner.diagnosis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activation(rule_id: u32, consequent: Diagnosis, degree: f64) -> Activation {
        Activation {
            rule_id,
            consequent,
            degree,
        }
    }

    #[test]
    fn empty_activations_select_nothing() {
        assert_eq!(Defuzzifier::select(&[], RuleBase::standard()), None);
        assert!(Defuzzifier::aggregate(&[], RuleBase::standard()).is_empty());
    }

    #[test]
    fn aggregate_sums_degrees_per_label() {
        let activations = vec![
            activation(3, Diagnosis::ConductaDependiente, 0.25),
            activation(4, Diagnosis::ConductaDependiente, 0.5),
            activation(1, Diagnosis::BusquedaAtencion, 0.5),
        ];

        let scores = Defuzzifier::aggregate(&activations, RuleBase::standard());

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].diagnosis, Diagnosis::BusquedaAtencion);
        assert_eq!(scores[1].diagnosis, Diagnosis::ConductaDependiente);
        assert!((scores[1].total - 0.75).abs() < 1e-9);
        assert_eq!(scores[1].rule_count, 2);
        // Rule 3 has Dependiente=Alto, rule 4 adds Temerosidad=Alto.
        assert_eq!(scores[1].elevated_terms, 3);
    }

    #[test]
    fn sum_beats_single_strongest_activation() {
        let activations = vec![
            activation(1, Diagnosis::BusquedaAtencion, 0.6),
            activation(3, Diagnosis::ConductaDependiente, 0.4),
            activation(4, Diagnosis::ConductaDependiente, 0.4),
        ];

        assert_eq!(
            Defuzzifier::select(&activations, RuleBase::standard()),
            Some(Diagnosis::ConductaDependiente)
        );
    }

    #[test]
    fn tie_goes_to_label_with_more_elevated_terms() {
        // Rule 1 is all Normal; rule 17 has Minuciosidad=Alto.
        let activations = vec![
            activation(1, Diagnosis::BusquedaAtencion, 0.5),
            activation(17, Diagnosis::InhibicionConductual, 0.5),
        ];

        assert_eq!(
            Defuzzifier::select(&activations, RuleBase::standard()),
            Some(Diagnosis::InhibicionConductual)
        );
    }

    #[test]
    fn residual_tie_falls_back_to_label_priority() {
        // Rules 2 and 3 each carry a single elevated term.
        let activations = vec![
            activation(3, Diagnosis::ConductaDependiente, 0.4),
            activation(2, Diagnosis::InhibicionConductual, 0.4),
        ];

        assert_eq!(
            Defuzzifier::select(&activations, RuleBase::standard()),
            Some(Diagnosis::InhibicionConductual)
        );
    }
}

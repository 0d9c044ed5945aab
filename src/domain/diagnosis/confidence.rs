//! Confidence Estimator - Confidence of the selected diagnosis.

use super::rule_engine::Activation;
use super::rules::Diagnosis;
use crate::domain::foundation::Percentage;

pub struct ConfidenceEstimator;

impl ConfidenceEstimator {
    /// Confidence = round(((max + mean) / 2) × 100) over the activations
    /// voting for `diagnosis`.
    ///
    /// # Edge Cases
    /// - No activation for `diagnosis` (defaulted result): 0%
    pub fn estimate(diagnosis: Diagnosis, activations: &[Activation]) -> Percentage {
        let degrees: Vec<f64> = activations
            .iter()
            .filter(|a| a.consequent == diagnosis)
            .map(|a| a.degree)
            .collect();

        if degrees.is_empty() {
            return Percentage::ZERO;
        }

        let max = degrees.iter().copied().fold(0.0, f64::max);
        let mean = degrees.iter().sum::<f64>() / degrees.len() as f64;

        Percentage::from_fraction((max + mean) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activation(consequent: Diagnosis, degree: f64) -> Activation {
        Activation {
            rule_id: 1,
            consequent,
            degree,
        }
    }

    #[test]
    fn single_activation_confidence_is_its_degree() {
        let activations = vec![activation(Diagnosis::BusquedaAtencion, 0.5)];
        assert_eq!(
            ConfidenceEstimator::estimate(Diagnosis::BusquedaAtencion, &activations).value(),
            50
        );
    }

    #[test]
    fn confidence_averages_max_and_mean() {
        // max = 0.8, mean = 0.5 => 0.65
        let activations = vec![
            activation(Diagnosis::ConductaDependiente, 0.8),
            activation(Diagnosis::ConductaDependiente, 0.2),
            activation(Diagnosis::BusquedaAtencion, 1.0),
        ];
        assert_eq!(
            ConfidenceEstimator::estimate(Diagnosis::ConductaDependiente, &activations).value(),
            65
        );
    }

    #[test]
    fn confidence_is_zero_without_supporting_activations() {
        let activations = vec![activation(Diagnosis::BusquedaAtencion, 1.0)];
        assert_eq!(
            ConfidenceEstimator::estimate(Diagnosis::InhibicionConductual, &activations),
            Percentage::ZERO
        );
        assert_eq!(
            ConfidenceEstimator::estimate(Diagnosis::BusquedaAtencion, &[]),
            Percentage::ZERO
        );
    }
}

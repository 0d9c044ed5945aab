//! End-to-end tests for the fuzzy diagnosis pipeline.
//!
//! These tests drive `DiagnosisEngine` through the public API only:
//! 1. Representative questionnaires map to the expected diagnosis
//! 2. Incomplete input fails soft through `inference` and hard through `try_inference`
//! 3. Results are deterministic and well-formed for any complete questionnaire
//! 4. A substituted rule base changes the outcome

use std::sync::Arc;

use proptest::prelude::*;

use fuzzy_diagnosis::domain::diagnosis::{
    Category, Diagnosis, DiagnosisEngine, DiagnosisError, LinguisticTerm, RawResponses, Rule,
    RuleBase, ANSWER_SCALE, QUESTIONS_PER_CATEGORY,
};

// =============================================================================
// Helpers
// =============================================================================

fn engine() -> DiagnosisEngine {
    DiagnosisEngine::standard()
}

/// Every answer at 1.6 except the elevated categories, which answer 4.8.
fn elevated(categories: &[Category]) -> RawResponses {
    categories
        .iter()
        .fold(RawResponses::uniform(1.6), |responses, category| {
            responses.with_category(*category, 4.8)
        })
}

// =============================================================================
// Representative questionnaires
// =============================================================================

#[test]
fn moderate_answers_fire_only_the_all_normal_rule() {
    let result = engine().inference(&RawResponses::uniform(2.0));

    assert_eq!(result.diagnosis, Diagnosis::BusquedaAtencion);
    assert_eq!(result.confidence.value(), 50);
    assert_eq!(result.activations.len(), 1);
    assert_eq!(result.activations[0].rule_id, 1);
    assert!(!result.is_extreme_case);
    assert!(result.error.is_none());
}

#[test]
fn elevated_minuciosidad_alone_is_behavioral_inhibition() {
    let result = engine().inference(&elevated(&[Category::Minuciosidad]));

    assert_eq!(result.diagnosis, Diagnosis::InhibicionConductual);
    assert_eq!(result.confidence.value(), 30);
    assert_eq!(result.dominant_factors[0].category, Category::Minuciosidad);
    assert_eq!(result.dominant_factors[0].level, LinguisticTerm::Alto);
}

#[test]
fn elevated_temerosidad_alone_is_behavioral_inhibition() {
    let result = engine().inference(&elevated(&[Category::Temerosidad]));
    assert_eq!(result.diagnosis, Diagnosis::InhibicionConductual);
}

#[test]
fn elevated_dependiente_alone_is_dependent_behavior() {
    let result = engine().inference(&elevated(&[Category::Dependiente]));
    assert_eq!(result.diagnosis, Diagnosis::ConductaDependiente);
}

#[test]
fn elevated_agresividad_alone_is_attention_seeking() {
    let result = engine().inference(&elevated(&[Category::Agresividad]));
    assert_eq!(result.diagnosis, Diagnosis::BusquedaAtencion);
}

#[test]
fn dependent_aggressive_unstable_profile_is_attention_seeking() {
    let result = engine().inference(&elevated(&[
        Category::Emocionalidad,
        Category::Agresividad,
        Category::Dependiente,
    ]));

    assert_eq!(result.diagnosis, Diagnosis::BusquedaAtencion);
    assert_eq!(result.activations.len(), 1);
    assert_eq!(result.activations[0].rule_id, 15);
}

#[test]
fn high_answers_fire_only_the_all_elevated_rule() {
    let result = engine().inference(&RawResponses::uniform(4.8));

    assert_eq!(result.diagnosis, Diagnosis::ConductaDependiente);
    assert_eq!(result.confidence.value(), 100);
    assert_eq!(result.activations.len(), 1);
    assert_eq!(result.activations[0].rule_id, 32);
}

#[test]
fn overlapping_memberships_fire_every_rule() {
    let result = engine().inference(&RawResponses::uniform(3.2));

    assert_eq!(result.activations.len(), 32);
    assert_eq!(result.diagnosis, Diagnosis::ConductaDependiente);
    assert_eq!(result.confidence.value(), 20);
}

#[test]
fn all_minimum_and_all_maximum_answers_are_extreme_cases() {
    let low = engine().inference(&RawResponses::uniform(0.0));
    assert!(low.is_extreme_case);
    assert_eq!(low.diagnosis, Diagnosis::BusquedaAtencion);
    assert_eq!(low.confidence.value(), 50);

    let high = engine().inference(&RawResponses::uniform(6.4));
    assert!(high.is_extreme_case);
    assert_eq!(high.diagnosis, Diagnosis::ConductaDependiente);
    assert_eq!(high.confidence.value(), 50);
}

#[test]
fn very_low_answers_without_extreme_pattern_fire_no_rule() {
    let responses = RawResponses::uniform(0.0).with_category(Category::Temerosidad, 0.8);
    let result = engine().inference(&responses);

    assert!(!result.is_extreme_case);
    assert!(result.activations.is_empty());
    assert_eq!(result.diagnosis, Diagnosis::BusquedaAtencion);
    assert_eq!(result.confidence.value(), 0);
}

// =============================================================================
// Incomplete input
// =============================================================================

#[test]
fn missing_answer_fails_soft_with_partial_factors() {
    let mut responses = RawResponses::uniform(2.0);
    responses.remove("Agresividad_1");

    let result = engine().inference(&responses);

    assert!(result.is_fallback());
    assert_eq!(result.diagnosis, Diagnosis::BusquedaAtencion);
    assert_eq!(result.confidence.value(), 0);
    assert!(result.activations.is_empty());
    assert_eq!(result.dominant_factors.len(), 5);
    assert!(result.error.unwrap().contains("Agresividad_1"));
}

#[test]
fn missing_answer_is_a_typed_error_from_try_inference() {
    let mut responses = RawResponses::uniform(2.0);
    responses.remove("Temerosidad_4");

    let report = match engine().try_inference(&responses) {
        Err(DiagnosisError::IncompleteResponses(report)) => report,
        other => panic!("expected incomplete responses, got {other:?}"),
    };
    assert_eq!(report.actual_total, 19);
    assert_eq!(report.missing_keys(), vec!["Temerosidad_4"]);
}

#[test]
fn unknown_question_key_makes_questionnaire_incomplete() {
    let mut responses = RawResponses::uniform(2.0);
    responses.remove("Minuciosidad_1");
    responses.insert("Minuciosidad_5", 2.0);

    let report = match engine().try_inference(&responses) {
        Err(DiagnosisError::IncompleteResponses(report)) => report,
        other => panic!("expected incomplete responses, got {other:?}"),
    };
    assert_eq!(report.unexpected_keys, vec!["Minuciosidad_5".to_string()]);
}

#[test]
fn out_of_range_category_score_is_rejected() {
    let responses = RawResponses::uniform(1.6).with_category(Category::Agresividad, 9.0);

    assert!(matches!(
        engine().try_inference(&responses),
        Err(DiagnosisError::OutOfRange { category: Category::Agresividad, .. })
    ));
    assert!(engine().inference(&responses).is_fallback());
}

#[test]
fn single_answer_above_scale_is_rejected() {
    let mut responses = RawResponses::uniform(2.0);
    responses.insert("Dependiente_3", 7.0);

    assert!(matches!(
        engine().try_inference(&responses),
        Err(DiagnosisError::OutOfRange { category: Category::Dependiente, .. })
    ));
}

#[test]
fn single_answer_below_zero_is_rejected() {
    let mut responses = RawResponses::uniform(2.0);
    responses.insert("Emocionalidad_1", -1.6);

    assert!(matches!(
        engine().try_inference(&responses),
        Err(DiagnosisError::OutOfRange { category: Category::Emocionalidad, .. })
    ));
}

#[test]
fn outlier_answers_cannot_average_into_a_confident_diagnosis() {
    let mut responses = RawResponses::uniform(1.6);
    responses.insert("Minuciosidad_1", 25.6);
    responses.insert("Minuciosidad_2", -6.4);
    responses.insert("Minuciosidad_3", 0.0);
    responses.insert("Minuciosidad_4", 0.0);

    let result = engine().inference(&responses);

    assert!(result.is_fallback());
    assert_eq!(result.diagnosis, Diagnosis::BusquedaAtencion);
    assert_eq!(result.confidence.value(), 0);
    assert!(result.activations.is_empty());
}

// =============================================================================
// Rule base substitution
// =============================================================================

#[test]
fn substituted_rule_base_changes_the_outcome() {
    let rules = RuleBase::standard()
        .rules()
        .iter()
        .map(|rule| {
            let antecedent = Category::ALL.map(|category| rule.term(category));
            let consequent = if rule.id() == 1 {
                Diagnosis::ConductaDependiente
            } else {
                rule.consequent()
            };
            Rule::new(rule.id(), antecedent, consequent)
        })
        .collect();
    let custom = DiagnosisEngine::new(Arc::new(RuleBase::new(rules).unwrap()));

    let responses = RawResponses::uniform(2.0);
    assert_eq!(engine().inference(&responses).diagnosis, Diagnosis::BusquedaAtencion);
    assert_eq!(custom.inference(&responses).diagnosis, Diagnosis::ConductaDependiente);
}

// =============================================================================
// Properties
// =============================================================================

fn questionnaire() -> impl Strategy<Value = RawResponses> {
    prop::collection::vec(0..ANSWER_SCALE.len(), Category::ALL.len() * QUESTIONS_PER_CATEGORY)
        .prop_map(|indices| {
            let mut responses = RawResponses::new();
            for (position, scale_index) in indices.into_iter().enumerate() {
                let category = Category::ALL[position / QUESTIONS_PER_CATEGORY];
                let question = position % QUESTIONS_PER_CATEGORY + 1;
                responses.insert(format!("{}_{}", category.name(), question), ANSWER_SCALE[scale_index]);
            }
            responses
        })
}

proptest! {
    #[test]
    fn inference_is_deterministic(responses in questionnaire()) {
        let engine = engine();
        prop_assert_eq!(engine.inference(&responses), engine.inference(&responses));
    }

    #[test]
    fn complete_questionnaires_always_produce_a_well_formed_result(responses in questionnaire()) {
        let result = engine().try_inference(&responses).unwrap();

        prop_assert!(result.error.is_none());
        prop_assert!(result.confidence.value() <= 100);
        prop_assert_eq!(result.dominant_factors.len(), 5);
        prop_assert!(result
            .dominant_factors
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
        prop_assert!(result
            .activations
            .iter()
            .all(|activation| activation.degree > 0.0 && activation.degree <= 1.0));

        if !result.is_extreme_case && result.confidence.value() > 0 {
            prop_assert!(result
                .activations
                .iter()
                .any(|activation| activation.consequent == result.diagnosis));
        }
    }
}

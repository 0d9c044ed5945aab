//! Rule Base - The fuzzy rules mapping category terms to a diagnosis.
//!
//! A rule base is configuration data: it is parsed from YAML or JSON and
//! validated once, then shared read-only across every inference call.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use super::category::{Category, LinguisticTerm};

/// Number of rules in a complete rule base (2 terms ^ 5 categories).
pub const RULE_COUNT: usize = 32;

const STANDARD_RULES_YAML: &str = include_str!("data/standard_rules.yaml");

static STANDARD_RULES: Lazy<Arc<RuleBase>> = Lazy::new(|| {
    Arc::new(RuleBase::from_yaml_str(STANDARD_RULES_YAML).expect("Embedded rule base must be valid"))
});

/// The three diagnoses the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    #[serde(rename = "Búsqueda Atención")]
    BusquedaAtencion,
    #[serde(rename = "Inhibición Conductual")]
    InhibicionConductual,
    #[serde(rename = "Conducta Dependiente")]
    ConductaDependiente,
}

impl Diagnosis {
    /// Every diagnosis, in tie-break priority order.
    pub const ALL: [Diagnosis; 3] = [
        Diagnosis::BusquedaAtencion,
        Diagnosis::InhibicionConductual,
        Diagnosis::ConductaDependiente,
    ];

    /// Default diagnosis for disengaged answers, empty inference and failed input.
    pub const LOW_ENGAGEMENT: Diagnosis = Diagnosis::BusquedaAtencion;

    /// Diagnosis for uniformly maximal answers.
    pub const HIGH_DEPENDENCY: Diagnosis = Diagnosis::ConductaDependiente;

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::BusquedaAtencion => "Búsqueda Atención",
            Diagnosis::InhibicionConductual => "Inhibición Conductual",
            Diagnosis::ConductaDependiente => "Conducta Dependiente",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Errors raised while building a rule base.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleBaseError {
    #[error("Rule base must contain exactly {expected} rules, found {actual}")]
    WrongRuleCount { expected: usize, actual: usize },

    #[error("Duplicate rule id {0}")]
    DuplicateRuleId(u32),

    #[error("Rules {first} and {second} share the same antecedent")]
    DuplicateAntecedent { first: u32, second: u32 },

    #[error("Rule {rule_id} has no term for category '{category}'")]
    MissingTerm { rule_id: u32, category: Category },

    #[error("Rule {rule_id} references unknown category '{name}'")]
    UnknownCategory { rule_id: u32, name: String },

    #[error("Rule {rule_id} uses unknown term '{term}' for category '{category}'")]
    UnknownTerm {
        rule_id: u32,
        category: Category,
        term: String,
    },

    #[error("Rule base could not be parsed: {0}")]
    Parse(String),

    #[error("Rule base file '{path}' could not be read: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Unsupported rule base format for '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}

/// A fuzzy rule: one term per category implies a diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleRecord", into = "RuleRecord")]
pub struct Rule {
    id: u32,
    antecedent: [LinguisticTerm; 5],
    consequent: Diagnosis,
}

impl Rule {
    /// Creates a rule; `antecedent` is indexed in [`Category::ALL`] order.
    pub fn new(id: u32, antecedent: [LinguisticTerm; 5], consequent: Diagnosis) -> Self {
        Self {
            id,
            antecedent,
            consequent,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn consequent(&self) -> Diagnosis {
        self.consequent
    }

    /// Term this rule requires for `category`.
    pub fn term(&self, category: Category) -> LinguisticTerm {
        self.antecedent[category.index()]
    }

    /// Antecedent terms in questionnaire order.
    pub fn antecedent(&self) -> impl Iterator<Item = (Category, LinguisticTerm)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.term(category)))
    }

    /// Number of "Alto"/"Inestable" terms in the antecedent.
    pub fn elevated_term_count(&self) -> usize {
        self.antecedent.iter().filter(|term| term.is_elevated()).count()
    }
}

/// Serialized form of a rule, using each category's display term names.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RuleRecord {
    id: u32,
    antecedent: BTreeMap<String, String>,
    consequent: Diagnosis,
}

impl TryFrom<RuleRecord> for Rule {
    type Error = RuleBaseError;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        let rule_id = record.id;
        let mut terms: [Option<LinguisticTerm>; 5] = [None; 5];

        for (name, label) in &record.antecedent {
            let category: Category = name.parse().map_err(|_| RuleBaseError::UnknownCategory {
                rule_id,
                name: name.clone(),
            })?;

            let unknown_term = || RuleBaseError::UnknownTerm {
                rule_id,
                category,
                term: label.clone(),
            };
            let term = LinguisticTerm::from_label(label).map_err(|_| unknown_term())?;

            // Aliases only apply to the category that owns them.
            if term.label() != label && category.term_label(term) != label {
                return Err(unknown_term());
            }

            terms[category.index()] = Some(term);
        }

        let mut antecedent = [LinguisticTerm::Normal; 5];
        for category in Category::ALL {
            antecedent[category.index()] = terms[category.index()]
                .ok_or(RuleBaseError::MissingTerm { rule_id, category })?;
        }

        Ok(Rule::new(rule_id, antecedent, record.consequent))
    }
}

impl From<Rule> for RuleRecord {
    fn from(rule: Rule) -> Self {
        let antecedent = rule
            .antecedent()
            .map(|(category, term)| (category.name().to_string(), category.term_label(term).to_string()))
            .collect();

        RuleRecord {
            id: rule.id,
            antecedent,
            consequent: rule.consequent,
        }
    }
}

/// Document layout of a rule base file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleBaseDocument {
    pub rules: Vec<Rule>,
}

/// A validated, complete set of rules.
///
/// # Invariants
/// - Exactly [`RULE_COUNT`] rules with unique ids
/// - Every rule has one term per category
/// - No two rules share an antecedent, so every combination appears once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Validates and wraps a list of rules.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleBaseError> {
        if rules.len() != RULE_COUNT {
            return Err(RuleBaseError::WrongRuleCount {
                expected: RULE_COUNT,
                actual: rules.len(),
            });
        }

        let mut ids = HashSet::new();
        let mut antecedents: HashMap<[LinguisticTerm; 5], u32> = HashMap::new();

        for rule in &rules {
            if !ids.insert(rule.id) {
                return Err(RuleBaseError::DuplicateRuleId(rule.id));
            }
            if let Some(first) = antecedents.insert(rule.antecedent, rule.id) {
                return Err(RuleBaseError::DuplicateAntecedent {
                    first,
                    second: rule.id,
                });
            }
        }

        Ok(Self { rules })
    }

    /// The rule base shipped with the engine.
    pub fn standard() -> &'static RuleBase {
        &STANDARD_RULES
    }

    /// Handle to the process-wide standard rule base.
    pub fn shared_standard() -> Arc<RuleBase> {
        Arc::clone(&STANDARD_RULES)
    }

    /// Parses a YAML rule base document.
    pub fn from_yaml_str(source: &str) -> Result<Self, RuleBaseError> {
        let document: RuleBaseDocument =
            serde_yaml::from_str(source).map_err(|e| RuleBaseError::Parse(e.to_string()))?;
        Self::new(document.rules)
    }

    /// Parses a JSON rule base document.
    pub fn from_json_str(source: &str) -> Result<Self, RuleBaseError> {
        let document: RuleBaseDocument =
            serde_json::from_str(source).map_err(|e| RuleBaseError::Parse(e.to_string()))?;
        Self::new(document.rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Looks up a rule by id.
    pub fn get(&self, id: u32) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_document(&self) -> RuleBaseDocument {
        RuleBaseDocument {
            rules: self.rules.clone(),
        }
    }
}

//! Behavioral categories, linguistic terms and the questionnaire answer scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of questionnaire items per category.
pub const QUESTIONS_PER_CATEGORY: usize = 4;

/// Total number of questionnaire items (5 categories × 4 questions).
pub const TOTAL_QUESTIONS: usize = Category::ALL.len() * QUESTIONS_PER_CATEGORY;

/// The five ordinal answer values of the questionnaire, lowest first.
pub const ANSWER_SCALE: [f64; 5] = [0.0, 1.6, 3.2, 4.8, 6.4];

/// Lowest answer value on the scale.
pub const ANSWER_MIN: f64 = ANSWER_SCALE[0];

/// Highest answer value on the scale; also the upper bound of a category score.
pub const ANSWER_MAX: f64 = ANSWER_SCALE[4];

/// One of the five behavioral categories assessed by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Minuciosidad,
    Emocionalidad,
    Agresividad,
    Dependiente,
    Temerosidad,
}

impl Category {
    /// All categories in questionnaire order.
    pub const ALL: [Category; 5] = [
        Category::Minuciosidad,
        Category::Emocionalidad,
        Category::Agresividad,
        Category::Dependiente,
        Category::Temerosidad,
    ];

    /// Position of this category in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Minuciosidad => 0,
            Category::Emocionalidad => 1,
            Category::Agresividad => 2,
            Category::Dependiente => 3,
            Category::Temerosidad => 4,
        }
    }

    /// Returns the display name, which is also the key prefix of its answers.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Minuciosidad => "Minuciosidad",
            Category::Emocionalidad => "Emocionalidad",
            Category::Agresividad => "Agresividad",
            Category::Dependiente => "Dependiente",
            Category::Temerosidad => "Temerosidad",
        }
    }

    /// Returns the name this category uses for a linguistic term.
    ///
    /// Emocionalidad speaks of "Estable"/"Inestable"; every other
    /// category uses the canonical names.
    pub fn term_label(&self, term: LinguisticTerm) -> &'static str {
        TERM_ALIASES
            .iter()
            .find(|alias| alias.category == Some(*self) && alias.term == term)
            .map(|alias| alias.label)
            .unwrap_or_else(|| term.label())
    }

    /// Keys of the answers expected for this category, e.g. `Minuciosidad_1`.
    pub fn question_keys(&self) -> Vec<QuestionKey> {
        (1..=QUESTIONS_PER_CATEGORY)
            .map(|index| QuestionKey::new(*self, index))
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| ValidationError::invalid_format("category", format!("unknown category '{}'", s)))
    }
}

/// Canonical fuzzy term of a category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LinguisticTerm {
    Normal,
    Alto,
}

impl LinguisticTerm {
    /// Returns the canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            LinguisticTerm::Normal => "Normal",
            LinguisticTerm::Alto => "Alto",
        }
    }

    /// Returns true for the elevated term ("Alto", shown as "Inestable" for Emocionalidad).
    pub fn is_elevated(&self) -> bool {
        matches!(self, LinguisticTerm::Alto)
    }

    /// Resolves a display name (canonical or category alias) to its term.
    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        TERM_ALIASES
            .iter()
            .find(|alias| alias.label == label)
            .map(|alias| alias.term)
            .ok_or_else(|| ValidationError::invalid_format("term", format!("unknown term '{}'", label)))
    }
}

impl fmt::Display for LinguisticTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display name → canonical term.
struct TermAlias {
    label: &'static str,
    term: LinguisticTerm,
    /// Category that displays the term under this label; `None` for canonical names.
    category: Option<Category>,
}

const TERM_ALIASES: &[TermAlias] = &[
    TermAlias { label: "Normal", term: LinguisticTerm::Normal, category: None },
    TermAlias { label: "Alto", term: LinguisticTerm::Alto, category: None },
    TermAlias {
        label: "Estable",
        term: LinguisticTerm::Normal,
        category: Some(Category::Emocionalidad),
    },
    TermAlias {
        label: "Inestable",
        term: LinguisticTerm::Alto,
        category: Some(Category::Emocionalidad),
    },
];

/// Identifies one questionnaire item: a category and a 1-based question index.
///
/// Serialized as `"<Category>_<index>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionKey {
    pub category: Category,
    pub index: usize,
}

impl QuestionKey {
    pub fn new(category: Category, index: usize) -> Self {
        Self { category, index }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.category, self.index)
    }
}

impl FromStr for QuestionKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, index) = s
            .rsplit_once('_')
            .ok_or_else(|| ValidationError::invalid_format("question_key", "missing '_' separator"))?;

        let category: Category = category.parse()?;
        let index: usize = index.parse().map_err(|_| {
            ValidationError::invalid_format("question_key", format!("'{}' is not a question index", index))
        })?;

        if !(1..=QUESTIONS_PER_CATEGORY).contains(&index) {
            return Err(ValidationError::out_of_range(
                "question_index",
                1.0,
                QUESTIONS_PER_CATEGORY as f64,
                index as f64,
            ));
        }

        Ok(Self::new(category, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_has_twenty_items() {
        assert_eq!(TOTAL_QUESTIONS, 20);
    }

    #[test]
    fn category_index_matches_all_order() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[test]
    fn category_parses_from_name() {
        assert_eq!("Temerosidad".parse::<Category>().unwrap(), Category::Temerosidad);
        assert!("temerosidad".parse::<Category>().is_err());
    }

    #[test]
    fn emocionalidad_uses_stability_aliases() {
        let emo = Category::Emocionalidad;
        assert_eq!(emo.term_label(LinguisticTerm::Normal), "Estable");
        assert_eq!(emo.term_label(LinguisticTerm::Alto), "Inestable");
        assert_eq!(Category::Agresividad.term_label(LinguisticTerm::Alto), "Alto");
    }

    #[test]
    fn aliases_resolve_to_canonical_terms() {
        assert_eq!(LinguisticTerm::from_label("Estable").unwrap(), LinguisticTerm::Normal);
        assert_eq!(LinguisticTerm::from_label("Inestable").unwrap(), LinguisticTerm::Alto);
        assert_eq!(LinguisticTerm::from_label("Alto").unwrap(), LinguisticTerm::Alto);
        assert!(LinguisticTerm::from_label("Bajo").is_err());
    }

    #[test]
    fn question_key_round_trips_through_display() {
        let key: QuestionKey = "Dependiente_3".parse().unwrap();
        assert_eq!(key, QuestionKey::new(Category::Dependiente, 3));
        assert_eq!(key.to_string(), "Dependiente_3");
    }

    #[test]
    fn question_key_rejects_bad_input() {
        assert!("Dependiente".parse::<QuestionKey>().is_err());
        assert!("Dependiente_x".parse::<QuestionKey>().is_err());
        assert!("Dependiente_0".parse::<QuestionKey>().is_err());
        assert!("Dependiente_5".parse::<QuestionKey>().is_err());
        assert!("Curiosidad_1".parse::<QuestionKey>().is_err());
    }

    #[test]
    fn question_keys_cover_four_items() {
        let keys = Category::Minuciosidad.question_keys();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["Minuciosidad_1", "Minuciosidad_2", "Minuciosidad_3", "Minuciosidad_4"]
        );
    }
}

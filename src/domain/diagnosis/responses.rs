//! Response Aggregator - Reduces raw questionnaire answers to category scores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::{Category, QuestionKey, ANSWER_MAX, ANSWER_MIN, QUESTIONS_PER_CATEGORY, TOTAL_QUESTIONS};
use super::errors::{CategoryCompleteness, DiagnosisError, IncompleteResponses};

/// Rounding slack accepted at the edges of the score domain.
const SCORE_TOLERANCE: f64 = 1e-9;

/// Raw answers keyed by `"<Category>_<questionIndex>"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawResponses(BTreeMap<String, f64>);

impl RawResponses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    /// Sets every answer of `category` to `value`.
    pub fn with_category(mut self, category: Category, value: f64) -> Self {
        for key in category.question_keys() {
            self.insert(key.to_string(), value);
        }
        self
    }

    /// A complete questionnaire with every answer set to `value`.
    pub fn uniform(value: f64) -> Self {
        Category::ALL
            .into_iter()
            .fold(Self::new(), |responses, category| responses.with_category(category, value))
    }

    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RawResponses {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Validated score per category, each within [0, 6.4].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScores([f64; 5]);

impl CategoryScores {
    /// Validates a score map.
    ///
    /// # Errors
    /// - `MissingFactor` when a category has no score
    /// - `InvalidValue` when a score is NaN or infinite
    /// - `OutOfRange` when a score lies outside [0, 6.4]
    pub fn try_from_map(scores: &BTreeMap<Category, f64>) -> Result<Self, DiagnosisError> {
        let mut validated = [0.0; 5];

        for category in Category::ALL {
            let value = *scores
                .get(&category)
                .ok_or(DiagnosisError::MissingFactor(category))?;

            if !value.is_finite() {
                return Err(DiagnosisError::InvalidValue { category, value });
            }

            if value < ANSWER_MIN - SCORE_TOLERANCE || value > ANSWER_MAX + SCORE_TOLERANCE {
                return Err(DiagnosisError::OutOfRange {
                    category,
                    value,
                    min: ANSWER_MIN,
                    max: ANSWER_MAX,
                });
            }

            validated[category.index()] = value.clamp(ANSWER_MIN, ANSWER_MAX);
        }

        Ok(Self(validated))
    }

    /// Score of one category.
    pub fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    /// Scores in questionnaire order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |category| (category, self.get(category)))
    }

    pub fn to_map(&self) -> BTreeMap<Category, f64> {
        self.iter().collect()
    }
}

/// Groups answers by category and computes their means.
pub struct ResponseAggregator;

impl ResponseAggregator {
    /// Computes the mean score of each category.
    ///
    /// # Errors
    /// Returns `IncompleteResponses` when the questionnaire does not hold
    /// exactly 20 answers, when any category has fewer than 4, or when a
    /// key does not name a known question. No defaults are substituted.
    pub fn aggregate(responses: &RawResponses) -> Result<BTreeMap<Category, f64>, IncompleteResponses> {
        let (grouped, unexpected_keys) = Self::group(responses);

        let categories: Vec<CategoryCompleteness> = Category::ALL
            .into_iter()
            .map(|category| {
                let answered = grouped.get(&category);
                let missing_keys = category
                    .question_keys()
                    .into_iter()
                    .filter(|key| answered.map_or(true, |answers| !answers.contains_key(key)))
                    .map(|key| key.to_string())
                    .collect();

                CategoryCompleteness {
                    category,
                    expected: QUESTIONS_PER_CATEGORY,
                    actual: answered.map_or(0, BTreeMap::len),
                    missing_keys,
                }
            })
            .collect();

        let complete = responses.len() == TOTAL_QUESTIONS
            && unexpected_keys.is_empty()
            && categories.iter().all(CategoryCompleteness::is_complete);

        if !complete {
            return Err(IncompleteResponses {
                expected_total: TOTAL_QUESTIONS,
                actual_total: responses.len(),
                categories,
                unexpected_keys,
            });
        }

        Ok(Self::means(&grouped))
    }

    /// Checks that every recognized answer is a finite value within [0, 6.4].
    ///
    /// Values between the ordinal scale points are accepted. Keys that do
    /// not name a question are left to [`ResponseAggregator::aggregate`].
    ///
    /// # Errors
    /// - `InvalidValue` when an answer is NaN or infinite
    /// - `OutOfRange` when an answer lies outside [0, 6.4]
    pub fn validate_answers(responses: &RawResponses) -> Result<(), DiagnosisError> {
        for (raw_key, value) in responses.iter() {
            let Ok(key) = raw_key.parse::<QuestionKey>() else {
                continue;
            };
            let category = key.category;

            if !value.is_finite() {
                return Err(DiagnosisError::InvalidValue { category, value });
            }

            if !(ANSWER_MIN..=ANSWER_MAX).contains(&value) {
                return Err(DiagnosisError::OutOfRange {
                    category,
                    value,
                    min: ANSWER_MIN,
                    max: ANSWER_MAX,
                });
            }
        }

        Ok(())
    }

    /// Means of whatever answers are present, skipping empty categories.
    ///
    /// Used for display when the questionnaire is incomplete.
    pub fn partial_means(responses: &RawResponses) -> BTreeMap<Category, f64> {
        let (grouped, _) = Self::group(responses);
        Self::means(&grouped)
    }

    fn group(responses: &RawResponses) -> (BTreeMap<Category, BTreeMap<QuestionKey, f64>>, Vec<String>) {
        let mut grouped: BTreeMap<Category, BTreeMap<QuestionKey, f64>> = BTreeMap::new();
        let mut unexpected = Vec::new();

        for (raw_key, value) in responses.iter() {
            match raw_key.parse::<QuestionKey>() {
                Ok(key) => {
                    grouped.entry(key.category).or_default().insert(key, value);
                }
                Err(_) => unexpected.push(raw_key.to_string()),
            }
        }

        (grouped, unexpected)
    }

    fn means(grouped: &BTreeMap<Category, BTreeMap<QuestionKey, f64>>) -> BTreeMap<Category, f64> {
        grouped
            .iter()
            .filter(|(_, answers)| !answers.is_empty())
            .map(|(category, answers)| {
                let total: f64 = answers.values().sum();
                (*category, total / answers.len() as f64)
            })
            .collect()
    }
}

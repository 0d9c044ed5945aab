//! Diagnosis error taxonomy.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::category::Category;
use crate::domain::foundation::ErrorCode;

/// Errors raised while validating questionnaire input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagnosisError {
    #[error("Missing score for factor '{0}'")]
    MissingFactor(Category),

    #[error("Score for factor '{category}' is not a number: {value}")]
    InvalidValue { category: Category, value: f64 },

    #[error("Score for factor '{category}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        category: Category,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{0}")]
    IncompleteResponses(IncompleteResponses),
}

impl DiagnosisError {
    /// Returns the API error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            DiagnosisError::MissingFactor(_) => ErrorCode::MissingFactor,
            DiagnosisError::InvalidValue { .. } => ErrorCode::InvalidValue,
            DiagnosisError::OutOfRange { .. } => ErrorCode::OutOfRange,
            DiagnosisError::IncompleteResponses(_) => ErrorCode::IncompleteResponses,
        }
    }
}

impl From<IncompleteResponses> for DiagnosisError {
    fn from(report: IncompleteResponses) -> Self {
        DiagnosisError::IncompleteResponses(report)
    }
}

/// Completeness breakdown for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCompleteness {
    pub category: Category,
    pub expected: usize,
    pub actual: usize,
    pub missing_keys: Vec<String>,
}

impl CategoryCompleteness {
    /// Returns true when every expected answer is present.
    pub fn is_complete(&self) -> bool {
        self.actual >= self.expected
    }
}

/// Detailed report of a questionnaire that cannot be aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncompleteResponses {
    pub expected_total: usize,
    pub actual_total: usize,
    /// One entry per category, in questionnaire order.
    pub categories: Vec<CategoryCompleteness>,
    /// Keys that do not name a known category and question index.
    pub unexpected_keys: Vec<String>,
}

impl IncompleteResponses {
    /// Categories that are missing at least one answer.
    pub fn incomplete_categories(&self) -> impl Iterator<Item = &CategoryCompleteness> {
        self.categories.iter().filter(|c| !c.is_complete())
    }

    /// All missing keys across categories.
    pub fn missing_keys(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.missing_keys.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for IncompleteResponses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Incomplete responses: expected {} answers, got {}",
            self.expected_total, self.actual_total
        )?;

        for category in self.incomplete_categories() {
            write!(
                f,
                "; {} has {}/{} (missing: {})",
                category.category,
                category.actual,
                category.expected,
                category.missing_keys.join(", ")
            )?;
        }

        if !self.unexpected_keys.is_empty() {
            write!(f, "; unexpected keys: {}", self.unexpected_keys.join(", "))?;
        }

        Ok(())
    }
}

//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),

    #[error("Rule base path must end in .yaml, .yml or .json: {0}")]
    UnsupportedRuleBaseFormat(String),
}

//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FUZZY_DIAGNOSIS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use fuzzy_diagnosis::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod engine;
mod error;
mod server;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Diagnosis engine configuration (rule base source)
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FUZZY_DIAGNOSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    /// 5. Validates the result
    ///
    /// # Environment Variable Format
    ///
    /// - `FUZZY_DIAGNOSIS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FUZZY_DIAGNOSIS__ENGINE__RULE_BASE_PATH=rules.yaml` -> `engine.rule_base_path = "rules.yaml"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if values cannot be parsed into expected
    /// types, or `ConfigError::ValidationFailed` if a parsed value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FUZZY_DIAGNOSIS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.engine.validate()?;
        Ok(())
    }
}

//! Diagnosis engine configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Rule base file replacing the embedded standard rules
    pub rule_base_path: Option<String>,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.rule_base_path {
            let supported = matches!(
                Path::new(path).extension().and_then(|ext| ext.to_str()),
                Some("yaml") | Some("yml") | Some("json")
            );
            if !supported {
                return Err(ValidationError::UnsupportedRuleBaseFormat(path.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_embedded_rules() {
        let config = EngineConfig::default();
        assert!(config.rule_base_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_accepts_yaml_and_json_paths() {
        for path in ["rules.yaml", "rules.yml", "/etc/rules.json"] {
            let config = EngineConfig {
                rule_base_path: Some(path.to_string()),
            };
            assert!(config.validate().is_ok(), "{} should be accepted", path);
        }
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let config = EngineConfig {
            rule_base_path: Some("rules.toml".to_string()),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnsupportedRuleBaseFormat("rules.toml".to_string()))
        );
    }
}

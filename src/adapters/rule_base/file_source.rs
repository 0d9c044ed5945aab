//! File Rule Base Source - Loads a rule base document from disk.
//!
//! The format is chosen by file extension: `.yaml`/`.yml` or `.json`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::diagnosis::{RuleBase, RuleBaseError};
use crate::ports::RuleBaseSource;

/// Serialization format of a rule base file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleBaseFormat {
    Yaml,
    Json,
}

impl RuleBaseFormat {
    /// Detects the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, RuleBaseError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(RuleBaseFormat::Yaml),
            Some("json") => Ok(RuleBaseFormat::Json),
            _ => Err(RuleBaseError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses and validates a rule base in this format.
    pub fn parse(&self, source: &str) -> Result<RuleBase, RuleBaseError> {
        match self {
            RuleBaseFormat::Yaml => RuleBase::from_yaml_str(source),
            RuleBaseFormat::Json => RuleBase::from_json_str(source),
        }
    }
}

/// Rule base stored in a local file.
///
/// # Usage
///
/// ```rust,ignore
/// let source = FileRuleBaseSource::new("/etc/fuzzy-diagnosis/rules.yaml");
/// let rules = source.load().await?;
/// ```
#[derive(Debug, Clone)]
pub struct FileRuleBaseSource {
    path: PathBuf,
}

impl FileRuleBaseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RuleBaseSource for FileRuleBaseSource {
    async fn load(&self) -> Result<RuleBase, RuleBaseError> {
        let format = RuleBaseFormat::from_path(&self.path)?;

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| RuleBaseError::Unreadable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let rule_base = format.parse(&content)?;

        info!(
            path = %self.path.display(),
            rules = rule_base.len(),
            "Loaded rule base from file"
        );

        Ok(rule_base)
    }

    fn describe(&self) -> String {
        format!("rule base file {}", self.path.display())
    }
}

//! RuleBaseSource port - Interface for obtaining the diagnosis rule base.
//!
//! The engine treats its rules as configuration data. This port lets the
//! host decide where that data comes from (embedded default, a file on
//! disk, a test fixture) without the domain knowing about storage.

use async_trait::async_trait;

use crate::domain::diagnosis::{RuleBase, RuleBaseError};

/// Port for loading a validated rule base.
///
/// Implementations must return a rule base that satisfies every
/// [`RuleBase`] invariant, or the error explaining why it cannot.
///
/// # Example
///
/// ```ignore
/// let source = FileRuleBaseSource::new("config/rules.yaml");
/// let engine = DiagnosisEngine::new(Arc::new(source.load().await?));
/// ```
#[async_trait]
pub trait RuleBaseSource: Send + Sync {
    /// Load and validate the rule base.
    async fn load(&self) -> Result<RuleBase, RuleBaseError>;

    /// Human-readable description of where the rules come from, for logs.
    fn describe(&self) -> String;
}

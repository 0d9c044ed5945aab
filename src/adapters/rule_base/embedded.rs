//! Embedded rule base source.

use async_trait::async_trait;

use crate::domain::diagnosis::{RuleBase, RuleBaseError};
use crate::ports::RuleBaseSource;

/// Serves the standard rule base shipped with the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRuleBaseSource;

#[async_trait]
impl RuleBaseSource for EmbeddedRuleBaseSource {
    async fn load(&self) -> Result<RuleBase, RuleBaseError> {
        Ok(RuleBase::standard().clone())
    }

    fn describe(&self) -> String {
        "embedded standard rule base".to_string()
    }
}

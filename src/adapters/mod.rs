//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API over the diagnosis engine
//! - `rule_base` - Rule base sources (embedded, file)

pub mod http;
pub mod rule_base;

pub use rule_base::{EmbeddedRuleBaseSource, FileRuleBaseSource};

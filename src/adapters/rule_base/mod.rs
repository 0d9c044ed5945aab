//! Rule base adapters - Implementations of `RuleBaseSource`.
//!
//! - `EmbeddedRuleBaseSource` - The standard rule base compiled into the binary
//! - `FileRuleBaseSource` - A YAML or JSON rule base file on disk

mod embedded;
mod file_source;

pub use embedded::EmbeddedRuleBaseSource;
pub use file_source::{FileRuleBaseSource, RuleBaseFormat};

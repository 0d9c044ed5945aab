//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RuleBaseSource` - Where the engine's rule base comes from

mod rule_base_source;

pub use rule_base_source::RuleBaseSource;

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (percentages, validation errors, error codes)
//! - `diagnosis` - Fuzzy inference over questionnaire answers

pub mod diagnosis;
pub mod foundation;

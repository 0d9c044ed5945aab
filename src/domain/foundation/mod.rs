//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! diagnosis domain.

mod errors;
mod percentage;

pub use errors::{ErrorCode, ValidationError};
pub use percentage::Percentage;

//! Core validation types
//!
//! The fundamental building blocks of the crate:
//!
//! - [`Validate`]: the trait implemented by every typed validator
//! - [`ValidationError`]: the structured failure value
//!
//! Typed validators are pure functions from a value to a verdict. Everything
//! context-dependent (rule parameters, sibling fields, localized messages)
//! lives a layer up, in [`registry`](crate::registry) and
//! [`evaluator`](crate::evaluator).

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult = Result<(), ValidationError>;

//! Core trait implemented by every typed validator.

use super::ValidationError;

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// A pure validator: value in, verdict out.
///
/// Typed validators carry no knowledge of fields, forms, or presentation;
/// they are the algorithmic half of the crate, composed into named rules by
/// the [`registry`](crate::registry) layer.
///
/// # Examples
///
/// ```
/// use formcheck::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.len() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::new("too_short", "Answer is too short"))
///         }
///     }
/// }
///
/// let v = MinLength { min: 3 };
/// assert!(v.validate("hello").is_ok());
/// assert!(v.validate("hi").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so validators can work directly on `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns the name of this validator, used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn validate_passes() {
        assert!(AlwaysValid.validate("anything").is_ok());
    }

    #[test]
    fn default_name_is_type_name() {
        assert!(AlwaysValid.name().contains("AlwaysValid"));
    }
}

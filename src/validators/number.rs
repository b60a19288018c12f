//! Numeric format validators.
//!
//! All three are shape checks, not range checks: `Integer` accepts an
//! unsigned digit run, `Float` requires a decimal point with a leading
//! optional minus sign, and `Number` accepts either.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+\.\d+$").unwrap());

// ============================================================================
// INTEGER
// ============================================================================

/// Validates an unsigned integer: one or more digits, nothing else.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Integer;
/// use formcheck::foundation::Validate;
///
/// assert!(Integer.validate("42").is_ok());
/// assert!(Integer.validate("-1").is_err());
/// assert!(Integer.validate("4.2").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer;

impl Validate for Integer {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if INT_RE.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new("bad_int", "Incorrect integer value"))
        }
    }
}

// ============================================================================
// FLOAT
// ============================================================================

/// Validates a decimal number: optional minus, digits, a point, digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float;

impl Validate for Float {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if FLOAT_RE.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new("bad_float", "Incorrect float value"))
        }
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// Accepts what either [`Integer`] or [`Float`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number;

impl Validate for Number {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if INT_RE.is_match(input) || FLOAT_RE.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new("bad_int", "Incorrect integer value"))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_integers() {
        assert!(Integer.validate("0").is_ok());
        assert!(Integer.validate("0042").is_ok());
    }

    #[test]
    fn invalid_integers() {
        assert!(Integer.validate("").is_err());
        assert!(Integer.validate("-1").is_err());
        assert!(Integer.validate("1.5").is_err());
        assert!(Integer.validate("ten").is_err());
    }

    #[test]
    fn valid_floats() {
        assert!(Float.validate("3.14").is_ok());
        assert!(Float.validate("-0.5").is_ok());
    }

    #[test]
    fn invalid_floats() {
        assert!(Float.validate("3").is_err());
        assert!(Float.validate("3.").is_err());
        assert!(Float.validate(".5").is_err());
        assert!(Float.validate("3,14").is_err());
    }

    #[test]
    fn number_accepts_both_shapes() {
        assert!(Number.validate("7").is_ok());
        assert!(Number.validate("-7.5").is_ok());
        assert!(Number.validate("seven").is_err());
    }
}

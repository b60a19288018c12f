//! Custom regular-expression validator.

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PATTERN VALIDATOR
// ============================================================================

/// Validates input against a caller-supplied regular expression.
///
/// The pattern is compiled once at construction; an ill-formed pattern is a
/// construction error, not a validation failure.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Pattern;
/// use formcheck::foundation::Validate;
///
/// let v = Pattern::new("^[a-z]+$").unwrap();
/// assert!(v.validate("abc").is_ok());
/// assert!(v.validate("Abc").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles the pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for Pattern {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.regex.is_match(input) {
            Ok(())
        } else {
            Err(
                ValidationError::new("bad_custom", "You gave an incorrect answer")
                    .with_param("pattern", self.regex.as_str().to_owned()),
            )
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! String length validators.
//!
//! Lengths are measured in characters, not bytes.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LENGTH BOUND
// ============================================================================

/// Which lengths a [`Length`] validator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    Exact(usize),
    Range(usize, usize),
    Min(usize),
    Max(usize),
}

impl LengthBound {
    /// Parses the declarative parameter shapes: `12`, `4-10`, `min8`, `max8`.
    #[must_use]
    pub fn parse(param: &str) -> Option<Self> {
        if let Some(min) = param.strip_prefix("min") {
            return min.parse().ok().map(Self::Min);
        }
        if let Some(max) = param.strip_prefix("max") {
            return max.parse().ok().map(Self::Max);
        }
        if let Some((low, high)) = param.split_once('-') {
            let low = low.parse().ok()?;
            let high = high.parse().ok()?;
            return Some(Self::Range(low, high));
        }
        param.parse().ok().map(Self::Exact)
    }
}

// ============================================================================
// LENGTH VALIDATOR
// ============================================================================

/// Validates string length against a [`LengthBound`].
///
/// # Examples
///
/// ```
/// use formcheck::validators::{Length, LengthBound};
/// use formcheck::foundation::Validate;
///
/// let v = Length::new(LengthBound::Range(4, 10));
/// assert!(v.validate("hello").is_ok());
/// assert!(v.validate("hi").is_err());
/// assert!(v.validate("far too long value").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    bound: LengthBound,
}

impl Length {
    #[must_use]
    pub const fn new(bound: LengthBound) -> Self {
        Self { bound }
    }

    #[must_use]
    pub const fn bound(&self) -> LengthBound {
        self.bound
    }
}

impl Validate for Length {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.chars().count();
        match self.bound {
            LengthBound::Exact(n) if len != n => Err(ValidationError::new(
                "bad_length",
                format!("Answer must be exactly {n} characters"),
            )
            .with_param("expected", n.to_string())
            .with_param("actual", len.to_string())),
            LengthBound::Range(low, _) if len < low => Err(too_short(low, len)),
            LengthBound::Range(_, high) if len > high => Err(too_long(high, len)),
            LengthBound::Min(min) if len < min => Err(too_short(min, len)),
            LengthBound::Max(max) if len > max => Err(too_long(max, len)),
            _ => Ok(()),
        }
    }
}

fn too_short(limit: usize, actual: usize) -> ValidationError {
    ValidationError::new(
        "too_short",
        format!("You have given an answer shorter than {limit} characters"),
    )
    .with_param("limit", limit.to_string())
    .with_param("actual", actual.to_string())
}

fn too_long(limit: usize, actual: usize) -> ValidationError {
    ValidationError::new(
        "too_long",
        format!("You have given an answer longer than {limit} characters"),
    )
    .with_param("limit", limit.to_string())
    .with_param("actual", actual.to_string())
}

/// Creates a [`Length`] validator.
#[must_use]
pub const fn length(bound: LengthBound) -> Length {
    Length::new(bound)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_shapes() {
        assert_eq!(LengthBound::parse("12"), Some(LengthBound::Exact(12)));
        assert_eq!(LengthBound::parse("4-10"), Some(LengthBound::Range(4, 10)));
        assert_eq!(LengthBound::parse("min8"), Some(LengthBound::Min(8)));
        assert_eq!(LengthBound::parse("max8"), Some(LengthBound::Max(8)));
        assert_eq!(LengthBound::parse("soup"), None);
    }

    #[test]
    fn valid_exact() {
        let v = length(LengthBound::Exact(3));
        assert!(v.validate("abc").is_ok());
    }

    #[test]
    fn invalid_exact() {
        let v = length(LengthBound::Exact(3));
        assert!(v.validate("abcd").is_err());
    }

    #[test]
    fn valid_range_edges() {
        let v = length(LengthBound::Range(4, 10));
        assert!(v.validate("abcd").is_ok());
        assert!(v.validate("abcdefghij").is_ok());
    }

    #[test]
    fn invalid_range_reports_direction() {
        let v = length(LengthBound::Range(4, 10));
        assert_eq!(v.validate("ab").unwrap_err().code, "too_short");
        assert_eq!(v.validate("abcdefghijk").unwrap_err().code, "too_long");
    }

    #[test]
    fn valid_min_and_max() {
        assert!(length(LengthBound::Min(2)).validate("ab").is_ok());
        assert!(length(LengthBound::Max(2)).validate("ab").is_ok());
    }

    #[test]
    fn invalid_min_and_max() {
        assert!(length(LengthBound::Min(3)).validate("ab").is_err());
        assert!(length(LengthBound::Max(1)).validate("ab").is_err());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let v = length(LengthBound::Exact(3));
        assert!(v.validate("åäö").is_ok());
    }
}

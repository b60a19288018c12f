//! Phone number validators.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PHONE VALIDATOR
// ============================================================================

/// Validates a loosely formatted phone number.
///
/// At most one `+` (and only as the first character), at most one `-`; with
/// both removed the rest must be more than 8 characters, all digits.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Phone;
/// use formcheck::foundation::Validate;
///
/// let v = Phone;
/// assert!(v.validate("+461234567890").is_ok());
/// assert!(v.validate("08-12345678").is_ok());
/// assert!(v.validate("12+34567890").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone;

impl Phone {
    fn check(input: &str) -> bool {
        let plus_count = input.matches('+').count();
        let hyphen_count = input.matches('-').count();
        if plus_count > 1 || hyphen_count > 1 {
            return false;
        }
        if plus_count == 1 && !input.starts_with('+') {
            return false;
        }
        let digits: String = input.chars().filter(|c| *c != '+' && *c != '-').collect();
        digits.len() > 8 && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if Self::check(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "bad_telephone",
                "You have not given a correct phone number",
            ))
        }
    }
}

// ============================================================================
// SWEDISH MOBILE VALIDATOR
// ============================================================================

/// Validates a Swedish mobile number, domestic (`07x`, 10 digits) or
/// international (`4670`..., 11 digits), layered on top of [`Phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwedishMobile;

impl Validate for SwedishMobile {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let bad = || {
            ValidationError::new(
                "bad_telephone",
                "You have not given a correct phone number",
            )
        };
        Phone.validate(input).map_err(|_| bad())?;

        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        let begin = digits.get(..3).unwrap_or("");

        if digits.len() != 10 && begin != "467" {
            return Err(bad());
        }
        if digits.len() != 11 && begin == "467" {
            return Err(bad());
        }
        let domestic = begin.starts_with("07");
        let international = begin == "467" && digits.get(3..4) == Some("0");
        if domestic || international {
            Ok(())
        } else {
            Err(bad())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

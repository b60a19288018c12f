//! E-mail address validator.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::Domain;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_\.\-])+@(([a-zA-Z0-9\-])+\.)+([a-zA-Z0-9]{2,4})+$").unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates an e-mail address: overall shape by regex, then the part after
/// `@` through the [`Domain`] allow-list check.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Email;
/// use formcheck::foundation::Validate;
///
/// let v = Email;
/// assert!(v.validate("jane.doe@example.com").is_ok());
/// assert!(v.validate("jane@@example.com").is_err());
/// assert!(v.validate("jane@example.invalidtld").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Email;

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let bad = || {
            ValidationError::new("bad_email", "You have not given a correct e-mail address")
        };
        if !EMAIL_RE.is_match(input) {
            return Err(bad());
        }
        let mut parts = input.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(host), None) => Domain.validate(host).map_err(|_| bad()),
            _ => Err(bad()),
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
    fn valid_addresses() {
        assert!(Email.validate("jane@example.com").is_ok());
        assert!(Email.validate("jane.doe-smith_1@mail.example.org").is_ok());
    }

    #[test]
    fn invalid_shape() {
        assert!(Email.validate("").is_err());
        assert!(Email.validate("jane").is_err());
        assert!(Email.validate("jane@").is_err());
        assert!(Email.validate("@example.com").is_err());
        assert!(Email.validate("jane doe@example.com").is_err());
    }

    #[test]
    fn invalid_domain_part() {
        // shape passes, the allow-list check does not
        assert!(Email.validate("jane@example.zzzz").is_err());
        assert!(Email.validate("jane@example.uk").is_err());
    }

    #[test]
    fn valid_uk_second_level_domain() {
        assert!(Email.validate("jane@example.co.uk").is_ok());
    }
}

//! Swedish personal identity number (personnummer) validator.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

static PNR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})(\d{4})$").unwrap());

// ============================================================================
// PERSONNUMMER VALIDATOR
// ============================================================================

/// Validates a twelve-digit `yyyymmddXXXX` personnummer: the date part must
/// name a real calendar day, and the last ten digits must satisfy the Luhn
/// checksum.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Personnummer;
/// use formcheck::foundation::Validate;
///
/// let v = Personnummer;
/// assert!(v.validate("198112189876").is_ok());
/// assert!(v.validate("198112189877").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Personnummer;

impl Personnummer {
    fn check(input: &str) -> bool {
        let Some(captures) = PNR_RE.captures(input) else {
            return false;
        };
        let year: i32 = match captures[1].parse() {
            Ok(y) => y,
            Err(_) => return false,
        };
        let month = strip_zero(&captures[2]);
        let day = strip_zero(&captures[3]);

        let mut months = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        if year % 400 == 0 || (year % 4 == 0 && year % 100 != 0) {
            months[1] = 29;
        }
        if !(1..=12).contains(&month) || day < 1 || day > months[(month - 1) as usize] {
            return false;
        }

        // Luhn over the last ten digits: multiply by 2,1,2,1..., concatenate
        // the products' digits and sum them.
        let mut checksum = 0u32;
        for (i, b) in input.bytes().skip(2).enumerate() {
            let digit = u32::from(b - b'0');
            let product = digit * if i % 2 == 0 { 2 } else { 1 };
            checksum += product / 10 + product % 10;
        }
        checksum % 10 == 0
    }
}

fn strip_zero(digits: &str) -> i32 {
    let digits = digits.strip_prefix('0').unwrap_or(digits);
    digits.parse().unwrap_or(-1)
}

impl Validate for Personnummer {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if Self::check(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "bad_security_number",
                "Your social security number was incorrect",
            ))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

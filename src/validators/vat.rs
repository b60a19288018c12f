//! UK VAT number validator.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// UK VAT VALIDATOR
// ============================================================================

/// Validates a nine-digit UK VAT registration number.
///
/// Non-digits are ignored, so `GB 980 7806 84` and `980780684` are equally
/// acceptable. The first seven digits are weighted 8 down to 2 and summed;
/// the last two digits must match either the traditional modulus-97 check
/// (numbers issued before 2010) or the 9755 variant introduced in November
/// 2009.
///
/// # Examples
///
/// ```
/// use formcheck::validators::UkVat;
/// use formcheck::foundation::Validate;
///
/// let v = UkVat;
/// assert!(v.validate("980780684").is_ok());
/// assert!(v.validate("980780685").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UkVat;

impl UkVat {
    fn check(input: &str) -> bool {
        let digits: Vec<i32> = input
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| i32::from(b - b'0'))
            .collect();
        if digits.len() < 9 {
            return false;
        }

        let check_digits = digits[7] * 10 + digits[8];
        if digits[0] == 0 && digits[1] > 0 {
            return false;
        }

        let mut total: i32 = digits[..7]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (8 - i as i32))
            .sum();

        // traditional scheme: deduct 97 until non-positive
        while total > 0 {
            total -= 97;
        }
        total = total.abs();
        if check_digits == total {
            return true;
        }

        // 9755 scheme, November 2009
        total %= 97;
        if total >= 55 {
            total -= 55;
        } else {
            total += 42;
        }
        total == check_digits
    }
}

impl Validate for UkVat {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if Self::check(input) {
            Ok(())
        } else {
            Err(ValidationError::new("bad_uk_vat", "Incorrect UK VAT Number"))
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
    fn valid_number() {
        assert!(UkVat.validate("980780684").is_ok());
    }

    #[test]
    fn valid_with_formatting() {
        assert!(UkVat.validate("GB 980 7806 84").is_ok());
    }

    #[test]
    fn single_digit_mutations_are_detected() {
        for mutated in [
            "180780684",
            "990780684",
            "981780684",
            "980680684",
            "980790684",
            "980781684",
            "980780584",
            "980780674",
            "980780685",
        ] {
            assert!(
                UkVat.validate(mutated).is_err(),
                "mutation {mutated} slipped through"
            );
        }
    }

    #[test]
    fn post_2009_scheme_is_accepted() {
        // weighted total 249: fails the traditional check but satisfies the
        // modulus-9755 variant
        assert!(UkVat.validate("987780684").is_ok());
    }

    #[test]
    fn invalid_too_short() {
        assert!(UkVat.validate("98078068").is_err());
        assert!(UkVat.validate("").is_err());
    }

    #[test]
    fn invalid_leading_zero_with_nonzero_second() {
        assert!(UkVat.validate("010000000").is_err());
    }
}

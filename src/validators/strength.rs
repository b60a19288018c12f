//! Password strength validator.
//!
//! Scores a password 0..=100 and maps the score to three levels:
//! below 34 is weak (level 0), below 68 is medium (level 1), anything above
//! is strong (level 2). The score rewards length and character variety and
//! penalizes repetition and single-class passwords.

use crate::foundation::{Validate, ValidationError};

/// Symbols counted by the variety bonuses. The comma is part of the set.
const SYMBOLS: &[char] = &['!', ',', '@', '#', '$', '%', '^', '&', '*', '?', '_', '~'];

// ============================================================================
// SCORING
// ============================================================================

/// Scores a password, 0..=100. Anything shorter than four characters is 0.
#[must_use]
pub fn score(password: &str) -> u32 {
    let chars: Vec<char> = password.chars().collect();
    let len = chars.len();
    if len < 4 {
        return 0;
    }

    let mut points = (len * 4) as i32;
    for window in 1..=4 {
        points -= (len - deduplicated_length(&chars, window)) as i32;
    }

    let digits = chars.iter().filter(|c| c.is_ascii_digit()).count();
    let symbols = chars.iter().filter(|c| SYMBOLS.contains(*c)).count();
    let has_lower = chars.iter().any(|c| c.is_ascii_lowercase());
    let has_upper = chars.iter().any(|c| c.is_ascii_uppercase());
    let has_alpha = has_lower || has_upper;

    if digits >= 3 {
        points += 5;
    }
    if symbols >= 2 {
        points += 5;
    }
    if has_lower && has_upper {
        points += 10;
    }
    if has_alpha && digits > 0 {
        points += 15;
    }
    if digits > 0 && symbols > 0 {
        points += 15;
    }
    if has_alpha && symbols > 0 {
        points += 15;
    }
    if chars.iter().all(|c| c.is_ascii_alphanumeric() || *c == '_') {
        points -= 10;
    }

    points.clamp(0, 100) as u32
}

/// The strength level for a password: 0 weak, 1 medium, 2 strong.
#[must_use]
pub fn level(password: &str) -> u8 {
    match score(password) {
        0..34 => 0,
        34..68 => 1,
        _ => 2,
    }
}

// Walks the string counting characters kept after collapsing runs where the
// next `window` characters repeat the previous `window`.
fn deduplicated_length(chars: &[char], window: usize) -> usize {
    let mut kept = 0;
    let mut i = 0;
    while i < chars.len() {
        let mut j = 0;
        let mut repeated = true;
        while j < window && j + i + window < chars.len() {
            repeated = repeated && chars[j + i] == chars[j + i + window];
            j += 1;
        }
        if j < window {
            repeated = false;
        }
        if repeated {
            i += window;
        } else {
            kept += 1;
            i += 1;
        }
    }
    kept
}

// ============================================================================
// STRENGTH VALIDATOR
// ============================================================================

/// Validates that a password reaches a required strength level.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Strength;
/// use formcheck::foundation::Validate;
///
/// let v = Strength::new(2);
/// assert!(v.validate("X9!mQ2@pL5z").is_ok());
/// assert!(v.validate("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    required: u8,
}

impl Strength {
    #[must_use]
    pub const fn new(required: u8) -> Self {
        Self { required }
    }
}

impl Validate for Strength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let actual = level(input);
        if actual >= self.required {
            Ok(())
        } else {
            Err(
                ValidationError::new("bad_strength", "The password isn't strong enough")
                    .with_param("required", self.required.to_string())
                    .with_param("actual", actual.to_string()),
            )
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

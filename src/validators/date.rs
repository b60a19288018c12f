//! Date and time validators.
//!
//! Dates are validated against a format template like `yyyy-mm-dd` or
//! `dd/mm/yyyy`: runs of `y`, `m` and `d` separated by a single divider
//! character. The calendar check is day-per-month aware, including Gregorian
//! leap years.

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{2}):(\d{2})$").unwrap());

// ============================================================================
// DATE PARSING
// ============================================================================

/// Parses `value` against a format template, returning `(year, month, day)`
/// when the value matches the template and names a real calendar date.
///
/// The divider is the first non-alphabetic character of the template; each
/// template part contributes a `\d{n}` group and is mapped to a date unit by
/// its first letter. Numeric parts have a single leading zero stripped before
/// parsing.
#[must_use]
pub fn parse_date(value: &str, format: &str) -> Option<(i32, i32, i32)> {
    let divider = format.chars().find(|c| !c.is_ascii_alphabetic())?;
    let parts: Vec<&str> = format.split(divider).collect();

    let mut pattern = String::from("^");
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            pattern.push_str(&regex::escape(&divider.to_string()));
        }
        pattern.push_str(&format!(r"(\d{{{}}})", part.len()));
    }
    pattern.push('$');
    let re = Regex::new(&pattern).ok()?;
    let captures = re.captures(value)?;

    let unit = |letter: char| -> i32 {
        for (i, part) in parts.iter().enumerate() {
            if part.starts_with(letter) {
                return captures
                    .get(i + 1)
                    .map_or(-1, |m| parse_date_int(m.as_str()));
            }
        }
        -1
    };

    let month = unit('m');
    let day = unit('d');
    let year = unit('y');

    let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
    if (month == 2 && day > 28 && !leap) || (month == 2 && day > 29 && leap) {
        return None;
    }
    if month > 12 || month == 0 {
        return None;
    }
    if (is_short_month(month) && day > 30) || (!is_short_month(month) && day > 31) || day == 0 {
        return None;
    }

    Some((year, month, day))
}

// A single leading zero is stripped before parsing, so "05" reads as 5 and
// "00" as 0.
fn parse_date_int(digits: &str) -> i32 {
    let digits = digits.strip_prefix('0').unwrap_or(digits);
    digits.parse().unwrap_or(-1)
}

// Months with 30 days: April, June, September, November.
fn is_short_month(month: i32) -> bool {
    (month % 2 == 0 && month < 7) || (month % 2 != 0 && month > 7)
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates a date string against a format template.
///
/// # Examples
///
/// ```
/// use formcheck::validators::DateFormat;
/// use formcheck::foundation::Validate;
///
/// let v = DateFormat::new("yyyy-mm-dd");
/// assert!(v.validate("2024-02-29").is_ok());
/// assert!(v.validate("2023-02-29").is_err());
/// assert!(v.validate("2023-04-31").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    format: String,
}

impl DateFormat {
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Validate for DateFormat {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if parse_date(input, &self.format).is_some() {
            Ok(())
        } else {
            Err(
                ValidationError::new("bad_date", "You have not given a correct date")
                    .with_param("format", self.format.clone()),
            )
        }
    }
}

// ============================================================================
// TIME VALIDATOR
// ============================================================================

/// Validates a `HH:MM` time of day. `24:00` is accepted, `24:01` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time;

impl Validate for Time {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let bad = || ValidationError::new("bad_time", "You have not given a correct time");
        let captures = TIME_RE.captures(input).ok_or_else(bad)?;
        let hours: u32 = captures[1].parse().map_err(|_| bad())?;
        let minutes: u32 = captures[2].parse().map_err(|_| bad())?;
        if hours > 24 || minutes > 59 || (hours == 24 && minutes > 0) {
            Err(bad())
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// BIRTHDATE VALIDATOR
// ============================================================================

/// Validates a birthdate: a well-formed date that is not in the future and
/// lies within 123 years of today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthdate {
    format: String,
    today: NaiveDate,
}

impl Birthdate {
    /// Validates against the system clock's idea of today.
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            today: Local::now().date_naive(),
        }
    }

    /// Pins "today", for deterministic checks.
    #[must_use]
    pub fn with_today(format: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            format: format.into(),
            today,
        }
    }
}

impl Validate for Birthdate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let bad = || ValidationError::new("bad_date", "You have not given a correct date");
        let (year, month, day) = parse_date(input, &self.format).ok_or_else(bad)?;

        let this_year = self.today.year();
        let ok = if year == this_year {
            let this_month = self.today.month() as i32;
            if month == this_month {
                day <= self.today.day() as i32
            } else {
                month < this_month
            }
        } else {
            year < this_year && year > this_year - 124
        };
        if ok { Ok(()) } else { Err(bad()) }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_date ---

    #[test]
    fn parses_iso_style_dates() {
        assert_eq!(parse_date("2023-06-15", "yyyy-mm-dd"), Some((2023, 6, 15)));
    }

    #[test]
    fn parses_alternate_templates() {
        assert_eq!(parse_date("15/06/2023", "dd/mm/yyyy"), Some((2023, 6, 15)));
        assert_eq!(parse_date("06.15.2023", "mm.dd.yyyy"), Some((2023, 6, 15)));
    }

    #[test]
    fn leap_year_february() {
        assert_eq!(parse_date("2024-02-29", "yyyy-mm-dd"), Some((2024, 2, 29)));
        assert_eq!(parse_date("2023-02-29", "yyyy-mm-dd"), None);
        // 1900 was not a leap year, 2000 was
        assert_eq!(parse_date("1900-02-29", "yyyy-mm-dd"), None);
        assert_eq!(parse_date("2000-02-29", "yyyy-mm-dd"), Some((2000, 2, 29)));
    }

    #[test]
    fn short_months_cap_at_thirty() {
        assert_eq!(parse_date("2023-04-31", "yyyy-mm-dd"), None);
        assert_eq!(parse_date("2023-04-30", "yyyy-mm-dd"), Some((2023, 4, 30)));
        assert_eq!(parse_date("2023-09-31", "yyyy-mm-dd"), None);
        assert_eq!(parse_date("2023-12-31", "yyyy-mm-dd"), Some((2023, 12, 31)));
    }

    #[test]
    fn month_and_day_bounds() {
        assert_eq!(parse_date("2023-13-01", "yyyy-mm-dd"), None);
        assert_eq!(parse_date("2023-00-10", "yyyy-mm-dd"), None);
        assert_eq!(parse_date("2023-01-00", "yyyy-mm-dd"), None);
        assert_eq!(parse_date("2023-01-32", "yyyy-mm-dd"), None);
    }

    #[test]
    fn template_mismatch() {
        assert_eq!(parse_date("2023-6-15", "yyyy-mm-dd"), None);
        assert_eq!(parse_date("2023/06/15", "yyyy-mm-dd"), None);
        assert_eq!(parse_date("soup", "yyyy-mm-dd"), None);
    }

    // --- Time ---

    #[test]
    fn valid_times() {
        assert!(Time.validate("00:00").is_ok());
        assert!(Time.validate("23:59").is_ok());
        assert!(Time.validate("24:00").is_ok());
    }

    #[test]
    fn invalid_times() {
        assert!(Time.validate("24:01").is_err());
        assert!(Time.validate("25:00").is_err());
        assert!(Time.validate("12:60").is_err());
        assert!(Time.validate("9:30").is_err());
        assert!(Time.validate("12-30").is_err());
    }

    // --- Birthdate ---

    fn pinned() -> Birthdate {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        Birthdate::with_today("yyyy-mm-dd", today)
    }

    #[test]
    fn valid_past_birthdates() {
        let v = pinned();
        assert!(v.validate("1985-11-02").is_ok());
        assert!(v.validate("2026-08-29").is_ok());
        assert!(v.validate("2026-07-31").is_ok());
    }

    #[test]
    fn invalid_future_birthdates() {
        let v = pinned();
        assert!(v.validate("2026-08-30").is_err());
        assert!(v.validate("2026-09-01").is_err());
        assert!(v.validate("2027-01-01").is_err());
    }

    #[test]
    fn invalid_implausibly_old() {
        let v = pinned();
        // 123 years back is fine, 124 is not
        assert!(v.validate("1903-01-01").is_ok());
        assert!(v.validate("1902-12-31").is_err());
    }

    #[test]
    fn invalid_malformed_birthdate() {
        assert!(pinned().validate("1985-02-30").is_err());
    }
}

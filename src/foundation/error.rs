//! Error value produced by failing validators.
//!
//! Validation failures are expected, recoverable outcomes surfaced to the end
//! user, so they are plain values rather than faults. String fields use
//! `Cow<'static, str>` for zero allocation in the common case of static codes
//! and messages.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// The `code` identifies the failure for programmatic handling and doubles as
/// a [`LanguageTable`](crate::language::LanguageTable) key; the `message` is
/// the validator's built-in English default, used when no localized entry and
/// no inline override exist.
///
/// # Examples
///
/// ```
/// use formcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("bad_length", "Answer out of bounds")
///     .with_field("username")
///     .with_param("min", "4");
/// assert_eq!(error.code, "bad_length");
/// assert_eq!(error.param("min"), Some("4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Failure code, e.g. `"bad_email"`, `"required_fields"`.
    pub code: Cow<'static, str>,

    /// Human-readable default message in English.
    pub message: Cow<'static, str>,

    /// Name of the field the failure belongs to, when known.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value pairs describing the failure (typically 0-2 entries).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and default message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required_fields" error.
    pub fn required() -> Self {
        Self::new("required_fields", "You have not answered all required fields")
    }

    /// Creates an "invalid format" error for the given code.
    pub fn invalid_format(code: impl Into<Cow<'static, str>>, expected: &'static str) -> Self {
        Self::new(code, "Value has an invalid format").with_param("expected", expected)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("bad_time", "Not a time");
        assert_eq!(error.code, "bad_time");
        assert_eq!(error.message, "Not a time");
        assert!(error.field.is_none());
    }

    #[test]
    fn error_with_field() {
        let error = ValidationError::required().with_field("email");
        assert_eq!(error.field.as_deref(), Some("email"));
    }

    #[test]
    fn error_params_lookup() {
        let error = ValidationError::new("bad_length", "out of bounds")
            .with_param("min", "4")
            .with_param("max", "10");

        assert_eq!(error.param("min"), Some("4"));
        assert_eq!(error.param("max"), Some("10"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn display_includes_field_and_params() {
        let error = ValidationError::new("bad_length", "out of bounds")
            .with_field("name")
            .with_param("min", "4");
        let rendered = error.to_string();
        assert!(rendered.contains("[name]"));
        assert!(rendered.contains("min=4"));
    }

    #[test]
    fn static_strings_stay_borrowed() {
        let error = ValidationError::new("bad_email", "Not an e-mail");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}

//! Validation configuration and leniency policies.

use thiserror::Error;

// ============================================================================
// POLICIES
// ============================================================================

/// What to do when a rule token names no registered validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRulePolicy {
    /// Log a warning and skip the token.
    #[default]
    Skip,
    /// Abort evaluation with [`ConfigError::UnknownRule`].
    Error,
}

/// What to do when a rule that requires a parameter receives none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingParamPolicy {
    /// Abort evaluation with [`ConfigError::MissingParameter`].
    #[default]
    Fail,
    /// Treat the rule as passing, logging a warning. Legacy fail-open mode.
    Pass,
}

/// Where aggregated error messages should be rendered by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMessagePosition {
    /// One block above the form.
    #[default]
    Top,
    /// Next to each failing element.
    Element,
}

// ============================================================================
// FORM CONFIG
// ============================================================================

/// Knobs for a validation pass.
///
/// The presentation-oriented fields (`error_element_class`,
/// `error_message_position`) are plain data for whatever renders the outcome;
/// the evaluator itself only reads the behavioral ones.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Field names excluded from form-level evaluation.
    pub ignore: Vec<String>,
    /// Attribute holding the declarative rule list.
    pub rule_attribute: String,
    /// Attribute holding a per-field error message override.
    pub error_msg_attribute: String,
    /// CSS class the caller should apply to failing elements.
    pub error_element_class: String,
    /// Placement of rendered error messages.
    pub error_message_position: ErrorMessagePosition,
    /// Default date format template, e.g. `yyyy-mm-dd`.
    pub date_format: String,
    /// Fallback endpoint for backend-checked fields.
    pub backend_url: Option<String>,
    /// Unknown rule-name handling.
    pub unknown_rule: UnknownRulePolicy,
    /// Missing required-parameter handling.
    pub missing_parameter: MissingParamPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            rule_attribute: "data-validation".to_owned(),
            error_msg_attribute: "data-validation-error-msg".to_owned(),
            error_element_class: "error".to_owned(),
            error_message_position: ErrorMessagePosition::Top,
            date_format: "yyyy-mm-dd".to_owned(),
            backend_url: None,
            unknown_rule: UnknownRulePolicy::default(),
            missing_parameter: MissingParamPolicy::default(),
        }
    }
}

impl FormConfig {
    /// Adds a field name to the ignore list.
    #[must_use = "builder methods must be chained or built"]
    pub fn ignoring(mut self, field: impl Into<String>) -> Self {
        self.ignore.push(field.into());
        self
    }

    /// Sets the default date format template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets the fallback backend endpoint.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }
}

// ============================================================================
// CONFIG ERRORS
// ============================================================================

/// Faults in how validation was set up, as opposed to invalid user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A rule token named no registered validator under the strict policy.
    #[error("unknown validation rule `{0}`")]
    UnknownRule(String),

    /// A rule that requires an embedded parameter received none.
    #[error("rule `{rule}` on field `{field}` requires a parameter")]
    MissingParameter { rule: String, field: String },

    /// A rule parameter was present but unusable.
    #[error("rule `{rule}` on field `{field}` has an invalid parameter `{param}`")]
    InvalidParameter {
        rule: String,
        field: String,
        param: String,
    },

    /// A backend-checked field has no endpoint, neither on the field nor in
    /// the configuration.
    #[error("field `{0}` uses backend validation but no endpoint is configured")]
    MissingBackendUrl(String),

    /// The declarative rule list could not be parsed.
    #[error("field `{field}`: {source}")]
    BadRuleList {
        field: String,
        #[source]
        source: crate::parse::RuleParseError,
    },
}

// ============================================================================
// TESTS
// ============================================================================

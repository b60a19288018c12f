//! Date and time rules beyond the plain `date` check.

use crate::config::ConfigError;
use crate::foundation::Validate;
use crate::registry::{Rule, RuleCheck, RuleContext};
use crate::validators::{Birthdate, Time};

/// `time`: `HH:MM` time of day.
pub struct TimeRule;

impl Rule for TimeRule {
    fn name(&self) -> &'static str {
        "time"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_time")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        match Time.validate(value) {
            Ok(()) => Ok(RuleCheck::Pass),
            Err(err) => Ok(RuleCheck::Fail(err)),
        }
    }
}

/// `birthdate`: a plausible date of birth, using the field's format when it
/// has one.
pub struct BirthdateRule;

impl Rule for BirthdateRule {
    fn name(&self) -> &'static str {
        "birthdate"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_date")
    }

    fn check(&self, value: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        let format = ctx
            .field
            .date_format
            .as_deref()
            .unwrap_or(&ctx.config.date_format);
        match Birthdate::new(format).validate(value) {
            Ok(()) => Ok(RuleCheck::Pass),
            Err(err) => Ok(RuleCheck::Fail(err)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

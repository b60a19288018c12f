//! Security-oriented rules: spam questions, double entry and password
//! strength.

use crate::config::ConfigError;
use crate::foundation::{Validate, ValidationError};
use crate::registry::{Rule, RuleCheck, RuleContext};
use crate::validators::Strength;

/// `spamcheck-<answer>`: the value must equal the embedded answer.
pub struct SpamcheckRule;

impl Rule for SpamcheckRule {
    fn name(&self) -> &'static str {
        "spamcheck"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_security_answer")
    }

    fn check(&self, value: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        let Some(answer) = ctx.required_param("spamcheck")? else {
            return Ok(RuleCheck::Pass);
        };
        if value == answer {
            Ok(RuleCheck::Pass)
        } else {
            Ok(RuleCheck::Fail(ValidationError::new(
                "bad_security_answer",
                "You have not given a correct answer to the security question",
            )))
        }
    }
}

/// `confirmation`: the value must equal the sibling field named
/// `<name>_confirmation`. A missing sibling compares as the empty string.
pub struct ConfirmationRule;

impl Rule for ConfirmationRule {
    fn name(&self) -> &'static str {
        "confirmation"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("not_confirmed")
    }

    fn check(&self, value: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        let sibling = format!("{}_confirmation", ctx.field.name);
        if value == ctx.form.value_of(&sibling) {
            Ok(RuleCheck::Pass)
        } else {
            Ok(RuleCheck::Fail(ValidationError::new(
                "not_confirmed",
                "Values could not be confirmed",
            )))
        }
    }
}

/// `strength<N>`: the password must reach level `N` (0..=2).
pub struct StrengthRule;

impl Rule for StrengthRule {
    fn name(&self) -> &'static str {
        "strength"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_strength")
    }

    fn check(&self, value: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        let Some(param) = ctx.required_param("strength")? else {
            return Ok(RuleCheck::Pass);
        };
        let required: u8 = param.parse().map_err(|_| ConfigError::InvalidParameter {
            rule: "strength".to_owned(),
            field: ctx.field.name.clone(),
            param: param.to_owned(),
        })?;
        match Strength::new(required).validate(value) {
            Ok(()) => Ok(RuleCheck::Pass),
            Err(err) => Ok(RuleCheck::Fail(err)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

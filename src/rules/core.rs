//! The core rule set: presence, formats, lengths and custom patterns.

use crate::config::ConfigError;
use crate::field::FieldKind;
use crate::foundation::{Validate, ValidationError};
use crate::registry::{Rule, RuleCheck, RuleContext};
use crate::validators::{
    DateFormat, Domain, Email, Float, Integer, Length, LengthBound, Number, Pattern, Phone, Url,
};

// Wraps a typed validator's verdict for rules whose message comes straight
// from the language table.
fn verdict(result: Result<(), ValidationError>) -> RuleCheck {
    match result {
        Ok(()) => RuleCheck::Pass,
        Err(err) => RuleCheck::Fail(err),
    }
}

// ============================================================================
// PRESENCE
// ============================================================================

/// `required`: the trimmed value must be non-empty. For checkboxes the box
/// itself must be checked.
pub struct Required;

impl Rule for Required {
    fn name(&self) -> &'static str {
        "required"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("required_fields")
    }

    fn check(&self, value: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        let satisfied = match &ctx.field.kind {
            FieldKind::Checkbox { checked } | FieldKind::Radio { checked } => *checked,
            _ => !value.is_empty(),
        };
        if satisfied {
            Ok(RuleCheck::Pass)
        } else {
            Ok(RuleCheck::Fail(ValidationError::required()))
        }
    }
}

// ============================================================================
// FORMAT RULES
// ============================================================================

/// `email`
pub struct EmailRule;

impl Rule for EmailRule {
    fn name(&self) -> &'static str {
        "email"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_email")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        Ok(verdict(Email.validate(value)))
    }
}

/// `domain`
pub struct DomainRule;

impl Rule for DomainRule {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_domain")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        Ok(verdict(Domain.validate(value)))
    }
}

/// `url`
pub struct UrlRule;

impl Rule for UrlRule {
    fn name(&self) -> &'static str {
        "url"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_url")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        Ok(verdict(Url.validate(value)))
    }
}

/// `number`: integer or float.
pub struct NumberRule;

impl Rule for NumberRule {
    fn name(&self) -> &'static str {
        "number"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_int")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        Ok(verdict(Number.validate(value)))
    }
}

/// `int`
pub struct IntRule;

impl Rule for IntRule {
    fn name(&self) -> &'static str {
        "int"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_int")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        Ok(verdict(Integer.validate(value)))
    }
}

/// `float`
pub struct FloatRule;

impl Rule for FloatRule {
    fn name(&self) -> &'static str {
        "float"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_float")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        Ok(verdict(Float.validate(value)))
    }
}

/// `phone`
pub struct PhoneRule;

impl Rule for PhoneRule {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_telephone")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        Ok(verdict(Phone.validate(value)))
    }
}

/// `date`: the field's own format wins over the configured default.
pub struct DateRule;

impl Rule for DateRule {
    fn name(&self) -> &'static str {
        "date"
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
        Ok(verdict(DateFormat::new(format).validate(value)))
    }
}

// ============================================================================
// PARAMETERIZED RULES
// ============================================================================

/// `length`: exact (`length12`), range (`length4-10`), `min` or `max`.
/// The failure message is composed from the language fragments.
pub struct LengthRule;

impl Rule for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    fn check(&self, value: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        let Some(param) = ctx.required_param("length")? else {
            return Ok(RuleCheck::Pass);
        };
        let Some(bound) = LengthBound::parse(param) else {
            return Err(ConfigError::InvalidParameter {
                rule: "length".to_owned(),
                field: ctx.field.name.clone(),
                param: param.to_owned(),
            });
        };

        match Length::new(bound).validate(value) {
            Ok(()) => Ok(RuleCheck::Pass),
            Err(err) => {
                let fragment = |key: &str| ctx.language.get(key).unwrap_or_default();
                let message = match err.code.as_ref() {
                    "too_short" => format!(
                        "{}{}{}",
                        fragment("too_short_start"),
                        err.param("limit").unwrap_or_default(),
                        fragment("too_short_end"),
                    ),
                    "too_long" => format!(
                        "{}{}{}",
                        fragment("too_long_start"),
                        err.param("limit").unwrap_or_default(),
                        fragment("too_long_end"),
                    ),
                    _ => format!(
                        "{}{}{}",
                        fragment("bad_length"),
                        param,
                        fragment("too_long_end"),
                    ),
                };
                Ok(RuleCheck::Fail(ValidationError::new(
                    err.code.clone(),
                    message,
                )))
            }
        }
    }
}

/// `regexp/<pattern>/`
pub struct RegexpRule;

impl Rule for RegexpRule {
    fn name(&self) -> &'static str {
        "regexp"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_custom")
    }

    fn check(&self, value: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        let Some(param) = ctx.required_param("regexp")? else {
            return Ok(RuleCheck::Pass);
        };
        let pattern = Pattern::new(param).map_err(|_| ConfigError::InvalidParameter {
            rule: "regexp".to_owned(),
            field: ctx.field.name.clone(),
            param: param.to_owned(),
        })?;
        Ok(verdict(pattern.validate(value)))
    }
}

/// `num_answers<N>`: a multi-select must have at least `N` selected options.
/// The failure message is composed from the language fragments.
pub struct NumAnswersRule;

impl Rule for NumAnswersRule {
    fn name(&self) -> &'static str {
        "num_answers"
    }

    fn check(&self, _: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        let Some(param) = ctx.required_param("num_answers")? else {
            return Ok(RuleCheck::Pass);
        };
        let minimum: usize = param.parse().map_err(|_| ConfigError::InvalidParameter {
            rule: "num_answers".to_owned(),
            field: ctx.field.name.clone(),
            param: param.to_owned(),
        })?;

        let selected = match &ctx.field.kind {
            FieldKind::MultiSelect { selected } => selected.len(),
            _ => usize::from(!ctx.field.value.trim().is_empty()),
        };
        if selected >= minimum {
            Ok(RuleCheck::Pass)
        } else {
            let message = format!(
                "{}{}{}",
                ctx.language.get("bad_num_answers_start").unwrap_or_default(),
                minimum,
                ctx.language.get("bad_num_answers_end").unwrap_or_default(),
            );
            Ok(RuleCheck::Fail(ValidationError::new(
                "bad_num_answers",
                message,
            )))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

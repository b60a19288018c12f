//! Field and form evaluation.
//!
//! Evaluation is a pure pass over descriptor data: rules run in declared
//! order, the first failure decides a field's message, and nothing in the
//! form is mutated, so running the same pass twice yields the same outcome.

use std::collections::HashSet;

use tracing::warn;

use crate::backend::BackendRequest;
use crate::config::{ConfigError, FormConfig, UnknownRulePolicy};
use crate::field::{FieldDescriptor, FieldKind, Form};
use crate::foundation::ValidationError;
use crate::language::LanguageTable;
use crate::parse::{RuleToken, parse_rules};
use crate::registry::{Rule, RuleCheck, RuleContext, ValidatorRegistry};

// ============================================================================
// OUTCOMES
// ============================================================================

/// The verdict for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Valid,
    Invalid {
        message: String,
    },
    /// A backend rule halted evaluation; the caller resolves the request and
    /// evaluates again.
    Pending {
        request: BackendRequest,
    },
}

/// One failing field with its resolved message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: String,
    pub message: String,
}

/// The verdict for a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOutcome {
    /// Failing fields in first-seen order.
    pub failures: Vec<FieldFailure>,
    /// Failure messages, de-duplicated, first-seen order.
    pub messages: Vec<String>,
    /// Backend requests that must be resolved before the form can settle.
    pub pending: Vec<BackendRequest>,
}

impl FormOutcome {
    /// True when nothing failed and nothing is awaiting a backend verdict.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty() && self.pending.is_empty()
    }
}

/// Presentation callback seam. The evaluator reports verdicts per field; what
/// to do with them (class toggling, message placement) is the caller's
/// business.
pub trait ValidationObserver {
    fn on_valid(&mut self, _field: &FieldDescriptor) {}
    fn on_invalid(&mut self, _field: &FieldDescriptor, _message: &str) {}
}

/// An observer that observes nothing.
struct NoopObserver;

impl ValidationObserver for NoopObserver {}

// ============================================================================
// EVALUATOR
// ============================================================================

/// Runs rules from a registry against fields and forms.
///
/// # Examples
///
/// ```
/// use formcheck::evaluator::Evaluator;
/// use formcheck::field::{FieldDescriptor, Form};
///
/// let form = Form::new()
///     .with(FieldDescriptor::text("email", "not-an-address", "required email"));
/// let outcome = Evaluator::with_defaults().evaluate_form(&form).unwrap();
/// assert!(!outcome.is_valid());
/// ```
#[derive(Debug)]
pub struct Evaluator {
    registry: ValidatorRegistry,
    config: FormConfig,
    language: LanguageTable,
}

impl Evaluator {
    #[must_use]
    pub fn new(registry: ValidatorRegistry, config: FormConfig, language: LanguageTable) -> Self {
        Self {
            registry,
            config,
            language,
        }
    }

    /// Built-in rules, default configuration, English messages.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            ValidatorRegistry::with_builtins(),
            FormConfig::default(),
            LanguageTable::default(),
        )
    }

    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Evaluates one field against its declared rules.
    pub fn evaluate_field(
        &self,
        field: &FieldDescriptor,
        form: &Form,
    ) -> Result<FieldOutcome, ConfigError> {
        let tokens = self.parsed_rules(field)?;

        // Multi-selects answer to their selection count alone.
        if matches!(field.kind, FieldKind::MultiSelect { .. }) {
            return self.evaluate_multi_select(field, form, &tokens);
        }

        let value = field.value.trim();
        if value.is_empty() && field.optional {
            return Ok(FieldOutcome::Valid);
        }
        if let Some(gate) = &field.depends_on_checked {
            if !form.is_checked(gate) {
                return Ok(FieldOutcome::Valid);
            }
        }

        for token in &tokens {
            let Some(rule) = self.lookup(&token.name, &field.name)? else {
                continue;
            };
            let ctx = self.context(token, field, form);
            match rule.check(value, &ctx)? {
                RuleCheck::Pass => {}
                RuleCheck::Fail(err) => {
                    return Ok(FieldOutcome::Invalid {
                        message: self.resolve_message(field, rule.as_ref(), &err),
                    });
                }
                RuleCheck::Halt(request) => {
                    return Ok(FieldOutcome::Pending { request });
                }
            }
        }
        Ok(FieldOutcome::Valid)
    }

    /// Evaluates every field of the form, aggregating failures.
    pub fn evaluate_form(&self, form: &Form) -> Result<FormOutcome, ConfigError> {
        self.evaluate_form_observed(form, &mut NoopObserver)
    }

    /// Like [`evaluate_form`](Self::evaluate_form), reporting each field's
    /// verdict to the observer as it settles.
    pub fn evaluate_form_observed(
        &self,
        form: &Form,
        observer: &mut impl ValidationObserver,
    ) -> Result<FormOutcome, ConfigError> {
        let mut outcome = FormOutcome::default();
        let mut seen_groups: HashSet<&str> = HashSet::new();

        for field in form.fields() {
            if field.kind.is_control() || self.config.ignore.iter().any(|n| *n == field.name) {
                continue;
            }

            if matches!(field.kind, FieldKind::Radio { .. }) {
                if !seen_groups.insert(field.name.as_str()) {
                    continue;
                }
                self.evaluate_radio_group(field, form, &mut outcome, observer)?;
                continue;
            }

            match self.evaluate_field(field, form)? {
                FieldOutcome::Valid => observer.on_valid(field),
                FieldOutcome::Invalid { message } => {
                    observer.on_invalid(field, &message);
                    push_failure(&mut outcome, &field.name, message);
                }
                FieldOutcome::Pending { request } => outcome.pending.push(request),
            }
        }
        Ok(outcome)
    }

    // A radio group is satisfied when any member is checked; only the
    // `required` rule is meaningful on it, and it may be declared on any
    // member of the group.
    fn evaluate_radio_group(
        &self,
        field: &FieldDescriptor,
        form: &Form,
        outcome: &mut FormOutcome,
        observer: &mut impl ValidationObserver,
    ) -> Result<(), ConfigError> {
        let mut declaring_member = None;
        for member in form.fields().iter().filter(|f| f.name == field.name) {
            let tokens = self.parsed_rules(member)?;
            if tokens.iter().any(|t| t.name == "required") {
                declaring_member = Some(member);
                break;
            }
        }
        let Some(member) = declaring_member else {
            observer.on_valid(field);
            return Ok(());
        };
        if form.radio_group_checked(&field.name) {
            observer.on_valid(field);
            return Ok(());
        }
        let message = member.inline_error.clone().unwrap_or_else(|| {
            self.language
                .get("required_fields")
                .unwrap_or("You have not answered all required fields")
                .to_owned()
        });
        observer.on_invalid(field, &message);
        push_failure(outcome, &field.name, message);
        Ok(())
    }

    fn evaluate_multi_select(
        &self,
        field: &FieldDescriptor,
        form: &Form,
        tokens: &[RuleToken],
    ) -> Result<FieldOutcome, ConfigError> {
        let Some(token) = tokens.iter().find(|t| t.name == "num_answers") else {
            return Ok(FieldOutcome::Valid);
        };
        let Some(rule) = self.lookup(&token.name, &field.name)? else {
            return Ok(FieldOutcome::Valid);
        };
        let ctx = self.context(token, field, form);
        match rule.check(&field.value, &ctx)? {
            RuleCheck::Fail(err) => Ok(FieldOutcome::Invalid {
                message: self.resolve_message(field, rule.as_ref(), &err),
            }),
            _ => Ok(FieldOutcome::Valid),
        }
    }

    fn parsed_rules(&self, field: &FieldDescriptor) -> Result<Vec<RuleToken>, ConfigError> {
        match &field.rules {
            Some(raw) => parse_rules(raw).map_err(|source| ConfigError::BadRuleList {
                field: field.name.clone(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn lookup(
        &self,
        name: &str,
        field: &str,
    ) -> Result<Option<&std::sync::Arc<dyn Rule>>, ConfigError> {
        match self.registry.get(name) {
            Some(rule) => Ok(Some(rule)),
            None => match self.config.unknown_rule {
                UnknownRulePolicy::Skip => {
                    warn!(rule = name, field, "skipping unknown validation rule");
                    Ok(None)
                }
                UnknownRulePolicy::Error => Err(ConfigError::UnknownRule(name.to_owned())),
            },
        }
    }

    fn context<'a>(
        &'a self,
        token: &'a RuleToken,
        field: &'a FieldDescriptor,
        form: &'a Form,
    ) -> RuleContext<'a> {
        RuleContext {
            param: token.param.as_deref(),
            field,
            form,
            config: &self.config,
            language: &self.language,
        }
    }

    // Inline override, then the language table under the rule's message key,
    // then whatever the error itself says.
    fn resolve_message(
        &self,
        field: &FieldDescriptor,
        rule: &dyn Rule,
        err: &ValidationError,
    ) -> String {
        if let Some(inline) = &field.inline_error {
            return inline.clone();
        }
        if let Some(key) = rule.message_key() {
            if let Some(message) = self.language.get(key) {
                return message.to_owned();
            }
        }
        err.message.clone().into_owned()
    }
}

fn push_failure(outcome: &mut FormOutcome, field: &str, message: String) {
    if !outcome.messages.contains(&message) {
        outcome.messages.push(message.clone());
    }
    outcome.failures.push(FieldFailure {
        field: field.to_owned(),
        message,
    });
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_field_passes_all_rules() {
        let form = Form::new().with(FieldDescriptor::text(
            "email",
            "jane@example.com",
            "required email",
        ));
        let evaluator = Evaluator::with_defaults();
        let field = form.field("email").unwrap();
        assert_eq!(
            evaluator.evaluate_field(field, &form).unwrap(),
            FieldOutcome::Valid
        );
    }

    #[test]
    fn value_is_trimmed_before_rules_run() {
        let form = Form::new().with(FieldDescriptor::text(
            "email",
            "  jane@example.com  ",
            "email",
        ));
        let evaluator = Evaluator::with_defaults();
        let field = form.field("email").unwrap();
        assert_eq!(
            evaluator.evaluate_field(field, &form).unwrap(),
            FieldOutcome::Valid
        );
    }

    #[test]
    fn optional_empty_field_is_valid() {
        let form = Form::new().with(FieldDescriptor::text("email", "   ", "email").optional());
        let evaluator = Evaluator::with_defaults();
        let field = form.field("email").unwrap();
        assert_eq!(
            evaluator.evaluate_field(field, &form).unwrap(),
            FieldOutcome::Valid
        );
    }

    #[test]
    fn unchecked_gate_skips_validation() {
        let form = Form::new()
            .with(FieldDescriptor::checkbox("subscribe", false))
            .with(FieldDescriptor::text("email", "junk", "email").if_checked("subscribe"));
        let evaluator = Evaluator::with_defaults();
        let field = form.field("email").unwrap();
        assert_eq!(
            evaluator.evaluate_field(field, &form).unwrap(),
            FieldOutcome::Valid
        );
    }

    #[test]
    fn checked_gate_validates_normally() {
        let form = Form::new()
            .with(FieldDescriptor::checkbox("subscribe", true))
            .with(FieldDescriptor::text("email", "junk", "email").if_checked("subscribe"));
        let evaluator = Evaluator::with_defaults();
        let field = form.field("email").unwrap();
        assert!(matches!(
            evaluator.evaluate_field(field, &form).unwrap(),
            FieldOutcome::Invalid { .. }
        ));
    }

    #[test]
    fn unknown_rule_error_policy() {
        let config = FormConfig {
            unknown_rule: UnknownRulePolicy::Error,
            ..FormConfig::default()
        };
        let evaluator = Evaluator::new(
            ValidatorRegistry::with_builtins(),
            config,
            LanguageTable::default(),
        );
        let form = Form::new().with(FieldDescriptor::text("f", "x", "telelphone"));
        let field = form.field("f").unwrap();
        assert_eq!(
            evaluator.evaluate_field(field, &form),
            Err(ConfigError::UnknownRule("telelphone".to_owned()))
        );
    }

    #[test]
    fn unknown_rule_skip_policy_continues() {
        let evaluator = Evaluator::with_defaults();
        let form = Form::new().with(FieldDescriptor::text("f", "x", "telelphone required"));
        let field = form.field("f").unwrap();
        assert_eq!(
            evaluator.evaluate_field(field, &form).unwrap(),
            FieldOutcome::Valid
        );
    }
}

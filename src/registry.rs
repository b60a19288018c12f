//! Named rule registry.
//!
//! Rules are the registry-facing layer: string-named, parameterized wrappers
//! around the typed validators, with access to the surrounding form for the
//! checks that need a sibling (confirmation) or the whole selection
//! (num_answers). The registry maps rule names to [`Rule`] implementations;
//! the evaluator looks names up as it walks a field's parsed rule list.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::BackendRequest;
use crate::config::{ConfigError, FormConfig, MissingParamPolicy};
use crate::field::{FieldDescriptor, Form};
use crate::foundation::ValidationError;
use crate::language::LanguageTable;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// Outcome of a single rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCheck {
    Pass,
    Fail(ValidationError),
    /// The rule needs a backend round-trip before it can answer.
    Halt(BackendRequest),
}

/// Everything a rule may consult besides the value itself.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The token's embedded parameter, e.g. `"4-10"` in `length4-10`.
    pub param: Option<&'a str>,
    pub field: &'a FieldDescriptor,
    pub form: &'a Form,
    pub config: &'a FormConfig,
    pub language: &'a LanguageTable,
}

impl RuleContext<'_> {
    /// The parameter for a rule that cannot run without one.
    ///
    /// Under [`MissingParamPolicy::Fail`] an absent parameter is a
    /// [`ConfigError`]; under the legacy fail-open policy it yields `None`,
    /// which callers treat as an unconditional pass.
    pub fn required_param(&self, rule: &'static str) -> Result<Option<&str>, ConfigError> {
        match self.param {
            Some(param) => Ok(Some(param)),
            None => match self.config.missing_parameter {
                MissingParamPolicy::Fail => Err(ConfigError::MissingParameter {
                    rule: rule.to_owned(),
                    field: self.field.name.clone(),
                }),
                MissingParamPolicy::Pass => {
                    warn!(
                        rule,
                        field = %self.field.name,
                        "rule is missing its parameter, passing the field through"
                    );
                    Ok(None)
                }
            },
        }
    }
}

/// A named, registry-facing validation rule.
pub trait Rule: Send + Sync {
    /// The name rule tokens refer to, e.g. `"email"`.
    fn name(&self) -> &'static str;

    /// Language-table key used to localize this rule's failure message.
    /// `None` for rules that compose their message dynamically.
    fn message_key(&self) -> Option<&'static str> {
        None
    }

    /// Checks a trimmed value.
    fn check(&self, value: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError>;
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Maps rule names to implementations.
///
/// Registration is last-wins, so a caller can shadow a built-in rule with a
/// custom one under the same name.
///
/// # Examples
///
/// ```
/// use formcheck::registry::ValidatorRegistry;
///
/// let registry = ValidatorRegistry::with_builtins();
/// assert!(registry.get("email").is_some());
/// assert!(registry.get("levitation").is_none());
/// ```
#[derive(Clone)]
pub struct ValidatorRegistry {
    rules: HashMap<String, Arc<dyn Rule>>,
}

impl Default for ValidatorRegistry {
    /// The built-in rule set, same as [`ValidatorRegistry::with_builtins`].
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ValidatorRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// A registry holding the full built-in rule set.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::rules::register_builtins(&mut registry);
        debug!(rules = registry.len(), "registered built-in validation rules");
        registry
    }

    /// Registers a rule under its own name, replacing any previous holder.
    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        let name = rule.name();
        if self.rules.insert(name.to_owned(), rule).is_some() {
            debug!(rule = name, "replaced an existing validation rule");
        } else {
            debug!(rule = name, "registered validation rule");
        }
    }

    /// Looks a rule up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Rule>> {
        self.rules.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered rule names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("ValidatorRegistry")
            .field("rules", &names)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! The `backend` rule: server-side verification of a single value.

use crate::backend::{BackendRequest, BackendState};
use crate::config::ConfigError;
use crate::foundation::ValidationError;
use crate::registry::{Rule, RuleCheck, RuleContext};

/// `backend`: passes or fails on the field's cached [`BackendState`]; with no
/// cached verdict it halts evaluation with the request the caller must
/// resolve. A server-sent rejection message wins over the language table.
pub struct BackendRule;

impl Rule for BackendRule {
    fn name(&self) -> &'static str {
        "backend"
    }

    fn check(&self, value: &str, ctx: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        match &ctx.field.backend_state {
            Some(BackendState::Accepted) => Ok(RuleCheck::Pass),
            Some(BackendState::Rejected { message }) => {
                let message = message
                    .clone()
                    .or_else(|| ctx.language.get("bad_backend").map(str::to_owned))
                    .unwrap_or_else(|| "The value could not be verified".to_owned());
                Ok(RuleCheck::Fail(ValidationError::new("bad_backend", message)))
            }
            None => {
                let endpoint = ctx
                    .field
                    .backend_url
                    .as_deref()
                    .or(ctx.config.backend_url.as_deref())
                    .ok_or_else(|| ConfigError::MissingBackendUrl(ctx.field.name.clone()))?;
                Ok(RuleCheck::Halt(BackendRequest {
                    field: ctx.field.name.clone(),
                    endpoint: endpoint.to_owned(),
                    value: value.to_owned(),
                }))
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

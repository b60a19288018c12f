//! Built-in registry rules, grouped the way the validation modules are
//! shipped: the core set, date/time, security, Swedish and UK helpers, and
//! the asynchronous backend check.

pub mod backend;
pub mod core;
pub mod date;
pub mod security;
pub mod sweden;
pub mod uk;

use std::sync::Arc;

use crate::registry::ValidatorRegistry;

/// Registers every built-in rule.
pub fn register_builtins(registry: &mut ValidatorRegistry) {
    registry.register(Arc::new(core::Required));
    registry.register(Arc::new(core::EmailRule));
    registry.register(Arc::new(core::DomainRule));
    registry.register(Arc::new(core::UrlRule));
    registry.register(Arc::new(core::NumberRule));
    registry.register(Arc::new(core::IntRule));
    registry.register(Arc::new(core::FloatRule));
    registry.register(Arc::new(core::LengthRule));
    registry.register(Arc::new(core::RegexpRule));
    registry.register(Arc::new(core::DateRule));
    registry.register(Arc::new(core::PhoneRule));
    registry.register(Arc::new(core::NumAnswersRule));
    registry.register(Arc::new(date::TimeRule));
    registry.register(Arc::new(date::BirthdateRule));
    registry.register(Arc::new(security::SpamcheckRule));
    registry.register(Arc::new(security::ConfirmationRule));
    registry.register(Arc::new(security::StrengthRule));
    registry.register(Arc::new(sweden::SwedishSecurityNumberRule));
    registry.register(Arc::new(sweden::SwedishMobileRule));
    registry.register(Arc::new(uk::UkVatRule));
    registry.register(Arc::new(backend::BackendRule));
}

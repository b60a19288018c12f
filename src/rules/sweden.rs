//! Rules commonly needed on Swedish sites.

use crate::config::ConfigError;
use crate::foundation::Validate;
use crate::registry::{Rule, RuleCheck, RuleContext};
use crate::validators::{Personnummer, SwedishMobile};

/// `swesc`: Swedish personal identity number, `yyyymmddXXXX`.
pub struct SwedishSecurityNumberRule;

impl Rule for SwedishSecurityNumberRule {
    fn name(&self) -> &'static str {
        "swesc"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_security_number")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        match Personnummer.validate(value) {
            Ok(()) => Ok(RuleCheck::Pass),
            Err(err) => Ok(RuleCheck::Fail(err)),
        }
    }
}

/// `swemobile`: Swedish mobile number, domestic or `+46` international.
pub struct SwedishMobileRule;

impl Rule for SwedishMobileRule {
    fn name(&self) -> &'static str {
        "swemobile"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_telephone")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        match SwedishMobile.validate(value) {
            Ok(()) => Ok(RuleCheck::Pass),
            Err(err) => Ok(RuleCheck::Fail(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::field::{FieldDescriptor, Form};
    use crate::language::LanguageTable;

    #[test]
    fn swesc_delegates_to_personnummer() {
        let field = FieldDescriptor::text("ssn", "", "swesc");
        let form = Form::new();
        let config = FormConfig::default();
        let language = LanguageTable::default();
        let ctx = RuleContext {
            param: None,
            field: &field,
            form: &form,
            config: &config,
            language: &language,
        };
        assert_eq!(
            SwedishSecurityNumberRule
                .check("198112189876", &ctx)
                .unwrap(),
            RuleCheck::Pass
        );
        assert!(matches!(
            SwedishSecurityNumberRule
                .check("198112189877", &ctx)
                .unwrap(),
            RuleCheck::Fail(_)
        ));
    }
}

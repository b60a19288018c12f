//! Rules for UK-specific formats.

use crate::config::ConfigError;
use crate::foundation::Validate;
use crate::registry::{Rule, RuleCheck, RuleContext};
use crate::validators::UkVat;

/// `ukvatnumber`: nine-digit UK VAT registration number.
pub struct UkVatRule;

impl Rule for UkVatRule {
    fn name(&self) -> &'static str {
        "ukvatnumber"
    }

    fn message_key(&self) -> Option<&'static str> {
        Some("bad_uk_vat")
    }

    fn check(&self, value: &str, _: &RuleContext<'_>) -> Result<RuleCheck, ConfigError> {
        match UkVat.validate(value) {
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
    fn ukvat_delegates() {
        let field = FieldDescriptor::text("vat", "", "ukvatnumber");
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
        assert_eq!(UkVatRule.check("980780684", &ctx).unwrap(), RuleCheck::Pass);
        assert!(matches!(
            UkVatRule.check("123456789", &ctx).unwrap(),
            RuleCheck::Fail(_)
        ));
    }
}

//! One-stop import surface.
//!
//! ```
//! use formcheck::prelude::*;
//!
//! let form = Form::new().with(FieldDescriptor::text("email", "jane@example.com", "required email"));
//! assert!(Evaluator::with_defaults().evaluate_form(&form).unwrap().is_valid());
//! ```

pub use crate::backend::{
    BackendError, BackendRequest, BackendResponse, BackendState, BackendTransport,
    resolve_backend,
};
pub use crate::config::{
    ConfigError, ErrorMessagePosition, FormConfig, MissingParamPolicy, UnknownRulePolicy,
};
pub use crate::evaluator::{
    Evaluator, FieldFailure, FieldOutcome, FormOutcome, ValidationObserver,
};
pub use crate::field::{FieldDescriptor, FieldKind, Form};
pub use crate::foundation::{Validate, ValidationError, ValidationResult};
pub use crate::language::LanguageTable;
pub use crate::parse::{RuleParseError, RuleToken, parse_rules};
pub use crate::registry::{Rule, RuleCheck, RuleContext, ValidatorRegistry};

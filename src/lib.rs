//! # formcheck
//!
//! Declarative form validation: fields carry a rule attribute like
//! `"required email"` or `"length4-10"`, a registry maps rule names to
//! validators, and an evaluator walks each field's rules in order, stopping
//! at the first failure and aggregating localized messages per form.
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck::prelude::*;
//!
//! let form = Form::new()
//!     .with(FieldDescriptor::text("name", "Ada", "required"))
//!     .with(FieldDescriptor::text("email", "not-an-address", "required email"));
//!
//! let outcome = Evaluator::with_defaults().evaluate_form(&form).unwrap();
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.failures[0].field, "email");
//! ```
//!
//! ## Layers
//!
//! - [`validators`] — pure typed validators implementing [`Validate`](foundation::Validate):
//!   value in, verdict out. Usable on their own.
//! - [`rules`] — the named, parameterized adapters the registry serves, with
//!   access to the surrounding [`Form`](field::Form) for sibling checks.
//! - [`evaluator`] — field and form evaluation with message resolution
//!   against a [`LanguageTable`](language::LanguageTable).
//! - [`backend`] — the one asynchronous rule: server-side verification
//!   through a caller-implemented transport.
//!
//! ## Custom rules
//!
//! Implement [`Rule`](registry::Rule) and register it; registration is
//! last-wins, so built-ins can be shadowed under the same name.

// ValidationError is the fundamental verdict type of every rule check —
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod backend;
pub mod config;
pub mod evaluator;
pub mod field;
pub mod foundation;
pub mod language;
pub mod parse;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod validators;

//! Form and field model.
//!
//! A [`Form`] is an ordered collection of [`FieldDescriptor`]s, a plain-data
//! snapshot of whatever the caller's input surface looks like. The evaluator
//! never mutates it; the one stateful affordance is [`FieldDescriptor::set_value`],
//! which also drops any cached backend verdict.

use std::collections::HashMap;

use crate::backend::BackendState;
use crate::config::FormConfig;

// ============================================================================
// FIELD KIND
// ============================================================================

/// What sort of control a field is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox { checked: bool },
    Radio { checked: bool },
    MultiSelect { selected: Vec<String> },
    Submit,
    Button,
}

impl FieldKind {
    /// True for controls that never carry validatable input.
    #[must_use]
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Submit | Self::Button)
    }

    /// The checked state of a checkbox or radio; false for everything else.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        matches!(
            self,
            Self::Checkbox { checked: true } | Self::Radio { checked: true }
        )
    }
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// One field's name, value and validation metadata.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub value: String,
    pub kind: FieldKind,
    /// Raw rule attribute content, e.g. `"required email"`.
    pub rules: Option<String>,
    /// Empty values pass without running the rules.
    pub optional: bool,
    /// Only validated when the named checkbox/radio is checked.
    pub depends_on_checked: Option<String>,
    /// Per-field error message override.
    pub inline_error: Option<String>,
    /// Per-field date format, overriding the configured one.
    pub date_format: Option<String>,
    /// Per-field backend endpoint.
    pub backend_url: Option<String>,
    /// Cached verdict of the last backend round-trip.
    pub backend_state: Option<BackendState>,
}

impl FieldDescriptor {
    /// A text field with a value and a rule list.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>, rules: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: FieldKind::Text,
            rules: Some(rules.into()),
            optional: false,
            depends_on_checked: None,
            inline_error: None,
            date_format: None,
            backend_url: None,
            backend_state: None,
        }
    }

    /// A text field with no rules attached.
    #[must_use]
    pub fn plain(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: FieldKind::Text,
            rules: None,
            optional: false,
            depends_on_checked: None,
            inline_error: None,
            date_format: None,
            backend_url: None,
            backend_state: None,
        }
    }

    /// A checkbox field.
    #[must_use]
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        let mut field = Self::plain(name, "");
        field.kind = FieldKind::Checkbox { checked };
        field
    }

    /// A member of a radio group. All members share the group name.
    #[must_use]
    pub fn radio(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        let mut field = Self::plain(name, value);
        field.kind = FieldKind::Radio { checked };
        field
    }

    /// A multi-select field with the currently selected options.
    #[must_use]
    pub fn multi_select(
        name: impl Into<String>,
        selected: Vec<String>,
        rules: impl Into<String>,
    ) -> Self {
        let mut field = Self::text(name, "", rules);
        field.kind = FieldKind::MultiSelect { selected };
        field
    }

    /// Marks the field optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Only validate when the named checkbox/radio is checked.
    #[must_use = "builder methods must be chained or built"]
    pub fn if_checked(mut self, other: impl Into<String>) -> Self {
        self.depends_on_checked = Some(other.into());
        self
    }

    /// Sets a per-field error message override.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_inline_error(mut self, message: impl Into<String>) -> Self {
        self.inline_error = Some(message.into());
        self
    }

    /// Sets a per-field date format.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Sets a per-field backend endpoint.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Replaces the value and invalidates any cached backend verdict.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.backend_state = None;
    }

    /// Builds a descriptor from a declarative attribute map, using the
    /// attribute names the configuration knows about.
    #[must_use]
    pub fn from_attributes(
        name: impl Into<String>,
        value: impl Into<String>,
        attrs: &HashMap<String, String>,
        config: &FormConfig,
    ) -> Self {
        let mut field = Self::plain(name, value);
        field.rules = attrs.get(config.rule_attribute.as_str()).cloned();
        field.inline_error = attrs.get(config.error_msg_attribute.as_str()).cloned();
        field.optional = attrs
            .get("data-validation-optional")
            .is_some_and(|v| v == "true");
        field.depends_on_checked = attrs.get("data-validation-if-checked").cloned();
        field.date_format = attrs.get("data-format").cloned();
        field.backend_url = attrs.get("data-backend-url").cloned();
        field
    }
}

// ============================================================================
// FORM
// ============================================================================

/// An ordered snapshot of fields.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<FieldDescriptor>,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, preserving declaration order.
    pub fn push(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Builder-style [`push`](Self::push).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: FieldDescriptor) -> Self {
        self.push(field);
        self
    }

    /// The fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Mutable access, for edits between validation passes.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// The first field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The value of the named field, or `""` when absent.
    #[must_use]
    pub fn value_of(&self, name: &str) -> &str {
        self.field(name).map_or("", |f| f.value.as_str())
    }

    /// Whether the named checkbox/radio is checked. Unknown names are not
    /// checked.
    #[must_use]
    pub fn is_checked(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.kind.is_checked())
    }

    /// Whether any member of the named radio group is checked.
    #[must_use]
    pub fn radio_group_checked(&self, group: &str) -> bool {
        self.fields
            .iter()
            .filter(|f| f.name == group)
            .any(|f| f.kind.is_checked())
    }
}

impl FromIterator<FieldDescriptor> for Form {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_clears_backend_cache() {
        let mut field = FieldDescriptor::text("email", "a@example.com", "backend");
        field.backend_state = Some(BackendState::Accepted);

        field.set_value("b@example.com");

        assert_eq!(field.value, "b@example.com");
        assert!(field.backend_state.is_none());
    }

    #[test]
    fn form_lookups() {
        let form = Form::new()
            .with(FieldDescriptor::text("name", "Ada", "required"))
            .with(FieldDescriptor::checkbox("terms", true))
            .with(FieldDescriptor::radio("color", "red", false))
            .with(FieldDescriptor::radio("color", "blue", true));

        assert_eq!(form.value_of("name"), "Ada");
        assert_eq!(form.value_of("missing"), "");
        assert!(form.is_checked("terms"));
        assert!(!form.is_checked("name"));
        assert!(form.radio_group_checked("color"));
        assert!(!form.radio_group_checked("size"));
    }

    #[test]
    fn from_attributes_reads_configured_names() {
        let config = FormConfig::default();
        let mut attrs = HashMap::new();
        attrs.insert("data-validation".to_owned(), "required email".to_owned());
        attrs.insert(
            "data-validation-error-msg".to_owned(),
            "Please enter your e-mail".to_owned(),
        );
        attrs.insert("data-validation-optional".to_owned(), "true".to_owned());
        attrs.insert("data-format".to_owned(), "dd/mm/yyyy".to_owned());

        let field = FieldDescriptor::from_attributes("email", "", &attrs, &config);

        assert_eq!(field.rules.as_deref(), Some("required email"));
        assert_eq!(field.inline_error.as_deref(), Some("Please enter your e-mail"));
        assert!(field.optional);
        assert_eq!(field.date_format.as_deref(), Some("dd/mm/yyyy"));
        assert!(field.backend_url.is_none());
    }

    #[test]
    fn control_fields_are_flagged() {
        assert!(FieldKind::Submit.is_control());
        assert!(FieldKind::Button.is_control());
        assert!(!FieldKind::Text.is_control());
    }
}

//! Localized error message table.
//!
//! Message resolution during evaluation checks, in order: the field's inline
//! override, this table keyed by the failing rule's message key, then the
//! validator's built-in default. The table is read-only during a validation
//! pass; per-call overrides are applied up front with [`LanguageTable::merge`].

use std::collections::HashMap;

// ============================================================================
// LANGUAGE TABLE
// ============================================================================

/// Mapping from message key to localized string.
///
/// `Default` yields the built-in English table. Keys mirror the failure codes
/// of the built-in rules (`"bad_email"`, `"required_fields"`, ...); a handful
/// of fragment keys (`"too_short_start"`, `"too_short_end"`, ...) exist for
/// rules that compose their message around a parameter.
///
/// # Examples
///
/// ```
/// use formcheck::language::LanguageTable;
///
/// let mut lang = LanguageTable::default();
/// lang.set("bad_email", "Ange en riktig e-postadress");
/// assert_eq!(lang.get("bad_email"), Some("Ange en riktig e-postadress"));
/// assert!(lang.get("required_fields").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct LanguageTable {
    entries: HashMap<String, String>,
}

impl LanguageTable {
    /// Creates an empty table with no entries at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Looks up the message for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or replaces a single entry.
    pub fn set(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(key.into(), message.into());
    }

    /// Merges another table into this one; entries of `overrides` win.
    ///
    /// Models the original per-call language override.
    pub fn merge(&mut self, overrides: &LanguageTable) {
        for (key, message) in &overrides.entries {
            self.entries.insert(key.clone(), message.clone());
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LanguageTable {
    /// The built-in English dialogs.
    fn default() -> Self {
        let mut table = Self::empty();
        for (key, message) in [
            ("error_title", "Form submission failed!"),
            ("required_fields", "You have not answered all required fields"),
            ("bad_time", "You have not given a correct time"),
            ("bad_email", "You have not given a correct e-mail address"),
            ("bad_telephone", "You have not given a correct phone number"),
            (
                "bad_security_answer",
                "You have not given a correct answer to the security question",
            ),
            ("bad_date", "You have not given a correct date"),
            ("too_long_start", "You have given an answer longer than "),
            ("too_long_end", " characters"),
            ("too_short_start", "You have given an answer shorter than "),
            ("too_short_end", " characters"),
            ("bad_length", "You have to give an answer between "),
            ("not_confirmed", "Values could not be confirmed"),
            ("bad_domain", "Incorrect domain value"),
            ("bad_url", "Incorrect url value"),
            ("bad_float", "Incorrect float value"),
            ("bad_custom", "You gave an incorrect answer"),
            ("bad_int", "Incorrect integer value"),
            ("bad_security_number", "Your social security number was incorrect"),
            ("bad_uk_vat", "Incorrect UK VAT Number"),
            ("bad_strength", "The password isn't strong enough"),
            ("bad_num_answers_start", "You have to choose at least "),
            ("bad_num_answers_end", " answers"),
            ("bad_backend", "The value could not be verified"),
        ] {
            table.set(key, message);
        }
        table
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_core_dialogs() {
        let lang = LanguageTable::default();
        assert_eq!(
            lang.get("bad_email"),
            Some("You have not given a correct e-mail address")
        );
        assert_eq!(lang.get("bad_uk_vat"), Some("Incorrect UK VAT Number"));
    }

    #[test]
    fn missing_key_is_none() {
        let lang = LanguageTable::default();
        assert_eq!(lang.get("no_such_key"), None);
    }

    #[test]
    fn merge_overrides_win() {
        let mut lang = LanguageTable::default();
        let mut swedish = LanguageTable::empty();
        swedish.set("bad_email", "Felaktig e-postadress");

        lang.merge(&swedish);

        assert_eq!(lang.get("bad_email"), Some("Felaktig e-postadress"));
        // untouched entries survive
        assert_eq!(lang.get("bad_domain"), Some("Incorrect domain value"));
    }

    #[test]
    fn empty_table_is_empty() {
        assert!(LanguageTable::empty().is_empty());
        assert!(!LanguageTable::default().is_empty());
    }
}

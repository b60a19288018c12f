//! Parser for the declarative rule attribute.
//!
//! The attribute value is a whitespace-separated list of rule tokens. A token
//! is a lowercase rule name, optionally followed by an embedded parameter:
//!
//! - `required`, `email` — bare names
//! - `length12`, `length4-10`, `length-min8` — trailing parameter, one
//!   optional leading `-` stripped
//! - `strength2`, `num_answers3`, `spamcheck-paris` — same shape
//! - `regexp/<pattern>/` — pattern between the first and last slash
//!
//! A legacy `validate_` prefix on any token is stripped before parsing.

use thiserror::Error;

// ============================================================================
// TYPES
// ============================================================================

/// One parsed rule token: a validator name plus its optional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleToken {
    pub name: String,
    pub param: Option<String>,
}

impl RuleToken {
    /// A bare token with no parameter.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param: None,
        }
    }

    /// A token with an embedded parameter.
    #[must_use]
    pub fn with_param(name: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param: Some(param.into()),
        }
    }
}

/// Ill-formed rule attribute content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    /// `regexp/...` without a closing slash.
    #[error("unterminated regexp parameter in token `{0}`")]
    UnterminatedRegexp(String),

    /// A token with no leading rule name, e.g. `42` or `-min8`.
    #[error("rule token `{0}` has no rule name")]
    MissingName(String),
}

// ============================================================================
// PARSING
// ============================================================================

/// Parses a raw rule attribute into tokens, preserving declaration order.
///
/// # Examples
///
/// ```
/// use formcheck::parse::{parse_rules, RuleToken};
///
/// let rules = parse_rules("required email length4-10").unwrap();
/// assert_eq!(rules[0], RuleToken::bare("required"));
/// assert_eq!(rules[2], RuleToken::with_param("length", "4-10"));
/// ```
pub fn parse_rules(raw: &str) -> Result<Vec<RuleToken>, RuleParseError> {
    raw.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<RuleToken, RuleParseError> {
    let token = token.strip_prefix("validate_").unwrap_or(token);

    let name_len = token
        .bytes()
        .take_while(|b| b.is_ascii_lowercase() || *b == b'_')
        .count();
    if name_len == 0 {
        return Err(RuleParseError::MissingName(token.to_owned()));
    }
    let (name, rest) = token.split_at(name_len);

    if rest.is_empty() {
        return Ok(RuleToken::bare(name));
    }

    // `regexp/<pattern>/`: everything between the first and last slash, so
    // patterns may themselves contain slashes.
    if let Some(body) = rest.strip_prefix('/') {
        let Some(pattern) = body.strip_suffix('/') else {
            return Err(RuleParseError::UnterminatedRegexp(token.to_owned()));
        };
        return Ok(RuleToken::with_param(name, pattern));
    }

    let param = rest.strip_prefix('-').unwrap_or(rest);
    Ok(RuleToken::with_param(name, param))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_names() {
        let rules = parse_rules("required email url").unwrap();
        assert_eq!(
            rules,
            vec![
                RuleToken::bare("required"),
                RuleToken::bare("email"),
                RuleToken::bare("url"),
            ]
        );
    }

    #[test]
    fn embedded_numeric_params() {
        assert_eq!(
            parse_rules("length12").unwrap(),
            vec![RuleToken::with_param("length", "12")]
        );
        assert_eq!(
            parse_rules("length4-10").unwrap(),
            vec![RuleToken::with_param("length", "4-10")]
        );
        assert_eq!(
            parse_rules("strength2").unwrap(),
            vec![RuleToken::with_param("strength", "2")]
        );
        assert_eq!(
            parse_rules("num_answers3").unwrap(),
            vec![RuleToken::with_param("num_answers", "3")]
        );
    }

    #[test]
    fn leading_dash_is_stripped_once() {
        assert_eq!(
            parse_rules("length-min8").unwrap(),
            vec![RuleToken::with_param("length", "min8")]
        );
        assert_eq!(
            parse_rules("spamcheck-paris").unwrap(),
            vec![RuleToken::with_param("spamcheck", "paris")]
        );
    }

    #[test]
    fn regexp_pattern_between_first_and_last_slash() {
        assert_eq!(
            parse_rules("regexp/^[a-z]+$/").unwrap(),
            vec![RuleToken::with_param("regexp", "^[a-z]+$")]
        );
        // the pattern may contain slashes of its own
        assert_eq!(
            parse_rules("regexp/a/b/").unwrap(),
            vec![RuleToken::with_param("regexp", "a/b")]
        );
    }

    #[test]
    fn unterminated_regexp_is_an_error() {
        assert_eq!(
            parse_rules("regexp/^abc"),
            Err(RuleParseError::UnterminatedRegexp("regexp/^abc".to_owned()))
        );
    }

    #[test]
    fn legacy_prefix_is_stripped() {
        assert_eq!(
            parse_rules("validate_email validate_length12").unwrap(),
            vec![
                RuleToken::bare("email"),
                RuleToken::with_param("length", "12"),
            ]
        );
    }

    #[test]
    fn nameless_token_is_an_error() {
        assert_eq!(
            parse_rules("42"),
            Err(RuleParseError::MissingName("42".to_owned()))
        );
    }

    #[test]
    fn empty_attribute_parses_to_nothing() {
        assert_eq!(parse_rules("").unwrap(), vec![]);
        assert_eq!(parse_rules("   ").unwrap(), vec![]);
    }

    #[test]
    fn order_is_preserved() {
        let rules = parse_rules("length-min8 required email").unwrap();
        assert_eq!(rules[0].name, "length");
        assert_eq!(rules[1].name, "required");
        assert_eq!(rules[2].name, "email");
    }
}

//! URL validator.
//!
//! Shape check by an RFC 3986 style IRI regex (schemes `https`, `http` and
//! `ftp`, IPv4 or registered-name hosts, optional userinfo, port, path, query
//! and fragment, with `[`/`]` additionally allowed in the query for array
//! parameters), then the extracted host goes through the [`Domain`]
//! allow-list check.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::Domain;

// IRI character classes. `UCS` is the private-use-free BMP range the IRI
// grammar admits in reg-names and paths.
const UCS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";
const PCT: &str = r"(%[\da-f]{2})";
const SUB_DELIMS: &str = r"[!\$&'\(\)\*\+,;=]";

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let iunreserved = format!(r"([a-z]|\d|-|\.|_|~|[{UCS}])");
    let ipchar = format!(r"({iunreserved}|{PCT}|{SUB_DELIMS}|:|@)");
    let dec_octet = r"(\d|[1-9]\d|1\d\d|2[0-4]\d|25[0-5])";
    let ipv4 = format!(r"({dec_octet}\.{dec_octet}\.{dec_octet}\.{dec_octet})");
    let label_char = format!(r"([a-z]|\d|[{UCS}])");
    let label = format!(r"({label_char}|({label_char}{iunreserved}*{label_char}))");
    let tld_char = format!(r"([a-z]|[{UCS}])");
    let tld = format!(r"({tld_char}|({tld_char}{iunreserved}*{tld_char}))");
    let userinfo = format!(r"(({iunreserved}|{PCT}|{SUB_DELIMS}|:)*@)");
    let host = format!(r"({ipv4}|({label}\.)+{tld}\.?)");
    let path = format!(r"(/({ipchar}+(/{ipchar}*)*)?)");
    let query_char = format!(r"(([a-z]|\d|\[|\]|-|\.|_|~|[{UCS}])|{PCT}|{SUB_DELIMS}|:|@)");
    let query = format!(r"(\?({query_char}|[\x{{E000}}-\x{{F8FF}}]|/|\?)*)");
    let fragment = format!(r"(\#({ipchar}|/|\?)*)");
    let pattern = format!(
        r"(?i)^(https|http|ftp)://{userinfo}?{host}(:\d*)?{path}?{query}?{fragment}?$"
    );
    Regex::new(&pattern).unwrap()
});

// ============================================================================
// URL VALIDATOR
// ============================================================================

/// Validates an absolute URL.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Url;
/// use formcheck::foundation::Validate;
///
/// let v = Url;
/// assert!(v.validate("https://example.com/path?q=1").is_ok());
/// assert!(v.validate("example.com").is_err());
/// assert!(v.validate("https://example.invalidtld").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Url;

impl Url {
    /// The host part: scheme and `://` stripped, cut at the first slash.
    fn host_of(url: &str) -> &str {
        let lower = url.to_ascii_lowercase();
        let rest = ["https", "http", "ftp"]
            .iter()
            .find_map(|scheme| lower.strip_prefix(scheme).map(|r| &url[url.len() - r.len()..]))
            .unwrap_or(url);
        let rest = rest.strip_prefix("://").unwrap_or(rest);
        rest.split('/').next().unwrap_or(rest)
    }
}

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let bad = || ValidationError::new("bad_url", "Incorrect url value");
        if !URL_RE.is_match(input) {
            return Err(bad());
        }
        Domain.validate(Self::host_of(input)).map_err(|_| bad())
    }
}

// ============================================================================
// TESTS
// ============================================================================

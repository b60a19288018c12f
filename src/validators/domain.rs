//! Domain name validator.
//!
//! Allow-list based: the text after the last dot must be a known top-level
//! domain, with an extra second-level check for `.uk`. The name part is then
//! checked for shape (length of the TLD position, hyphen/dot placement,
//! segment count, character set). Matching is case-sensitive on purpose, so
//! only lowercase input passes.

use crate::foundation::{Validate, ValidationError};

/// Accepted top-level domains, dot included.
const TOP_DOMAINS: &[&str] = &[
    ".com", ".net", ".org", ".biz", ".coop", ".info", ".museum", ".name", ".pro",
    ".edu", ".gov", ".int", ".mil", ".ac", ".ad", ".ae", ".af", ".ag", ".ai", ".al",
    ".am", ".an", ".ao", ".aq", ".ar", ".as", ".at", ".au", ".aw", ".az", ".ba", ".bb",
    ".bd", ".be", ".bf", ".bg", ".bh", ".bi", ".bj", ".bm", ".bn", ".bo", ".br", ".bs",
    ".bt", ".bv", ".bw", ".by", ".bz", ".ca", ".cc", ".cd", ".cf", ".cg", ".ch", ".ci",
    ".ck", ".cl", ".cm", ".cn", ".co", ".cr", ".cu", ".cv", ".cx", ".cy", ".cz", ".de",
    ".dj", ".dk", ".dm", ".do", ".dz", ".ec", ".ee", ".eg", ".eh", ".er", ".es", ".et",
    ".fi", ".fj", ".fk", ".fm", ".fo", ".fr", ".ga", ".gd", ".ge", ".gf", ".gg", ".gh",
    ".gi", ".gl", ".gm", ".gn", ".gp", ".gq", ".gr", ".gs", ".gt", ".gu", ".gv", ".gy",
    ".hk", ".hm", ".hn", ".hr", ".ht", ".hu", ".id", ".ie", ".il", ".im", ".in", ".io",
    ".iq", ".ir", ".is", ".it", ".je", ".jm", ".jo", ".jp", ".ke", ".kg", ".kh", ".ki",
    ".km", ".kn", ".kp", ".kr", ".kw", ".ky", ".kz", ".la", ".lb", ".lc", ".li", ".lk",
    ".lr", ".ls", ".lt", ".lu", ".lv", ".ly", ".ma", ".mc", ".md", ".mg", ".mh", ".mk",
    ".ml", ".mm", ".mn", ".mo", ".mp", ".mq", ".mr", ".ms", ".mt", ".mu", ".mv", ".mw",
    ".mx", ".my", ".mz", ".na", ".nc", ".ne", ".nf", ".ng", ".ni", ".nl", ".no", ".np",
    ".nr", ".nu", ".nz", ".om", ".pa", ".pe", ".pf", ".pg", ".ph", ".pk", ".pl", ".pm",
    ".pn", ".pr", ".ps", ".pt", ".pw", ".py", ".qa", ".re", ".ro", ".rw", ".ru", ".sa",
    ".sb", ".sc", ".sd", ".se", ".sg", ".sh", ".si", ".sj", ".sk", ".sl", ".sm", ".sn",
    ".so", ".sr", ".st", ".sv", ".sy", ".sz", ".tc", ".td", ".tf", ".tg", ".th", ".tj",
    ".tk", ".tm", ".tn", ".to", ".tp", ".tr", ".tt", ".tv", ".tw", ".tz", ".ua", ".ug",
    ".uk", ".um", ".us", ".uy", ".uz", ".va", ".vc", ".ve", ".vg", ".vi", ".vn", ".vu",
    ".ws", ".wf", ".ye", ".yt", ".yu", ".za", ".zm", ".zw", ".me", ".mobi", ".xxx",
];

/// Accepted second-level labels under `.uk`.
const UK_SECOND_LEVEL: &[&str] = &[
    "co", "me", "ac", "gov", "judiciary", "ltd", "mod", "net", "nhs", "nic",
    "org", "parliament", "plc", "police", "sch", "bl", "british-library",
    "jet", "nls",
];

// ============================================================================
// DOMAIN VALIDATOR
// ============================================================================

/// Validates a domain name against the TLD allow-list.
///
/// A leading scheme (`ftp://`, `https://`, `http://`), a `www.` prefix and a
/// single trailing slash are stripped before checking, so a pasted address
/// like `http://www.example.com/` validates as a domain.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Domain;
/// use formcheck::foundation::Validate;
///
/// let v = Domain;
/// assert!(v.validate("example.com").is_ok());
/// assert!(v.validate("example.co.uk").is_ok());
/// assert!(v.validate("example.uk").is_err());
/// assert!(v.validate("-example.com").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain;

impl Domain {
    fn check(input: &str) -> bool {
        let mut val = input.to_owned();
        for prefix in ["ftp://", "https://", "http://", "www."] {
            val = val.replacen(prefix, "", 1);
        }
        if val.ends_with('/') {
            val.truncate(val.len() - 1);
        }

        let Some(dot) = val.rfind('.') else {
            return false;
        };
        let (name, ext) = val.split_at(dot);

        if !TOP_DOMAINS.contains(&ext) {
            return false;
        }
        if ext == ".uk" {
            let labels: Vec<&str> = val.split('.').collect();
            let second = labels.get(labels.len().wrapping_sub(2)).copied();
            if !second.is_some_and(|s| UK_SECOND_LEVEL.contains(&s)) {
                return false;
            }
        }

        // position of the last dot bounds the name part
        if dot < 2 || dot > 57 {
            return false;
        }
        if name.starts_with('-')
            || name.starts_with('.')
            || name.ends_with('-')
            || name.ends_with('.')
        {
            return false;
        }
        if name.split('.').count() > 3 || name.contains("..") {
            return false;
        }
        name.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'-')
    }
}

impl Validate for Domain {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if Self::check(input) {
            Ok(())
        } else {
            Err(ValidationError::new("bad_domain", "Incorrect domain value"))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

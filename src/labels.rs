//! Named normalization steps shared by the rule normalizer and the resolver.
//!
//! Each step is a pure function; callers apply them in a fixed order
//! (sanitize -> optional IDN encode -> label reversal) instead of composing
//! closures at runtime.

use crate::error::{PslError, Result};

/// Trim surrounding whitespace, lower-case, and strip exactly one trailing
/// dot (FQDN marker). Leading dots are preserved: they are significant to the
/// matcher.
pub fn sanitize(domain: &str) -> String {
    let trimmed = domain.trim().to_lowercase();
    match trimmed.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => trimmed,
    }
}

/// Re-encode a domain through the IDN codec into its ASCII-compatible form.
pub fn to_ascii(domain: &str) -> Result<String> {
    idna::domain_to_ascii(domain).map_err(|e| PslError::Encoding {
        input: domain.to_string(),
        message: e.to_string(),
    })
}

/// Flip the label order of a domain, leaving the labels themselves untouched.
///
/// `"example.uk.com"` becomes `"com.uk.example"`. This is what reduces
/// longest-suffix matching to a prefix query over stored keys.
pub fn reverse_labels(domain: &str) -> String {
    let mut labels: Vec<&str> = domain.split('.').collect();
    labels.reverse();
    labels.join(".")
}

/// Whether `key` covers whole labels of the (reversed) `query`: either the
/// strings are equal, or the query continues with a `.` right after the key.
/// Filters out keys that would otherwise match inside a label, e.g. key
/// `"com.u"` against query `"com.uk.example"`.
pub fn label_aligned(query: &str, key: &str) -> bool {
    query.len() == key.len() || query.as_bytes().get(key.len()) == Some(&b'.')
}

use std::path::Path;

use tracing::{debug, trace};

use crate::error::{PslError, Result};
use crate::index::{PrefixSet, SortedPrefixSet};
use crate::labels::{label_aligned, reverse_labels, sanitize, to_ascii};
use crate::parser::{normalize_rules, rules_from_file};
use crate::types::EtldParts;

/// Public suffix resolver.
///
/// Holds an immutable prefix index over normalized match keys. Once built it
/// is read-only and safe to share across threads; refreshing the rule list
/// means building a new instance and swapping the reference, never editing in
/// place.
///
/// Generic over the index backend; the default [`SortedPrefixSet`] suits
/// rule sets the size of the public suffix list.
#[derive(Debug, Clone)]
pub struct PublicSuffixList<S: PrefixSet = SortedPrefixSet> {
    index: S,
}

impl PublicSuffixList<SortedPrefixSet> {
    /// Build a resolver from raw public-suffix-list text.
    ///
    /// With `strict=true` only rules inside the ICANN section are indexed;
    /// private-section rules will not match.
    pub fn from_text(psl_text: &str, strict: bool) -> Result<Self> {
        Ok(Self::from_keys(normalize_rules(psl_text, strict)?))
    }

    /// Build a resolver from a public suffix list stored in a local file.
    pub fn from_file(path: impl AsRef<Path>, strict: bool) -> Result<Self> {
        Ok(Self::from_keys(rules_from_file(path, strict)?))
    }
}

impl<S: PrefixSet> PublicSuffixList<S> {
    /// Build a resolver over a custom index backend from already-normalized
    /// match keys (see [`normalize_rules`]).
    pub fn from_keys(keys: Vec<String>) -> Self {
        let index = S::build(keys);
        debug!(rules = index.len(), "built public suffix index");
        Self { index }
    }

    /// Number of indexed match keys.
    pub fn rule_count(&self) -> usize {
        self.index.len()
    }

    /// Resolve the longest public suffix of `domain`.
    ///
    /// The input is trimmed, lower-cased, and stripped of one trailing dot;
    /// leading dots are kept. With `convert_to_ascii=true` the domain is
    /// re-encoded through the IDN codec before matching, so unicode input can
    /// match punycode rules.
    ///
    /// Returns [`PslError::SuffixNotFound`] when no rule covers the domain —
    /// never a sentinel value.
    pub fn match_suffix(&self, domain: &str, convert_to_ascii: bool) -> Result<String> {
        let mut name = sanitize(domain);
        if convert_to_ascii {
            name = to_ascii(&name)?;
        }

        let reversed = reverse_labels(&name);
        let matched = self
            .index
            .prefixes_of(&reversed)
            .into_iter()
            .rev()
            .find(|key| label_aligned(&reversed, key))
            .ok_or_else(|| PslError::SuffixNotFound(name.clone()))?;

        trace!(domain = %name, suffix = %matched, "matched public suffix");
        Ok(reverse_labels(matched))
    }

    /// Split `domain` into its public suffix, registrable domain, and
    /// subdomain.
    ///
    /// The same normalization as [`match_suffix`](Self::match_suffix) is
    /// applied first, so the `domain` field of the result reflects the
    /// normalized input. Fails whenever `match_suffix` does.
    pub fn decompose(&self, domain: &str, convert_to_ascii: bool) -> Result<EtldParts> {
        let mut name = sanitize(domain);
        if convert_to_ascii {
            name = to_ascii(&name)?;
        }

        let etld = self.match_suffix(&name, false)?;

        // One trailing occurrence of the suffix, then the joining dot
        let head = &name[..name.len() - etld.len()];
        let head = head.strip_suffix('.').unwrap_or(head);
        if head.is_empty() {
            // The domain is the suffix itself (or the suffix behind a bare
            // leading dot): there is no registrable label
            return Ok(EtldParts {
                domain: name,
                etld: etld.clone(),
                etld_plus_one: etld,
                subdomain: String::new(),
            });
        }

        let parts: Vec<&str> = head.split('.').collect();
        let etld_plus_one = format!("{}.{}", parts[parts.len() - 1], etld);
        let subdomain = parts[..parts.len() - 1].join(".");

        Ok(EtldParts {
            domain: name,
            etld,
            etld_plus_one,
            subdomain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn psl() -> PublicSuffixList {
        PublicSuffixList::from_keys(
            ["com", "com.uk", "jp", "jp.ac", "jp.kobe", "er", "biz"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }

    #[test]
    fn test_match_bare_tld() {
        let psl = psl();
        assert_eq!(psl.match_suffix("com", false).unwrap(), "com");
        assert_eq!(psl.match_suffix("COM", false).unwrap(), "com");
        assert_eq!(psl.match_suffix("a.example.com", false).unwrap(), "com");
    }

    #[test]
    fn test_match_leading_dot() {
        let psl = psl();
        assert_eq!(psl.match_suffix(".com", false).unwrap(), "com");
        assert_eq!(psl.match_suffix(".example.com", false).unwrap(), "com");
        assert!(psl.match_suffix(".example", false).is_err());
    }

    #[test]
    fn test_match_trailing_dot_ignored() {
        let psl = psl();
        assert_eq!(psl.match_suffix("example.com.", false).unwrap(), "com");
        assert_eq!(
            psl.match_suffix("example.com", false).unwrap(),
            psl.match_suffix("example.com.", false).unwrap()
        );
    }

    #[test]
    fn test_longest_match_wins() {
        let psl = psl();
        assert_eq!(psl.match_suffix("uk.com", false).unwrap(), "uk.com");
        assert_eq!(psl.match_suffix("example.uk.com", false).unwrap(), "uk.com");
        assert_eq!(psl.match_suffix("test.ac.jp", false).unwrap(), "ac.jp");
    }

    #[test]
    fn test_unlisted_tld_is_not_found() {
        let psl = psl();
        let err = psl.match_suffix("example.example", false).unwrap_err();
        assert!(matches!(err, PslError::SuffixNotFound(_)), "got: {:?}", err);
    }

    #[test]
    fn test_rule_label_must_match_whole_query_label() {
        // "er" must not match inside the label "server"
        let psl = psl();
        assert!(psl.match_suffix("server", false).is_err());
        assert_eq!(psl.match_suffix("a.er", false).unwrap(), "er");
    }

    #[test]
    fn test_decompose_with_subdomain() {
        let psl = psl();
        let parts = psl.decompose("www.example.com", false).unwrap();
        assert_eq!(parts.domain, "www.example.com");
        assert_eq!(parts.etld, "com");
        assert_eq!(parts.etld_plus_one, "example.com");
        assert_eq!(parts.subdomain, "www");
    }

    #[test]
    fn test_decompose_registrable_domain_only() {
        let psl = psl();
        let parts = psl.decompose("example.uk.com", false).unwrap();
        assert_eq!(parts.etld, "uk.com");
        assert_eq!(parts.etld_plus_one, "example.uk.com");
        assert_eq!(parts.subdomain, "");
        assert!(parts.is_registrable());
    }

    #[test]
    fn test_decompose_domain_is_its_own_suffix() {
        let psl = psl();
        let parts = psl.decompose("uk.com", false).unwrap();
        assert_eq!(parts.etld, "uk.com");
        assert_eq!(parts.etld_plus_one, "uk.com");
        assert_eq!(parts.subdomain, "");
    }

    #[test]
    fn test_decompose_round_trip() {
        let psl = psl();
        for domain in ["www.example.com", "a.b.example.uk.com", "x.test.kobe.jp"] {
            let parts = psl.decompose(domain, false).unwrap();
            let rebuilt = if parts.subdomain.is_empty() {
                parts.etld_plus_one.clone()
            } else {
                format!("{}.{}", parts.subdomain, parts.etld_plus_one)
            };
            assert_eq!(rebuilt, parts.domain);
        }
    }

    #[test]
    fn test_decompose_normalizes_input() {
        let psl = psl();
        let parts = psl.decompose("  WwW.Example.COM.  ", false).unwrap();
        assert_eq!(parts.domain, "www.example.com");
        assert_eq!(parts.etld_plus_one, "example.com");
    }
}

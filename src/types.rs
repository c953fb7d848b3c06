use serde::{Deserialize, Serialize};

/// Decomposition of a domain around its public suffix.
///
/// A fresh value is produced per query; nothing is shared with the
/// [`PublicSuffixList`](crate::PublicSuffixList) that built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtldParts {
    /// The normalized input domain (lower-cased, trailing dot removed).
    pub domain: String,
    /// The matched public suffix (effective TLD).
    pub etld: String,
    /// The registrable domain: `etld` plus the one label left of it.
    pub etld_plus_one: String,
    /// Everything left of `etld_plus_one`; empty when the domain is its own
    /// registrable domain.
    pub subdomain: String,
}

impl EtldParts {
    /// True when the domain carries no labels below the registrable domain.
    pub fn is_registrable(&self) -> bool {
        self.subdomain.is_empty()
    }
}

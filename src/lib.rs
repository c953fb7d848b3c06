//! PSL Engine - A high-performance Public Suffix List (eTLD) matching engine for Rust
//!
//! This library resolves the longest matching public suffix of a domain and
//! splits domains into their registrable (eTLD+1) and subdomain parts:
//! - Rule normalization from raw publicsuffix.org list text
//! - Strict mode restricted to the ICANN-curated section
//! - IDN (punycode) rule expansion and query re-encoding
//! - Longest-suffix matching via a prefix query over reversed labels
//! - Pluggable prefix-index backend
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::PublicSuffixList;
//!
//! let psl_text = "
//! // ===BEGIN ICANN DOMAINS===
//! com
//! uk.com
//! jp
//! ac.jp
//! // ===END ICANN DOMAINS===
//! ";
//!
//! let psl = PublicSuffixList::from_text(psl_text, false).unwrap();
//!
//! assert_eq!(psl.match_suffix("www.example.uk.com", false).unwrap(), "uk.com");
//!
//! let parts = psl.decompose("www.example.com", false).unwrap();
//! assert_eq!(parts.etld, "com");
//! assert_eq!(parts.etld_plus_one, "example.com");
//! assert_eq!(parts.subdomain, "www");
//! ```
//!
//! # Rule Handling
//!
//! Rules follow the public suffix list grammar: one rule per line, `//`
//! starts a comment. Wildcard (`*.`) and exception (`!`) rules are indexed
//! as literal keys; wildcard expansion is out of scope.
//!
//! The engine never fetches the list itself; hand it the text (or a local
//! file path) and it builds an immutable index that is safe for concurrent
//! reads. Refreshing the list means constructing a new instance.

pub mod error;
pub mod index;
pub mod labels;
pub mod parser;
pub mod resolver;
pub mod types;

// Re-export commonly used items
pub use error::{PslError, Result};
pub use index::{PrefixSet, SortedPrefixSet};
pub use parser::{normalize_rules, rules_from_file, section_block, ListSection};
pub use resolver::PublicSuffixList;
pub use types::EtldParts;

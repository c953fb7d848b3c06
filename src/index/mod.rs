//! Prefix-query index over normalized match keys.
//!
//! The resolver only needs one operation: given a (reversed) query string,
//! return every stored key that is a prefix of it, shortest first. Any
//! structure that answers that — a sorted array, a hash set of prefixes, a
//! compressed trie — can back a [`PublicSuffixList`](crate::PublicSuffixList).
//!
//! ## Example
//!
//! ```
//! use psl_engine_r::index::{PrefixSet, SortedPrefixSet};
//!
//! let index = SortedPrefixSet::build(vec!["com".into(), "com.uk".into()]);
//! assert_eq!(index.prefixes_of("com.uk.example"), vec!["com", "com.uk"]);
//! ```

mod sorted;

pub use sorted::SortedPrefixSet;

/// String-set index answering prefix queries.
///
/// Implementations are immutable once built and safe for unsynchronized
/// concurrent reads.
pub trait PrefixSet: Send + Sync {
    /// Build the index from match keys. Duplicates are collapsed.
    fn build(keys: Vec<String>) -> Self
    where
        Self: Sized;

    /// Every stored key that is a prefix of `query`, ascending by length.
    fn prefixes_of(&self, query: &str) -> Vec<&str>;

    /// Number of stored keys.
    fn len(&self) -> usize;

    /// Check if the index holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

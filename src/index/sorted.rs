use super::PrefixSet;

/// Sorted-array prefix index.
///
/// Keys live in one sorted, deduplicated `Vec`; a prefix query runs one
/// binary search per label-boundary prefix of the query (keys never end
/// mid-label, so other lengths cannot match). Simple, compact, and fast
/// enough for rule sets the size of the public suffix list.
#[derive(Debug, Clone, Default)]
pub struct SortedPrefixSet {
    keys: Vec<String>,
}

impl PrefixSet for SortedPrefixSet {
    fn build(mut keys: Vec<String>) -> Self {
        keys.sort();
        keys.dedup();
        Self { keys }
    }

    fn prefixes_of(&self, query: &str) -> Vec<&str> {
        let mut matches = Vec::new();
        let boundaries = query
            .match_indices('.')
            .map(|(pos, _)| pos)
            .chain(std::iter::once(query.len()));
        for end in boundaries {
            if end == 0 {
                continue;
            }
            let prefix = &query[..end];
            if let Ok(idx) = self.keys.binary_search_by(|k| k.as_str().cmp(prefix)) {
                matches.push(self.keys[idx].as_str());
            }
        }
        matches
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

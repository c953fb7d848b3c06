use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PslError, Result};
use crate::labels::{reverse_labels, sanitize, to_ascii};

/// Section of the public suffix list, by provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSection {
    /// The ICANN-curated block (strict mode matches only these rules).
    Icann,
    /// Privately contributed rules.
    Private,
}

impl ListSection {
    fn markers(&self) -> (&'static str, &'static str) {
        match self {
            ListSection::Icann => (
                "// ===BEGIN ICANN DOMAINS===",
                "// ===END ICANN DOMAINS===",
            ),
            ListSection::Private => (
                "// ===BEGIN PRIVATE DOMAINS===",
                "// ===END PRIVATE DOMAINS===",
            ),
        }
    }
}

/// Extract the sub-block of `text` delimited by a section's begin/end markers.
pub fn section_block(text: &str, section: ListSection) -> Result<&str> {
    let (begin, end) = section.markers();

    let start = match text.find(begin) {
        Some(pos) => pos + begin.len(),
        None if text.contains(end) => {
            return Err(PslError::MalformedList(format!(
                "end marker '{}' present without its begin marker",
                end
            )))
        }
        None => {
            return Err(PslError::MalformedList(format!(
                "missing section marker '{}'",
                begin
            )))
        }
    };

    let block = &text[start..];
    let stop = block.find(end).ok_or_else(|| {
        PslError::MalformedList(format!(
            "begin marker '{}' present without its end marker",
            begin
        ))
    })?;

    Ok(block[..stop].trim())
}

/// Normalize raw public-suffix-list text into reversed match keys.
///
/// Comment (`//`) and blank lines are dropped. With `strict=true` only rules
/// inside the ICANN block are retained. Each surviving rule is lower-cased;
/// rules with non-ASCII labels additionally emit their IDN (punycode) form
/// when it differs. Every emitted key has its label order reversed so that
/// longest-suffix matching becomes a prefix query.
pub fn normalize_rules(raw_text: &str, strict: bool) -> Result<Vec<String>> {
    let body = if strict {
        section_block(raw_text, ListSection::Icann)?
    } else {
        raw_text
    };

    let mut keys = Vec::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let rule = sanitize(line);
        if !rule.is_ascii() {
            let encoded = to_ascii(&rule)?;
            if encoded != rule {
                keys.push(reverse_labels(&encoded));
            }
        }
        keys.push(reverse_labels(&rule));
    }

    debug!(rules = keys.len(), strict, "normalized suffix list");
    Ok(keys)
}

/// Normalize a public suffix list read from a local file.
pub fn rules_from_file(path: impl AsRef<Path>, strict: bool) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    normalize_rules(&text, strict)
}

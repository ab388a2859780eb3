//! Synonym harvesting from Taiwan change-log entries.

use std::sync::LazyLock;

use regex::Regex;
use torist_model::{SynonymMap, SynonymPair};
use tracing::trace;

use crate::error::SynonymError;

/// `學名：Old name→New name`, anywhere in the entry.
static NAME_CHANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"學名：([A-Za-z ]+)→([A-Za-z ]+)").expect("Invalid name change regex")
});

/// Parses one change-log entry into a synonym pair.
///
/// Both names are trimmed and must be non-empty.
///
/// ```
/// use torist_core::parse_synonym_entry;
///
/// let pair = parse_synonym_entry("學名：Passer domesticus →Passer italiae").unwrap();
/// assert_eq!(pair.from, "Passer domesticus");
/// assert_eq!(pair.to, "Passer italiae");
/// ```
pub fn parse_synonym_entry(text: &str) -> Result<SynonymPair, SynonymError> {
    let malformed = || SynonymError::Malformed {
        entry: text.to_string(),
    };
    let caps = NAME_CHANGE_REGEX.captures(text).ok_or_else(malformed)?;
    let from = caps[1].trim();
    let to = caps[2].trim();
    if from.is_empty() || to.is_empty() {
        return Err(malformed());
    }
    Ok(SynonymPair {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Builds a symmetric synonym map from change-log entries.
///
/// Entries that are not scientific-name changes are skipped.
pub fn build_synonyms<I, S>(entries: I) -> SynonymMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = SynonymMap::new();
    for entry in entries {
        match parse_synonym_entry(entry.as_ref()) {
            Ok(pair) => map.insert_pair(pair),
            Err(err) => trace!(%err, "skipping change-log entry"),
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedded_change() {
        let pair =
            parse_synonym_entry("3. 學名：Turdus merula→Turdus mandarinus；中文名不變").unwrap();
        assert_eq!(pair.from, "Turdus merula");
        assert_eq!(pair.to, "Turdus mandarinus");
    }

    #[test]
    fn rejects_other_entries() {
        assert!(parse_synonym_entry("中文名：烏鶇→中國烏鶇").is_err());
        assert!(parse_synonym_entry("學名: Turdus merula→Turdus mandarinus").is_err());
        assert_eq!(
            parse_synonym_entry("學名： →Turdus mandarinus"),
            Err(SynonymError::Malformed {
                entry: "學名： →Turdus mandarinus".to_string()
            })
        );
    }

    #[test]
    fn builds_both_directions() {
        let map = build_synonyms([
            "學名：Passer domesticus→Passer italiae",
            "新增物種",
            "學名：Turdus merula→Turdus mandarinus",
        ]);
        assert_eq!(map.len(), 4);
        assert_eq!(map.lookup("Passer italiae"), Some("Passer domesticus"));
        assert_eq!(map.lookup("Turdus merula"), Some("Turdus mandarinus"));
    }

    #[test]
    fn later_entries_replace_earlier() {
        let map = build_synonyms([
            "學名：Aa bb→Cc dd",
            "學名：Aa bb→Ee ff",
        ]);
        assert_eq!(map.lookup("Aa bb"), Some("Ee ff"));
        // The first pair's reverse entry is still recorded
        assert_eq!(map.lookup("Cc dd"), Some("Aa bb"));
    }
}

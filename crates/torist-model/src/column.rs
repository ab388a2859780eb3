//! Canonical column names shared by every normalized checklist.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the join-key column.
pub const SCIENTIFIC_NAME: &str = "ScientificName";

/// Columns a normalized checklist may carry.
///
/// Source-specific headers (`学名`, `和名`, `English`, ...) are renamed to
/// these during normalization. Which common-name columns exist depends on
/// the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalColumn {
    /// Original listing order or id.
    Index,
    /// Binomial scientific name, the join key.
    ScientificName,
    /// Simplified Chinese common name.
    Chinese,
    /// Traditional Chinese common name.
    ChineseTraditional,
    /// English common name from a national list.
    English,
    /// English common name from the IOC world list.
    EnglishIoc,
    Japanese,
    Family,
}

impl CanonicalColumn {
    pub const ALL: [CanonicalColumn; 8] = [
        Self::Index,
        Self::ScientificName,
        Self::Chinese,
        Self::ChineseTraditional,
        Self::English,
        Self::EnglishIoc,
        Self::Japanese,
        Self::Family,
    ];

    /// Column name as it appears in frames.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::ScientificName => SCIENTIFIC_NAME,
            Self::Chinese => "Chinese",
            Self::ChineseTraditional => "ChineseTraditional",
            Self::English => "English",
            Self::EnglishIoc => "EnglishIOC",
            Self::Japanese => "Japanese",
            Self::Family => "Family",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == name)
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column name for a compare source's column inside a merged view.
///
/// ```
/// use torist_model::namespaced;
///
/// assert_eq!(namespaced("Japanese", "Japan (v8)"), "Japanese [Japan (v8)]");
/// ```
pub fn namespaced(column: &str, label: &str) -> String {
    format!("{column} [{label}]")
}

/// Splits a merged-view column name into its base column and source label.
///
/// Names without a `" [label]"` suffix return `None` for the label.
pub fn split_namespaced(name: &str) -> (&str, Option<&str>) {
    if let Some(inner) = name.strip_suffix(']')
        && let Some((base, label)) = inner.split_once(" [")
    {
        return (base, Some(label));
    }
    (name, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for column in CanonicalColumn::ALL {
            assert_eq!(CanonicalColumn::from_name(column.as_str()), Some(column));
        }
        assert_eq!(CanonicalColumn::from_name("学名"), None);
    }

    #[test]
    fn split_namespaced_column() {
        assert_eq!(
            split_namespaced("EnglishIOC [IOC (15.1)]"),
            ("EnglishIOC", Some("IOC (15.1)"))
        );
        assert_eq!(split_namespaced("Japanese"), ("Japanese", None));
        assert_eq!(split_namespaced("odd]"), ("odd]", None));
    }
}

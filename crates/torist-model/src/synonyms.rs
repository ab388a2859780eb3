//! Alternate scientific names.

use std::collections::HashMap;

/// Two scientific names recorded as the same taxon by a change log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymPair {
    pub from: String,
    pub to: String,
}

/// Maps a scientific name to its single alternate name.
///
/// Pairs are stored in both directions. Lookups are single-hop: if
/// `A <-> B` and `B <-> C` are both recorded, `A` never resolves to `C`.
/// A later pair for the same name replaces the earlier alternate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymMap {
    alternates: HashMap<String, String>,
}

impl SynonymMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_pair(&mut self, pair: SynonymPair) {
        self.alternates.insert(pair.from.clone(), pair.to.clone());
        self.alternates.insert(pair.to, pair.from);
    }

    /// The alternate name recorded for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.alternates.get(name).map(String::as_str)
    }

    /// Number of directed entries (two per inserted pair of distinct names).
    pub fn len(&self) -> usize {
        self.alternates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternates.is_empty()
    }

    /// Merges another map into this one; entries from `other` win.
    pub fn extend(&mut self, other: SynonymMap) {
        self.alternates.extend(other.alternates);
    }
}

impl FromIterator<SynonymPair> for SynonymMap {
    fn from_iter<I: IntoIterator<Item = SynonymPair>>(iter: I) -> Self {
        let mut map = Self::new();
        for pair in iter {
            map.insert_pair(pair);
        }
        map
    }
}

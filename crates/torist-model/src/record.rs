use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::CanonicalColumn;

/// One taxon row of a normalized checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub scientific_name: String,
    pub index: Option<String>,
    pub names: BTreeMap<CanonicalColumn, String>,
}

impl CanonicalRecord {
    pub fn new(scientific_name: impl Into<String>) -> Self {
        Self {
            scientific_name: scientific_name.into(),
            index: None,
            names: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Sets a common-name column. Empty values are not stored.
    #[must_use]
    pub fn with_name(mut self, column: CanonicalColumn, value: impl Into<String>) -> Self {
        self.set_name(column, value);
        self
    }

    pub fn set_name(&mut self, column: CanonicalColumn, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.names.insert(column, value);
        }
    }

    pub fn name(&self, column: CanonicalColumn) -> Option<&str> {
        self.names.get(&column).map(String::as_str)
    }

    /// Value for any canonical column.
    pub fn value(&self, column: CanonicalColumn) -> Option<&str> {
        match column {
            CanonicalColumn::ScientificName => Some(self.scientific_name.as_str()),
            CanonicalColumn::Index => self.index.as_deref(),
            other => self.name(other),
        }
    }
}

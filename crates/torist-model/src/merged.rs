//! Result of reconciling a base checklist against compare checklists.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use crate::label::ChecklistLabel;

/// How the rows of one compare source were linked during a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSummary {
    pub label: String,
    /// Rows whose own scientific name exists in the compare source.
    pub direct: usize,
    /// Rows linked through their synonym.
    pub via_synonym: usize,
    /// Rows with no link; the compare columns stay empty.
    pub unresolved: usize,
    /// Extra rows produced because the compare source repeats a name.
    pub fanout_rows: usize,
}

impl LinkSummary {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn linked(&self) -> usize {
        self.direct + self.via_synonym
    }
}

/// A compare source left out of a merge, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSource {
    pub label: String,
    pub reason: String,
}

/// Wide table produced for one (base, compares) selection.
#[derive(Debug, Clone)]
pub struct MergedView {
    pub base: ChecklistLabel,
    pub frame: DataFrame,
    pub links: Vec<LinkSummary>,
    pub skipped: Vec<SkippedSource>,
}

impl MergedView {
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Labels of the compare sources that contributed columns, in merge order.
    pub fn compare_labels(&self) -> Vec<&str> {
        self.links.iter().map(|link| link.label.as_str()).collect()
    }
}

//! Checklist data model.
//!
//! Every source spreadsheet is normalized into a [`NormalizedTable`]: a
//! [`ChecklistLabel`] plus a frame of canonical string columns keyed on
//! [`CanonicalColumn::ScientificName`]. Merging tables produces a
//! [`MergedView`].

pub mod column;
pub mod error;
pub mod label;
pub mod merged;
pub mod record;
pub mod synonyms;
pub mod table;

pub use column::{CanonicalColumn, SCIENTIFIC_NAME, namespaced, split_namespaced};
pub use error::{ModelError, Result};
pub use label::ChecklistLabel;
pub use merged::{LinkSummary, MergedView, SkippedSource};
pub use record::CanonicalRecord;
pub use synonyms::{SynonymMap, SynonymPair};
pub use table::NormalizedTable;

//! Row mapping shared by the handlers.

use torist_common::normalize_index;
use torist_ingest::RawTable;
use torist_model::{CanonicalColumn, CanonicalRecord, ChecklistLabel, ModelError, NormalizedTable};

/// Where the listing index comes from.
#[derive(Debug, Clone, Copy)]
pub(super) enum IndexSource {
    Column(usize),
    /// 1-based row number, counted before any rows are filtered out.
    Sequence,
    Absent,
}

#[derive(Debug, Clone, Copy)]
pub(super) enum NameSource {
    Column(usize),
    /// Genus and epithet in separate columns, joined with a space.
    Binomial { genus: usize, epithet: usize },
}

/// Column mapping from a raw sheet onto canonical columns.
#[derive(Debug, Clone)]
pub(super) struct Layout {
    pub index: IndexSource,
    pub scientific: NameSource,
    pub names: Vec<(CanonicalColumn, usize)>,
}

impl Layout {
    pub fn new(scientific: NameSource, index: IndexSource) -> Self {
        Self {
            index,
            scientific,
            names: Vec::new(),
        }
    }

    /// Maps each `(column, header)` pair whose header exists in `raw`.
    pub fn with_names(mut self, raw: &RawTable, mapping: &[(CanonicalColumn, &str)]) -> Self {
        for (column, header) in mapping {
            if let Some(position) = raw.column_index(header) {
                self.names.push((*column, position));
            }
        }
        self
    }

    pub fn with_name_at(mut self, column: CanonicalColumn, position: usize) -> Self {
        self.names.push((column, position));
        self
    }

    /// Builds the normalized table for rows accepted by `keep`.
    ///
    /// Scientific names are trimmed and rows without one are dropped.
    pub fn normalize(
        &self,
        label: ChecklistLabel,
        raw: &RawTable,
        keep: impl Fn(&RawTable, usize) -> bool,
    ) -> Result<NormalizedTable, ModelError> {
        let records: Vec<CanonicalRecord> = (0..raw.height())
            .filter(|&row| keep(raw, row))
            .filter_map(|row| self.record(raw, row))
            .collect();

        let mut columns = Vec::with_capacity(self.names.len() + 2);
        if !matches!(self.index, IndexSource::Absent) {
            columns.push(CanonicalColumn::Index);
        }
        columns.push(CanonicalColumn::ScientificName);
        columns.extend(self.names.iter().map(|(column, _)| *column));

        NormalizedTable::from_records(label, &columns, &records)
    }

    fn record(&self, raw: &RawTable, row: usize) -> Option<CanonicalRecord> {
        let scientific = match self.scientific {
            NameSource::Column(position) => raw.text(row, position)?.trim().to_string(),
            NameSource::Binomial { genus, epithet } => {
                let genus = raw.text(row, genus)?;
                let epithet = raw.text(row, epithet)?;
                format!("{} {}", genus.trim(), epithet.trim())
            }
        };
        if scientific.trim().is_empty() {
            return None;
        }

        let mut record = CanonicalRecord::new(scientific.trim());
        record.index = match self.index {
            IndexSource::Column(position) => Some(normalize_index(
                raw.text(row, position).as_deref().unwrap_or_default(),
            )),
            IndexSource::Sequence => Some((row + 1).to_string()),
            IndexSource::Absent => None,
        };
        for (column, position) in &self.names {
            if let Some(value) = raw.text(row, *position) {
                record.set_name(*column, value);
            }
        }
        Some(record)
    }
}

/// Row filter requiring an exact cell value in one column.
pub(super) fn cell_equals(position: usize, expected: &'static str) -> impl Fn(&RawTable, usize) -> bool {
    move |raw, row| raw.text(row, position).as_deref() == Some(expected)
}

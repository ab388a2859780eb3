//! Normalized checklist tables.

use polars::prelude::{Column, DataFrame};
use torist_common::{string_column, string_values};

use crate::column::{CanonicalColumn, SCIENTIFIC_NAME};
use crate::error::{ModelError, Result};
use crate::label::ChecklistLabel;
use crate::record::CanonicalRecord;

/// A checklist normalized into canonical string columns.
///
/// The frame always contains a [`SCIENTIFIC_NAME`] column. Tables are
/// immutable once built; operations that combine tables return new frames.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    label: ChecklistLabel,
    frame: DataFrame,
}

impl NormalizedTable {
    /// Wraps an existing frame, checking that the join key is present.
    pub fn new(label: ChecklistLabel, frame: DataFrame) -> Result<Self> {
        if frame.column(SCIENTIFIC_NAME).is_err() {
            return Err(ModelError::MissingColumn {
                label: label.to_string(),
                column: SCIENTIFIC_NAME.to_string(),
            });
        }
        Ok(Self { label, frame })
    }

    /// Builds a table from records, emitting `columns` in the given order.
    ///
    /// `ScientificName` is inserted after `Index` (or first) when the caller
    /// leaves it out.
    pub fn from_records(
        label: ChecklistLabel,
        columns: &[CanonicalColumn],
        records: &[CanonicalRecord],
    ) -> Result<Self> {
        let mut schema: Vec<CanonicalColumn> = Vec::with_capacity(columns.len() + 1);
        for column in columns {
            if !schema.contains(column) {
                schema.push(*column);
            }
        }
        if !schema.contains(&CanonicalColumn::ScientificName) {
            let at = usize::from(schema.first() == Some(&CanonicalColumn::Index));
            schema.insert(at, CanonicalColumn::ScientificName);
        }

        let frame_columns: Vec<Column> = schema
            .iter()
            .map(|column| {
                let values = records
                    .iter()
                    .map(|record| record.value(*column).map(str::to_string))
                    .collect();
                string_column(column.as_str(), values)
            })
            .collect();

        let frame = DataFrame::new(frame_columns)?;
        Self::new(label, frame)
    }

    pub fn label(&self) -> &ChecklistLabel {
        &self.label
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Scientific names in row order; null cells become empty strings.
    pub fn scientific_names(&self) -> Result<Vec<String>> {
        Ok(string_values(&self.frame, SCIENTIFIC_NAME)?
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect())
    }

    /// Reads the table back as records. Non-canonical columns are ignored.
    pub fn records(&self) -> Result<Vec<CanonicalRecord>> {
        let names = self.scientific_names()?;
        let mut records: Vec<CanonicalRecord> =
            names.into_iter().map(CanonicalRecord::new).collect();

        for name in self.column_names() {
            let Some(column) = CanonicalColumn::from_name(&name) else {
                continue;
            };
            if column == CanonicalColumn::ScientificName {
                continue;
            }
            let values = string_values(&self.frame, &name)?;
            for (record, value) in records.iter_mut().zip(values) {
                let Some(value) = value else { continue };
                if column == CanonicalColumn::Index {
                    record.index = Some(value);
                } else {
                    record.set_name(column, value);
                }
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label() -> ChecklistLabel {
        ChecklistLabel::new("Japan", "v8")
    }

    #[test]
    fn from_records_orders_columns() {
        let records = vec![
            CanonicalRecord::new("Turdus merula")
                .with_index("1")
                .with_name(CanonicalColumn::Japanese, "クロウタドリ"),
            CanonicalRecord::new("Passer montanus").with_index("2"),
        ];
        let table = NormalizedTable::from_records(
            label(),
            &[CanonicalColumn::Index, CanonicalColumn::Japanese],
            &records,
        )
        .unwrap();

        assert_eq!(table.column_names(), vec!["Index", "ScientificName", "Japanese"]);
        assert_eq!(table.height(), 2);
        assert_eq!(table.records().unwrap(), records);
    }

    #[test]
    fn new_requires_scientific_name() {
        let frame = DataFrame::new(vec![string_column("Japanese", vec![None])]).unwrap();
        let err = NormalizedTable::new(label(), frame).unwrap_err();
        assert!(matches!(err, ModelError::MissingColumn { .. }));
        assert_eq!(err.to_string(), "table Japan (v8) has no 'ScientificName' column");
    }

    #[test]
    fn empty_table_keeps_schema() {
        let table =
            NormalizedTable::from_records(label(), &[CanonicalColumn::Japanese], &[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_names(), vec!["ScientificName", "Japanese"]);
    }
}

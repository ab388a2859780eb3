use torist_ingest::{ExtractHints, extract};
use torist_model::{CanonicalColumn, NormalizedTable};
use tracing::debug;

use super::common::{IndexSource, Layout, NameSource};
use super::{SourceFile, SourceHandler};
use crate::error::SourceError;

/// Header row of CBR workbooks whose header hints are not found.
const CBR_HEADER_ROW: usize = 7;

/// China Bird Report checklist (simplified Chinese).
pub struct ChinaCbrHandler;

impl SourceHandler for ChinaCbrHandler {
    fn name(&self) -> &'static str {
        "China CBR"
    }

    fn matches(&self, file_name: &str) -> bool {
        file_name.contains("China") || file_name.contains("CBR")
    }

    fn extract(&self, file: &SourceFile) -> Result<Option<NormalizedTable>, SourceError> {
        let mut hints = ExtractHints::new()
            .sheets(["Checklist", "正表"])
            .headers(["学名", "Scientific"]);
        if file.file_name.contains("CBR") {
            hints = hints.fallback_header_row(CBR_HEADER_ROW);
        }
        let raw = extract(&file.path, &hints)?;

        let Some(scientific) = raw.column_index("学名") else {
            debug!(file = %file.file_name, sheet = %raw.sheet, "no 学名 column");
            return Ok(None);
        };
        let index = raw
            .column_index("编号")
            .map_or(IndexSource::Sequence, IndexSource::Column);

        let table = Layout::new(NameSource::Column(scientific), index)
            .with_names(
                &raw,
                &[
                    (CanonicalColumn::Chinese, "中文名"),
                    (CanonicalColumn::English, "英文名"),
                ],
            )
            .normalize(self.label(file), &raw, |_, _| true)?;
        Ok(Some(table))
    }
}

use torist_ingest::{ExtractHints, extract};
use torist_model::{CanonicalColumn, NormalizedTable};
use tracing::debug;

use super::common::{IndexSource, Layout, NameSource};
use super::{SourceFile, SourceHandler};
use crate::error::SourceError;

const CHANGE_DETAIL_HEADER: &str = "變動細項";

/// Chinese Wild Bird Federation checklist of Taiwan (traditional Chinese).
///
/// The workbook also carries a change-log sheet whose detail column records
/// scientific-name changes between releases.
pub struct TaiwanHandler;

impl SourceHandler for TaiwanHandler {
    fn name(&self) -> &'static str {
        "Taiwan"
    }

    fn matches(&self, file_name: &str) -> bool {
        file_name.contains("TW")
    }

    fn extract(&self, file: &SourceFile) -> Result<Option<NormalizedTable>, SourceError> {
        let hints = ExtractHints::new()
            .sheets(["正表", "List"])
            .headers(["學名", "Scientific"]);
        let raw = extract(&file.path, &hints)?;

        let Some(scientific) = raw.column_index("學名") else {
            debug!(file = %file.file_name, sheet = %raw.sheet, "no 學名 column");
            return Ok(None);
        };
        let index = raw
            .first_column(&["編碼", "Code"])
            .map_or(IndexSource::Absent, IndexSource::Column);

        let table = Layout::new(NameSource::Column(scientific), index)
            .with_names(
                &raw,
                &[
                    (CanonicalColumn::ChineseTraditional, "中文名"),
                    (CanonicalColumn::English, "英文名"),
                ],
            )
            .normalize(self.label(file), &raw, |_, _| true)?;
        Ok(Some(table))
    }

    fn change_log(&self, file: &SourceFile) -> Result<Vec<String>, SourceError> {
        let hints = ExtractHints::new()
            .sheets(["變動", "Change"])
            .headers([CHANGE_DETAIL_HEADER]);
        let raw = extract(&file.path, &hints)?;

        let detail = raw
            .find_column(|header| header.contains(CHANGE_DETAIL_HEADER))
            .ok_or_else(|| SourceError::Schema {
                label: self.label(file).to_string(),
                reason: format!("change log has no '{CHANGE_DETAIL_HEADER}' column"),
            })?;

        Ok(raw.column_texts(detail).into_iter().flatten().collect())
    }
}

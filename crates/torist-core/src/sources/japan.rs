use torist_ingest::{ExtractHints, RawTable, extract, extract_headerless};
use torist_model::{CanonicalColumn, NormalizedTable};
use tracing::debug;

use super::common::{IndexSource, Layout, NameSource, cell_equals};
use super::{SourceFile, SourceHandler};
use crate::error::SourceError;

/// Rank value marking species rows.
const SPECIES: &str = "種";

// Headerless 7th-edition layout: No, rank, id, genus, epithet, author, 和名
const LEGACY_INDEX: usize = 0;
const LEGACY_RANK: usize = 1;
const LEGACY_GENUS: usize = 3;
const LEGACY_EPITHET: usize = 4;
const LEGACY_JAPANESE: usize = 6;

/// Ornithological Society of Japan checklist.
pub struct JapanHandler;

impl JapanHandler {
    /// The 7th edition ships without a header row. Any version containing
    /// `v7` (`v7`, `v70`, `v71`) is read the same way.
    fn is_legacy(file: &SourceFile) -> bool {
        file.file_name.contains("7ed") || file.version.contains("v7")
    }

    fn extract_legacy(&self, file: &SourceFile) -> Result<Option<NormalizedTable>, SourceError> {
        let raw = extract_headerless(&file.path)?;
        if raw.width() <= LEGACY_JAPANESE {
            debug!(file = %file.file_name, width = raw.width(), "legacy sheet too narrow");
            return Ok(None);
        }

        let table = Layout::new(
            NameSource::Binomial {
                genus: LEGACY_GENUS,
                epithet: LEGACY_EPITHET,
            },
            IndexSource::Column(LEGACY_INDEX),
        )
        .with_name_at(CanonicalColumn::Japanese, LEGACY_JAPANESE)
        .normalize(self.label(file), &raw, cell_equals(LEGACY_RANK, SPECIES))?;
        Ok(Some(table))
    }

    fn extract_current(&self, file: &SourceFile) -> Result<Option<NormalizedTable>, SourceError> {
        let hints = ExtractHints::new()
            .sheets(["リスト", "List"])
            .headers(["学名", "Scientific"]);
        let raw = extract(&file.path, &hints)?;

        let (Some(scientific), Some(japanese)) = (raw.column_index("学名"), raw.column_index("和名"))
        else {
            debug!(file = %file.file_name, sheet = %raw.sheet, "no 学名/和名 columns");
            return Ok(None);
        };
        let index = raw
            .first_column(&["種番号", "掲載順", "No", "Seq"])
            .map_or(IndexSource::Absent, IndexSource::Column);
        let category = raw.column_index("カテゴリ");

        let table = Layout::new(NameSource::Column(scientific), index)
            .with_name_at(CanonicalColumn::Japanese, japanese)
            .normalize(self.label(file), &raw, |raw: &RawTable, row| {
                category.is_none_or(|position| raw.text(row, position).as_deref() == Some(SPECIES))
            })?;
        Ok(Some(table))
    }
}

impl SourceHandler for JapanHandler {
    fn name(&self) -> &'static str {
        "Japan"
    }

    fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        lower.contains("jp") || lower.contains("osj")
    }

    fn extract(&self, file: &SourceFile) -> Result<Option<NormalizedTable>, SourceError> {
        if Self::is_legacy(file) {
            self.extract_legacy(file)
        } else {
            self.extract_current(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_detection() {
        assert!(JapanHandler::is_legacy(&SourceFile::new("OSJ_7ed_list.xls")));
        assert!(JapanHandler::is_legacy(&SourceFile::new("JP_v7.xls")));
        assert!(!JapanHandler::is_legacy(&SourceFile::new("JP_v8_checklist.xls")));
        assert!(JapanHandler::is_legacy(&SourceFile::new("JP_v70_list.xls")));
        assert!(JapanHandler::is_legacy(&SourceFile::new("OSJ-v71.xls")));
        assert!(!JapanHandler::is_legacy(&SourceFile::new("JP_2023.xls")));
    }
}

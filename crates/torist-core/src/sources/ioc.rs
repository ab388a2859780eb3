use torist_ingest::{ExtractHints, extract};
use torist_model::{CanonicalColumn, NormalizedTable};
use tracing::debug;

use super::common::{IndexSource, Layout, NameSource};
use super::{SourceFile, SourceHandler};
use crate::error::SourceError;

/// IOC World Bird List master file.
///
/// The scientific-name column is headed by the release (`IOC_15.1`), so it
/// is found by substring rather than by exact name.
pub struct IocHandler;

impl SourceHandler for IocHandler {
    fn name(&self) -> &'static str {
        "IOC"
    }

    fn matches(&self, file_name: &str) -> bool {
        file_name.contains("IOC")
    }

    fn extract(&self, file: &SourceFile) -> Result<Option<NormalizedTable>, SourceError> {
        let hints = ExtractHints::new().sheets(["List"]).headers(["IOC", "Scientific"]);
        let raw = extract(&file.path, &hints)?;

        let Some(scientific) =
            raw.find_column(|header| header.contains("IOC") && !header.contains("Order"))
        else {
            debug!(file = %file.file_name, sheet = %raw.sheet, "no IOC name column");
            return Ok(None);
        };
        let index = raw
            .find_column(|header| {
                matches!(header.to_lowercase().as_str(), "seq" | "rank" | "no.")
            })
            .map_or(IndexSource::Absent, IndexSource::Column);

        let table = Layout::new(NameSource::Column(scientific), index)
            .with_names(
                &raw,
                &[
                    (CanonicalColumn::EnglishIoc, "English"),
                    (CanonicalColumn::Chinese, "Chinese"),
                    (CanonicalColumn::ChineseTraditional, "Chinese (Traditional)"),
                    (CanonicalColumn::Japanese, "Japanese"),
                    (CanonicalColumn::Family, "Family"),
                ],
            )
            .normalize(self.label(file), &raw, |_, _| true)?;
        Ok(Some(table))
    }
}

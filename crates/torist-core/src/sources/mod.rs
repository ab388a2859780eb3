//! Source-specific checklist normalizers.
//!
//! Each checklist family publishes its spreadsheet in its own layout. A
//! [`SourceHandler`] recognizes its files by name and maps their columns
//! onto [`CanonicalColumn`](torist_model::CanonicalColumn)s. Handlers are
//! tried in registration order and the first match wins.
//!
//! | Handler | File name contains | Label |
//! |---------|--------------------|-------|
//! | China CBR | `China` or `CBR` | `China CBR ({version})` |
//! | Taiwan | `TW` | `Taiwan ({version})` |
//! | Japan | `jp` or `osj` (any case) | `Japan ({version})` |
//! | IOC | `IOC` | `IOC ({version})` |

mod china;
mod common;
mod ioc;
mod japan;
mod taiwan;

use std::path::PathBuf;
use std::sync::OnceLock;

use torist_ingest::{extract_version, file_name};
use torist_model::{ChecklistLabel, NormalizedTable};

use crate::error::SourceError;

pub use china::ChinaCbrHandler;
pub use ioc::IocHandler;
pub use japan::JapanHandler;
pub use taiwan::TaiwanHandler;

/// A checklist file and the release version read from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub file_name: String,
    pub version: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = file_name(&path);
        let version = extract_version(&file_name);
        Self {
            path,
            file_name,
            version,
        }
    }
}

/// Normalizer for one checklist family.
pub trait SourceHandler: Send + Sync {
    /// Source name used in labels, e.g. `"China CBR"`.
    fn name(&self) -> &'static str;

    /// Whether this handler claims a file, judged by its name alone.
    fn matches(&self, file_name: &str) -> bool;

    /// Reads and normalizes the main checklist.
    ///
    /// Returns `Ok(None)` when the sheet does not have the expected shape,
    /// for example when a required column is missing.
    ///
    /// # Errors
    ///
    /// Returns an error when the workbook cannot be read or the normalized
    /// frame cannot be built.
    fn extract(&self, file: &SourceFile) -> Result<Option<NormalizedTable>, SourceError>;

    /// Change-log entries shipped alongside the checklist, if any.
    fn change_log(&self, _file: &SourceFile) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }

    /// Label of the checklist loaded from `file`.
    fn label(&self, file: &SourceFile) -> ChecklistLabel {
        ChecklistLabel::new(self.name(), file.version.as_str())
    }
}

/// Ordered list of source handlers.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn SourceHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler; earlier registrations take priority.
    pub fn register(&mut self, handler: Box<dyn SourceHandler>) {
        self.handlers.push(handler);
    }

    /// First handler claiming `file_name`.
    pub fn find(&self, file_name: &str) -> Option<&dyn SourceHandler> {
        self.handlers
            .iter()
            .find(|handler| handler.matches(file_name))
            .map(|handler| handler.as_ref())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|handler| handler.name())
    }
}

static DEFAULT_HANDLERS: OnceLock<HandlerRegistry> = OnceLock::new();

/// Handlers for the four supported checklist families, cached on first use.
pub fn default_handlers() -> &'static HandlerRegistry {
    DEFAULT_HANDLERS.get_or_init(build_default_handlers)
}

/// Builds a fresh registry with the supported handlers in priority order.
pub fn build_default_handlers() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register(Box::new(ChinaCbrHandler));
    registry.register(Box::new(TaiwanHandler));
    registry.register(Box::new(JapanHandler));
    registry.register(Box::new(IocHandler));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler_for(file_name: &str) -> Option<&'static str> {
        default_handlers().find(file_name).map(|handler| handler.name())
    }

    #[test]
    fn default_order() {
        let names: Vec<_> = default_handlers().names().collect();
        assert_eq!(names, vec!["China CBR", "Taiwan", "Japan", "IOC"]);
    }

    #[test]
    fn dispatch_by_file_name() {
        assert_eq!(handler_for("China_CBR_2023.xlsx"), Some("China CBR"));
        assert_eq!(handler_for("CBR_list.xlsx"), Some("China CBR"));
        assert_eq!(handler_for("TW_2023.xlsx"), Some("Taiwan"));
        assert_eq!(handler_for("OSJ_7ed_list.xls"), Some("Japan"));
        assert_eq!(handler_for("jp_v8.xlsx"), Some("Japan"));
        assert_eq!(handler_for("IOC_15.1_Master.xlsx"), Some("IOC"));
        assert_eq!(handler_for("notes.xlsx"), None);
    }

    #[test]
    fn first_match_wins() {
        // Matches both China and IOC
        assert_eq!(handler_for("China_IOC_compare.xlsx"), Some("China CBR"));
        // Matching is case-sensitive for Taiwan
        assert_eq!(handler_for("tw_2023.xlsx"), None);
    }

    #[test]
    fn source_file_reads_version() {
        let file = SourceFile::new("/data/original_index/IOC_15.1_Master.xlsx");
        assert_eq!(file.file_name, "IOC_15.1_Master.xlsx");
        assert_eq!(file.version, "15.1");
        assert_eq!(IocHandler.label(&file).to_string(), "IOC (15.1)");
    }
}

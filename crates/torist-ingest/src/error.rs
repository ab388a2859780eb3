//! Error types for checklist ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or reading checklist files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Workbook Errors ===
    /// Workbook could not be opened or its format was not recognized.
    #[error("failed to open workbook {path}: {message}")]
    WorkbookOpen { path: PathBuf, message: String },

    /// Workbook has no sheets.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    /// A sheet could not be read.
    #[error("failed to read sheet '{sheet}' in {path}: {message}")]
    SheetRead {
        path: PathBuf,
        sheet: String,
        message: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::NoSheets {
            path: PathBuf::from("/data/IOC_15.1.xlsx"),
        };
        assert_eq!(err.to_string(), "workbook has no sheets: /data/IOC_15.1.xlsx");

        let err = IngestError::SheetRead {
            path: PathBuf::from("TW_2023.xlsx"),
            sheet: "正表".to_string(),
            message: "corrupt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read sheet '正表' in TW_2023.xlsx: corrupt"
        );
    }
}

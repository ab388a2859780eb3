//! Checklist ingestion utilities.
//!
//! This crate discovers checklist spreadsheets in a directory and extracts
//! one sheet of each into a [`RawTable`], leaving source-specific column
//! handling to the normalizers.
//!
//! # Features
//!
//! - **Discovery**: List `.xlsx`/`.xls` files sorted by file name
//! - **Sheet selection**: Pick the first sheet whose name contains a keyword
//! - **Header detection**: Find the header row from substring hints
//! - **Version labels**: Derive a release label from the file name
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use torist_ingest::{ExtractHints, extract, extract_version, list_spreadsheet_files};
//!
//! for path in list_spreadsheet_files(Path::new("original_index"))? {
//!     let hints = ExtractHints::new().sheets(["List"]).headers(["IOC", "Scientific"]);
//!     let table = extract(&path, &hints)?;
//!     println!("{} rows, version {}", table.height(), extract_version(&path.to_string_lossy()));
//! }
//! ```

mod discovery;
mod error;
mod extract;
mod raw_table;
mod version;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{file_name, list_spreadsheet_files};

// === Extraction ===
pub use extract::{
    ExtractHints, HEADER_SCAN_ROWS, detect_header_row, extract, extract_headerless, select_sheet,
};
pub use raw_table::{CellValue, RawTable};

// === Version Labels ===
pub use version::{UNKNOWN_VERSION, extract_version};

//! Checklist file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

const SPREADSHEET_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Lists all spreadsheet files (`.xlsx`, `.xls`) in a directory.
///
/// Returns files sorted by filename so registry builds are deterministic.
pub fn list_spreadsheet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // Spreadsheet lock files (~$name.xlsx) are not workbooks
        if file_name(&path).starts_with("~$") {
            continue;
        }

        let is_spreadsheet = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                SPREADSHEET_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });

        if is_spreadsheet {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// File name component as a string (lossy), or empty when absent.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

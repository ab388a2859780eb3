//! Sheet selection, header-row detection and workbook reading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::raw_table::{CellValue, RawTable};

/// Number of leading rows inspected when looking for the header row.
pub const HEADER_SCAN_ROWS: usize = 20;

/// Source-specific hints for locating a table inside a workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractHints {
    /// Substrings identifying the wanted sheet, tried per sheet in workbook order.
    pub sheet_keywords: Vec<String>,
    /// Substrings identifying the header row.
    pub header_hints: Vec<String>,
    /// Header row used when no hint matches (defaults to row 0).
    pub fallback_header_row: Option<usize>,
}

impl ExtractHints {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sheets<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sheet_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn headers<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_hints = hints.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn fallback_header_row(mut self, row: usize) -> Self {
        self.fallback_header_row = Some(row);
        self
    }
}

/// Picks the first sheet whose name contains any keyword (case-sensitive).
///
/// Falls back to the first sheet when nothing matches or no keywords are
/// given. Returns `None` only for an empty sheet list.
pub fn select_sheet<'a>(sheet_names: &'a [String], keywords: &[String]) -> Option<&'a str> {
    sheet_names
        .iter()
        .find(|name| keywords.iter().any(|keyword| name.contains(keyword.as_str())))
        .or_else(|| sheet_names.first())
        .map(String::as_str)
}

/// Finds the header row among the first [`HEADER_SCAN_ROWS`] rows.
///
/// A row matches when its non-empty cells, joined by spaces, contain any
/// hint as a substring.
pub fn detect_header_row(grid: &[Vec<CellValue>], hints: &[String]) -> Option<usize> {
    if hints.is_empty() {
        return None;
    }
    grid.iter()
        .take(HEADER_SCAN_ROWS)
        .position(|row| {
            let joined = row
                .iter()
                .filter_map(CellValue::as_text)
                .collect::<Vec<_>>()
                .join(" ");
            hints.iter().any(|hint| joined.contains(hint.as_str()))
        })
}

/// Reads the hinted sheet of a workbook into a [`RawTable`].
pub fn extract(path: &Path, hints: &ExtractHints) -> Result<RawTable> {
    let mut workbook = open_workbook(path)?;
    let sheet_names = workbook.sheet_names();
    let sheet = select_sheet(&sheet_names, &hints.sheet_keywords)
        .ok_or_else(|| IngestError::NoSheets {
            path: path.to_path_buf(),
        })?
        .to_string();

    let grid = read_grid(&mut workbook, path, &sheet)?;
    let detected = detect_header_row(&grid, &hints.header_hints);
    let header_row = detected.or(hints.fallback_header_row).unwrap_or(0);

    debug!(
        path = %path.display(),
        sheet = %sheet,
        header_row,
        detected = detected.is_some(),
        "extracted sheet"
    );

    Ok(RawTable::from_grid(sheet, grid, header_row))
}

/// Reads the first sheet of a workbook with positional column names.
pub fn extract_headerless(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook(path)?;
    let sheet = workbook
        .sheet_names()
        .into_iter()
        .next()
        .ok_or_else(|| IngestError::NoSheets {
            path: path.to_path_buf(),
        })?;

    let grid = read_grid(&mut workbook, path, &sheet)?;
    debug!(path = %path.display(), sheet = %sheet, rows = grid.len(), "extracted headerless sheet");

    Ok(RawTable::headerless(sheet, grid))
}

fn open_workbook(path: &Path) -> Result<Sheets<BufReader<File>>> {
    open_workbook_auto(path).map_err(|e| IngestError::WorkbookOpen {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reads a sheet into a grid addressed from cell A1.
///
/// Calamine ranges start at the first used cell, so leading rows and
/// columns are padded back in to keep positions absolute.
fn read_grid(
    workbook: &mut Sheets<BufReader<File>>,
    path: &Path,
    sheet: &str,
) -> Result<Vec<Vec<CellValue>>> {
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| IngestError::SheetRead {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
            message: e.to_string(),
        })?;

    let Some((start_row, start_col)) = range.start() else {
        return Ok(Vec::new());
    };

    let mut grid: Vec<Vec<CellValue>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; start_col as usize];
        cells.extend(row.iter().map(cell_value));
        grid.push(cells);
    }
    Ok(grid)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn row(values: &[&str]) -> Vec<CellValue> {
        values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(v.to_string())
                }
            })
            .collect()
    }

    #[test]
    fn test_select_sheet_by_keyword() {
        let sheets = names(&["說明", "變動清單", "正表"]);
        assert_eq!(select_sheet(&sheets, &names(&["正表", "List"])), Some("正表"));
        assert_eq!(select_sheet(&sheets, &names(&["變動", "Change"])), Some("變動清單"));
    }

    #[test]
    fn test_select_sheet_first_keyword_hit_in_sheet_order() {
        let sheets = names(&["Master List", "Checklist"]);
        assert_eq!(
            select_sheet(&sheets, &names(&["Checklist", "List"])),
            Some("Master List")
        );
    }

    #[test]
    fn test_select_sheet_fallback_to_first() {
        let sheets = names(&["Sheet1", "Sheet2"]);
        assert_eq!(select_sheet(&sheets, &names(&["List"])), Some("Sheet1"));
        assert_eq!(select_sheet(&sheets, &[]), Some("Sheet1"));
        // Case-sensitive
        assert_eq!(select_sheet(&names(&["a", "list"]), &names(&["List"])), Some("a"));
        assert_eq!(select_sheet(&[], &names(&["List"])), None);
    }

    #[test]
    fn test_detect_header_row() {
        let grid = vec![
            row(&["IOC World Bird List v15.1"]),
            row(&[""]),
            row(&["Rank", "Order", "Family", "IOC_15.1", "English"]),
            row(&["1", "STRUTHIONIFORMES", "", "Struthio camelus", "Common Ostrich"]),
        ];
        // The title row already contains "IOC"
        assert_eq!(detect_header_row(&grid, &names(&["IOC", "Scientific"])), Some(0));
        assert_eq!(detect_header_row(&grid, &names(&["Family"])), Some(2));
    }

    #[test]
    fn test_detect_header_row_limits_scan() {
        let mut grid = vec![row(&["title"]); HEADER_SCAN_ROWS];
        grid.push(row(&["学名"]));
        assert_eq!(detect_header_row(&grid, &names(&["学名"])), None);
        assert_eq!(detect_header_row(&grid, &[]), None);
    }

    #[test]
    fn test_detect_header_row_joins_cells() {
        let grid = vec![row(&["Scien", "tific"]), row(&["x Scientific name"])];
        assert_eq!(detect_header_row(&grid, &names(&["Scientific"])), Some(1));
    }

    #[test]
    fn test_extract_missing_file() {
        let result = extract(Path::new("/nonexistent/IOC_15.1.xlsx"), &ExtractHints::new());
        assert!(matches!(result, Err(IngestError::WorkbookOpen { .. })));
    }
}

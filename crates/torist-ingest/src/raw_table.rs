//! Raw sheet contents before normalization.

use std::collections::HashMap;

use torist_common::format_numeric;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Cell rendered as text; `None` for empty cells and empty strings.
    ///
    /// Integer-valued numbers render without a fractional part (`12.0` -> `"12"`).
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(format_numeric(*n)),
            Self::Bool(true) => Some("True".to_string()),
            Self::Bool(false) => Some("False".to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_none()
    }
}

/// Columns of one sheet, named by a header row (or by position).
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Sheet the table was read from.
    pub sheet: String,
    /// Column names, trimmed and made unique.
    pub headers: Vec<String>,
    /// Data rows, each exactly `headers.len()` cells wide.
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Builds a table from a cell grid, using `header_row` for column names.
    ///
    /// Rows above the header are discarded, as are fully empty data rows.
    /// Blank headers become `Unnamed: {n}` and repeated headers get a
    /// `.{k}` suffix.
    pub fn from_grid(sheet: impl Into<String>, grid: Vec<Vec<CellValue>>, header_row: usize) -> Self {
        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = grid.into_iter().skip(header_row);
        let header_cells = grid.next().unwrap_or_default();

        let raw_headers: Vec<String> = (0..width)
            .map(|i| {
                header_cells
                    .get(i)
                    .and_then(CellValue::as_text)
                    .map(|text| text.trim().to_string())
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| format!("Unnamed: {i}"))
            })
            .collect();

        Self {
            sheet: sheet.into(),
            headers: dedupe_headers(raw_headers),
            rows: collect_rows(grid, width),
        }
    }

    /// Builds a table with positional column names `"0"`, `"1"`, ...
    pub fn headerless(sheet: impl Into<String>, grid: Vec<Vec<CellValue>>) -> Self {
        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            sheet: sheet.into(),
            headers: (0..width).map(|i| i.to_string()).collect(),
            rows: collect_rows(grid.into_iter(), width),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Position of the column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Position of the first column whose name satisfies `predicate`.
    pub fn find_column(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.headers.iter().position(|header| predicate(header))
    }

    /// Position of the first of `candidates` that exists, in candidate order.
    pub fn first_column(&self, candidates: &[&str]) -> Option<usize> {
        candidates
            .iter()
            .find_map(|candidate| self.column_index(candidate))
    }

    /// Text of one cell; `None` when empty or out of range.
    pub fn text(&self, row: usize, column: usize) -> Option<String> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(CellValue::as_text)
    }

    /// Text values of one column in row order.
    pub fn column_texts(&self, column: usize) -> Vec<Option<String>> {
        (0..self.height()).map(|row| self.text(row, column)).collect()
    }
}

fn collect_rows(rows: impl Iterator<Item = Vec<CellValue>>, width: usize) -> Vec<Vec<CellValue>> {
    rows.filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .map(|mut row| {
            row.resize(width, CellValue::Empty);
            row
        })
        .collect()
}

fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .map(|header| {
            let count = seen.entry(header.clone()).or_insert(0);
            let name = if *count == 0 {
                header
            } else {
                format!("{header}.{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

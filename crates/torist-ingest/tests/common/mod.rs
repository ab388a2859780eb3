//! Spreadsheet fixtures written with rust_xlsxwriter.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

#[derive(Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub fn write_workbook(dir: &Path, name: &str, sheets: &[(&str, Vec<Vec<Cell<'_>>>)]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    for (sheet_name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*sheet_name).expect("sheet name");
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Cell::Text(text) => {
                        sheet.write_string(r, c, *text).expect("write string");
                    }
                    Cell::Number(n) => {
                        sheet.write_number(r, c, *n).expect("write number");
                    }
                    Cell::Blank => {}
                }
            }
        }
    }
    workbook.save(&path).expect("save workbook");
    path
}

pub fn texts<'a>(values: &[&'a str]) -> Vec<Cell<'a>> {
    values
        .iter()
        .map(|&v| if v.is_empty() { Cell::Blank } else { Cell::Text(v) })
        .collect()
}

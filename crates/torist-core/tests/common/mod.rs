//! Checklist workbooks written with rust_xlsxwriter.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use torist_model::{CanonicalColumn, CanonicalRecord, ChecklistLabel, NormalizedTable};

pub type Sheet<'a> = (&'a str, Vec<Vec<&'a str>>);

/// Writes string cells; empty strings are left blank.
pub fn write_workbook(dir: &Path, name: &str, sheets: &[Sheet<'_>]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    for (sheet_name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*sheet_name).expect("sheet name");
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet
                        .write_string(r as u32, c as u16, *value)
                        .expect("write cell");
                }
            }
        }
    }
    workbook.save(&path).expect("save workbook");
    path
}

pub fn taiwan_workbook(dir: &Path) -> PathBuf {
    write_workbook(
        dir,
        "TW_2023.xlsx",
        &[
            (
                "2023變動",
                vec![
                    vec!["編號", "變動細項"],
                    vec!["1", "學名：Passer domesticus→Passer italiae"],
                    vec!["2", "中文名：烏鶇→中國烏鶇"],
                ],
            ),
            (
                "正表",
                vec![
                    vec!["臺灣鳥類名錄 2023"],
                    vec!["編碼", "中文名", "學名", "英文名"],
                    vec!["0001", "烏鶇", " Turdus merula ", "Blackbird"],
                    vec!["0002", "家麻雀", "Passer domesticus", "Sparrow"],
                    vec!["0003", "無名", "", ""],
                ],
            ),
        ],
    )
}

pub fn ioc_workbook(dir: &Path, name: &str) -> PathBuf {
    write_workbook(
        dir,
        name,
        &[(
            "Master List",
            vec![
                vec!["Seq", "Order", "Family", "IOC_15.1", "English", "Chinese", "Japanese"],
                vec!["1", "PASSERIFORMES", "Turdidae", "Turdus merula", "Common Blackbird", "欧乌鸫", "クロウタドリ"],
                vec!["2", "PASSERIFORMES", "Passeridae", "Passer italiae", "Italian Sparrow", "意大利麻雀", "イタリアスズメ"],
            ],
        )],
    )
}

pub fn china_workbook(dir: &Path) -> PathBuf {
    let mut rows: Vec<Vec<&str>> = vec![vec!["中国观鸟年报"]; 7];
    rows.push(vec!["序号", "学名", "中文名", "英文名"]);
    rows.push(vec!["1", "Turdus mandarinus", "乌鸫", "Chinese Blackbird"]);
    rows.push(vec!["2", "", "缺学名", ""]);
    rows.push(vec!["3", "Passer montanus", "麻雀", "Eurasian Tree Sparrow"]);
    write_workbook(dir, "China_CBR_2023.xlsx", &[("Checklist", rows)])
}

pub fn japan_workbook(dir: &Path) -> PathBuf {
    write_workbook(
        dir,
        "JP_v8_checklist.xlsx",
        &[(
            "リスト",
            vec![
                vec!["種番号", "カテゴリ", "学名", "和名"],
                vec!["100", "種", "Turdus merula", "クロウタドリ"],
                vec!["100.1", "亜種", "Turdus merula merula", "クロウタドリ（亜種）"],
                vec!["200", "種", "Passer montanus", "スズメ"],
            ],
        )],
    )
}

pub fn legacy_japan_workbook(dir: &Path) -> PathBuf {
    write_workbook(
        dir,
        "OSJ_7ed_list.xlsx",
        &[(
            "Sheet1",
            vec![
                vec!["1", "目", "A", "PASSERIFORMES", "", "", "スズメ目"],
                vec!["2", "種", "B", "Turdus", "merula", "Linnaeus", "クロウタドリ"],
                vec!["3", "種", "C", "Passer", "montanus", "(Linnaeus)", "スズメ"],
            ],
        )],
    )
}

/// A table with one common-name column, labelled `"{source} (1)"`.
pub fn table(source: &str, column: CanonicalColumn, rows: &[(&str, &str)]) -> NormalizedTable {
    let records: Vec<CanonicalRecord> = rows
        .iter()
        .map(|(name, value)| CanonicalRecord::new(*name).with_name(column, *value))
        .collect();
    NormalizedTable::from_records(ChecklistLabel::new(source, "1"), &[column], &records)
        .expect("table")
}

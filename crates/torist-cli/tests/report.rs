use std::path::Path;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;
use torist_cli::render::view_text;
use torist_cli::report::{LabelsReport, ViewReport};
use torist_core::ChecklistRegistry;
use torist_display::{Locale, Messages};

fn write(dir: &Path, name: &str, sheet_name: &str, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).expect("sheet name");
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet.write_string(r as u32, c as u16, *value).expect("write");
        }
    }
    workbook.save(dir.join(name)).expect("save");
}

fn registry() -> (TempDir, ChecklistRegistry) {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "JP_v8_checklist.xlsx",
        "リスト",
        &[
            &["種番号", "学名", "和名"],
            &["1", "Turdus merula", "クロウタドリ"],
            &["2", "Passer montanus", "スズメ"],
        ],
    );
    write(
        dir.path(),
        "IOC_15.1_Master.xlsx",
        "List",
        &[
            &["Seq", "IOC_15.1", "English"],
            &["10", "Passer montanus", "Eurasian Tree Sparrow"],
        ],
    );
    let registry = ChecklistRegistry::build(dir.path()).expect("build");
    (dir, registry)
}

#[test]
fn labels_report_counts_rows() {
    let (_dir, registry) = registry();
    let report = LabelsReport::from_registry(&registry);

    let labels: Vec<(&str, usize)> = report
        .checklists
        .iter()
        .map(|entry| (entry.label.as_str(), entry.rows))
        .collect();
    assert_eq!(labels, vec![("IOC (15.1)", 1), ("Japan (v8)", 2)]);
    assert_eq!(report.synonyms, 0);
}

#[test]
fn japanese_view_leads_with_japanese_names() {
    let (_dir, registry) = registry();
    let compare = registry.default_compare("Japan (v8)").expect("ioc");
    let view = registry.merge_labels("Japan (v8)", &[compare]).expect("merge");

    let report = ViewReport::from_view(&view, Some("sparrow"), 0, Locale::Jp).expect("report");

    assert_eq!(
        report.headers,
        vec!["No.", "学名", "和名", "No. [IOC (15.1)]", "英語(IOC) [IOC (15.1)]"]
    );
    assert_eq!(report.matches, 1);
    assert_eq!(report.rows[0][2].as_deref(), Some("スズメ"));

    let text = view_text(&report, &Messages::for_locale(Locale::Jp), false);
    assert!(text.starts_with("Japan (v8) ビュー\n"));
    assert!(text.ends_with("1 件ヒット\n"));
}

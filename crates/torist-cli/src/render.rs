//! Terminal rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use torist_display::Messages;

use crate::report::{LabelsReport, ViewReport};

/// Loaded checklists, synonym count and skipped files.
pub fn labels_text(report: &LabelsReport, messages: &Messages, styled: bool) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell(messages.loaded), header_cell("#")]);
    apply_table_style(&mut table, styled);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &report.checklists {
        table.add_row(vec![Cell::new(&entry.label), Cell::new(entry.rows)]);
    }

    let mut out = format!("{}\n{table}\n{}\n", messages.title, messages.synonyms(report.synonyms));
    if !report.skipped.is_empty() {
        out.push_str(&skipped_text(
            report.skipped.iter().map(|s| (s.label.as_str(), s.reason.as_str())),
            messages,
            styled,
        ));
    }
    out
}

/// Heading, link summary and the merged rows.
pub fn view_text(report: &ViewReport, messages: &Messages, styled: bool) -> String {
    let mut out = format!(
        "{}\n{}: {}\n",
        messages.view(&report.base),
        messages.base,
        report.base
    );
    if !report.compares.is_empty() {
        out.push_str(&format!("{}: {}\n", messages.compare, report.compares.join(", ")));
    }

    if !report.links.is_empty() {
        let mut links = Table::new();
        links.set_header(vec![
            header_cell(messages.compare),
            header_cell("direct"),
            header_cell("synonym"),
            header_cell("unresolved"),
            header_cell("fan-out"),
        ]);
        apply_table_style(&mut links, styled);
        for column in 1..5 {
            align_column(&mut links, column, CellAlignment::Right);
        }
        for link in &report.links {
            links.add_row(vec![
                Cell::new(&link.label),
                Cell::new(link.direct),
                Cell::new(link.via_synonym),
                count_cell(link.unresolved, Color::Yellow),
                count_cell(link.fanout_rows, Color::Red),
            ]);
        }
        out.push_str(&format!("{links}\n"));
    }

    if !report.skipped.is_empty() {
        out.push_str(&skipped_text(
            report.skipped.iter().map(|s| (s.label.as_str(), s.reason.as_str())),
            messages,
            styled,
        ));
    }

    let mut rows = Table::new();
    rows.set_header(report.headers.iter().map(|header| header_cell(header)));
    apply_table_style(&mut rows, styled);
    for row in &report.rows {
        rows.add_row(row.iter().map(|value| match value {
            Some(value) => Cell::new(value),
            None => dim_cell(""),
        }));
    }
    out.push_str(&format!("{rows}\n"));

    out.push_str(&messages.found(report.matches));
    if report.rows.len() < report.matches {
        out.push_str(&format!(" ({}/{})", report.rows.len(), report.matches));
    }
    out.push('\n');
    out
}

fn skipped_text<'a>(
    skipped: impl Iterator<Item = (&'a str, &'a str)>,
    messages: &Messages,
    styled: bool,
) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell(messages.skipped), header_cell("")]);
    apply_table_style(&mut table, styled);
    for (label, reason) in skipped {
        table.add_row(vec![Cell::new(label), dim_cell(reason)]);
    }
    format!("{table}\n")
}

fn apply_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !styled {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

//! Display names for canonical columns.

use torist_model::{CanonicalColumn, split_namespaced};

use crate::locale::Locale;

/// Localized header for a canonical column.
pub fn column_label(column: CanonicalColumn, locale: Locale) -> &'static str {
    use CanonicalColumn::{
        Chinese, ChineseTraditional, English, EnglishIoc, Family, Index, Japanese, ScientificName,
    };
    match (locale, column) {
        (Locale::Sc, Index) => "编号",
        (Locale::Sc, ScientificName) => "学名",
        (Locale::Sc, Chinese) => "中文名",
        (Locale::Sc, ChineseTraditional) => "中文名(繁)",
        (Locale::Sc, English) => "英文名",
        (Locale::Sc, EnglishIoc) => "英文名(IOC)",
        (Locale::Sc, Japanese) => "日文名",
        (Locale::Sc, Family) => "科名",

        (Locale::Tc, Index) => "編號",
        (Locale::Tc, ScientificName) => "學名",
        (Locale::Tc, Chinese) => "中文名(簡)",
        (Locale::Tc, ChineseTraditional) => "中文名",
        (Locale::Tc, English) => "英文名",
        (Locale::Tc, EnglishIoc) => "英文名(IOC)",
        (Locale::Tc, Japanese) => "日文名",
        (Locale::Tc, Family) => "科名",

        (Locale::En, Index) => "#",
        (Locale::En, ScientificName) => "Sci-Name",
        (Locale::En, Chinese) => "Chinese(S)",
        (Locale::En, ChineseTraditional) => "Chinese(T)",
        (Locale::En, English) => "English",
        (Locale::En, EnglishIoc) => "English(IOC)",
        (Locale::En, Japanese) => "Japanese",
        (Locale::En, Family) => "Family",

        (Locale::Jp, Index) => "No.",
        (Locale::Jp, ScientificName) => "学名",
        (Locale::Jp, Chinese) => "中国語(簡)",
        (Locale::Jp, ChineseTraditional) => "中国語(繁)",
        (Locale::Jp, English) => "英語",
        (Locale::Jp, EnglishIoc) => "英語(IOC)",
        (Locale::Jp, Japanese) => "和名",
        (Locale::Jp, Family) => "科",
    }
}

/// Source whose traditional Chinese names are kept apart from IOC's in
/// simplified Chinese headers.
const TAIWAN: &str = "Taiwan";

/// Localized header for a column coming from checklist `source`.
///
/// ```
/// use torist_display::{Locale, source_column_label};
/// use torist_model::CanonicalColumn;
///
/// let column = CanonicalColumn::ChineseTraditional;
/// assert_eq!(source_column_label(column, Locale::Sc, "Taiwan"), "中文名(台)");
/// assert_eq!(source_column_label(column, Locale::Sc, "IOC"), "中文名(繁)");
/// ```
pub fn source_column_label(column: CanonicalColumn, locale: Locale, source: &str) -> &'static str {
    match (locale, column) {
        (Locale::Sc, CanonicalColumn::ChineseTraditional) if source == TAIWAN => "中文名(台)",
        _ => column_label(column, locale),
    }
}

/// Translates one merged-view column name, keeping any `" [label]"` suffix.
///
/// Names that are not canonical columns are returned unchanged.
pub fn translate_column(name: &str, locale: Locale) -> String {
    translate_in(name, locale, None)
}

pub fn translate_columns<S: AsRef<str>>(columns: &[S], locale: Locale) -> Vec<String> {
    columns
        .iter()
        .map(|name| translate_column(name.as_ref(), locale))
        .collect()
}

/// Like [`translate_columns`], with unsuffixed columns attributed to the
/// base checklist `base_source`.
pub fn translate_view_columns<S: AsRef<str>>(
    columns: &[S],
    locale: Locale,
    base_source: &str,
) -> Vec<String> {
    columns
        .iter()
        .map(|name| translate_in(name.as_ref(), locale, Some(base_source)))
        .collect()
}

fn translate_in(name: &str, locale: Locale, base_source: Option<&str>) -> String {
    let (base, label) = split_namespaced(name);
    let Some(column) = CanonicalColumn::from_name(base) else {
        return name.to_string();
    };
    let source = label.map(label_source).or(base_source).unwrap_or_default();
    let translated = source_column_label(column, locale, source);
    match label {
        Some(label) => format!("{translated} [{label}]"),
        None => translated.to_string(),
    }
}

/// `"Taiwan (2023)"` -> `"Taiwan"`.
fn label_source(label: &str) -> &str {
    label.rsplit_once(" (").map_or(label, |(source, _)| source)
}

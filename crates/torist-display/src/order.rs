//! Locale-dependent column ordering.

use torist_model::CanonicalColumn;

use crate::locale::Locale;

/// Canonical columns in display priority order for a locale.
///
/// `Index` and `ScientificName` always lead; the reader's own language
/// follows.
pub fn priority_order(locale: Locale) -> [CanonicalColumn; 8] {
    use CanonicalColumn::{
        Chinese, ChineseTraditional, English, EnglishIoc, Family, Index, Japanese, ScientificName,
    };
    match locale {
        Locale::Sc => [
            Index,
            ScientificName,
            Chinese,
            ChineseTraditional,
            English,
            EnglishIoc,
            Japanese,
            Family,
        ],
        Locale::Tc => [
            Index,
            ScientificName,
            ChineseTraditional,
            Chinese,
            English,
            EnglishIoc,
            Japanese,
            Family,
        ],
        Locale::Jp => [
            Index,
            ScientificName,
            Japanese,
            English,
            EnglishIoc,
            Chinese,
            ChineseTraditional,
            Family,
        ],
        Locale::En => [
            Index,
            ScientificName,
            English,
            EnglishIoc,
            ChineseTraditional,
            Chinese,
            Japanese,
            Family,
        ],
    }
}

/// Reorders merged-view column names for display.
///
/// Base columns come first in priority order, then compare columns
/// (`"{column} [{label}]"`) grouped by priority column, then anything else
/// in its original order. Every input name appears exactly once.
pub fn order_columns<S: AsRef<str>>(columns: &[S], locale: Locale) -> Vec<String> {
    let priority = priority_order(locale);
    let mut ordered: Vec<String> = Vec::with_capacity(columns.len());

    for column in priority {
        if let Some(name) = columns.iter().find(|name| name.as_ref() == column.as_str()) {
            push_unique(&mut ordered, name.as_ref());
        }
    }

    for column in priority {
        let prefix = format!("{} [", column.as_str());
        for name in columns.iter().filter(|name| name.as_ref().starts_with(&prefix)) {
            push_unique(&mut ordered, name.as_ref());
        }
    }

    for name in columns {
        push_unique(&mut ordered, name.as_ref());
    }
    ordered
}

fn push_unique(ordered: &mut Vec<String>, name: &str) {
    if !ordered.iter().any(|existing| existing == name) {
        ordered.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MERGED: [&str; 7] = [
        "Index",
        "ScientificName",
        "ChineseTraditional",
        "English",
        "Japanese [Japan (v8)]",
        "EnglishIOC [IOC (15.1)]",
        "Index [IOC (15.1)]",
    ];

    #[test]
    fn english_reader() {
        assert_eq!(
            order_columns(&MERGED, Locale::En),
            vec![
                "Index",
                "ScientificName",
                "English",
                "ChineseTraditional",
                "Index [IOC (15.1)]",
                "EnglishIOC [IOC (15.1)]",
                "Japanese [Japan (v8)]",
            ]
        );
    }

    #[test]
    fn japanese_reader() {
        assert_eq!(
            order_columns(&MERGED, Locale::Jp),
            vec![
                "Index",
                "ScientificName",
                "English",
                "ChineseTraditional",
                "Index [IOC (15.1)]",
                "Japanese [Japan (v8)]",
                "EnglishIOC [IOC (15.1)]",
            ]
        );
    }

    #[test]
    fn prefix_does_not_confuse_similar_columns() {
        let columns = ["ScientificName", "EnglishIOC [IOC (15.1)]", "English [Taiwan (2023)]"];
        assert_eq!(
            order_columns(&columns, Locale::En),
            vec!["ScientificName", "English [Taiwan (2023)]", "EnglishIOC [IOC (15.1)]"]
        );
    }

    #[test]
    fn unknown_columns_keep_their_place_at_the_end() {
        let columns = ["Notes", "ScientificName", "Extra"];
        assert_eq!(
            order_columns(&columns, Locale::Sc),
            vec!["ScientificName", "Notes", "Extra"]
        );
    }

    #[test]
    fn every_locale_covers_every_column() {
        for locale in Locale::ALL {
            let mut order = priority_order(locale).to_vec();
            order.sort();
            assert_eq!(order, CanonicalColumn::ALL.to_vec(), "{locale}");
        }
    }
}

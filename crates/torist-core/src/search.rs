//! Free-text filtering of merged views.

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray, PolarsResult};
use torist_common::string_values;
use torist_model::MergedView;

/// Rows of a merged view matching a query.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub frame: DataFrame,
    pub count: usize,
}

/// Keeps rows where any non-null cell contains `query`, ignoring case.
///
/// A blank query keeps every row.
pub fn search(view: &MergedView, query: &str) -> PolarsResult<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(SearchResult {
            frame: view.frame.clone(),
            count: view.height(),
        });
    }

    let mut keep = vec![false; view.height()];
    for name in view.column_names() {
        for (row, value) in string_values(&view.frame, &name)?.into_iter().enumerate() {
            if !keep[row] && value.is_some_and(|value| value.to_lowercase().contains(&needle)) {
                keep[row] = true;
            }
        }
    }

    let mask = BooleanChunked::from_slice("search".into(), &keep);
    let frame = view.frame.filter(&mask)?;
    Ok(SearchResult {
        count: frame.height(),
        frame,
    })
}

#[cfg(test)]
mod tests {
    use torist_common::string_column;
    use torist_model::ChecklistLabel;

    use super::*;

    fn view() -> MergedView {
        let frame = DataFrame::new(vec![
            string_column(
                "ScientificName",
                vec![Some("Turdus merula".to_string()), Some("Passer montanus".to_string())],
            ),
            string_column(
                "EnglishIOC [IOC (15.1)]",
                vec![Some("Common Blackbird".to_string()), None],
            ),
        ])
        .unwrap();
        MergedView {
            base: ChecklistLabel::new("Taiwan", "2023"),
            frame,
            links: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[test]
    fn matches_any_column_case_insensitively() {
        let result = search(&view(), "BLACKBIRD").unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(
            string_values(&result.frame, "ScientificName").unwrap(),
            vec![Some("Turdus merula".to_string())]
        );

        assert_eq!(search(&view(), "passer").unwrap().count, 1);
    }

    #[test]
    fn blank_query_keeps_everything() {
        assert_eq!(search(&view(), "").unwrap().count, 2);
        assert_eq!(search(&view(), "   ").unwrap().count, 2);
    }

    #[test]
    fn null_cells_never_match() {
        assert_eq!(search(&view(), "null").unwrap().count, 0);
        assert_eq!(search(&view(), "nan").unwrap().count, 0);
    }
}

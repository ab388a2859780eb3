//! Serializable results of the `labels` and `view` commands.

use serde::Serialize;
use torist_common::string_values;
use torist_core::{ChecklistRegistry, search};
use torist_display::{Locale, order_columns, translate_view_columns};
use torist_model::{LinkSummary, MergedView, SkippedSource};

/// One loaded checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    pub label: String,
    pub rows: usize,
}

/// What the registry loaded.
#[derive(Debug, Clone, Serialize)]
pub struct LabelsReport {
    pub checklists: Vec<ChecklistEntry>,
    pub synonyms: usize,
    pub skipped: Vec<SkippedSource>,
}

impl LabelsReport {
    pub fn from_registry(registry: &ChecklistRegistry) -> Self {
        let checklists = registry
            .labels()
            .into_iter()
            .map(|label| ChecklistEntry {
                label: label.to_string(),
                rows: registry.table(label).map_or(0, |table| table.height()),
            })
            .collect();
        Self {
            checklists,
            synonyms: registry.synonyms().len(),
            skipped: registry.skipped().to_vec(),
        }
    }
}

/// A merged, filtered and display-ordered view.
#[derive(Debug, Clone, Serialize)]
pub struct ViewReport {
    pub base: String,
    pub compares: Vec<String>,
    pub links: Vec<LinkSummary>,
    pub skipped: Vec<SkippedSource>,
    pub query: Option<String>,
    /// Rows matching the query, before `limit` is applied.
    pub matches: usize,
    /// Column names in display order.
    pub columns: Vec<String>,
    /// Translated headers, parallel to `columns`.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ViewReport {
    /// Orders, filters and truncates a merged view for display.
    ///
    /// A `limit` of zero keeps every matching row.
    pub fn from_view(
        view: &MergedView,
        query: Option<&str>,
        limit: usize,
        locale: Locale,
    ) -> anyhow::Result<Self> {
        let result = search(view, query.unwrap_or_default())?;
        let columns = order_columns(&view.column_names(), locale);
        let headers = translate_view_columns(&columns, locale, &view.base.source);

        let shown = if limit == 0 {
            result.count
        } else {
            result.count.min(limit)
        };
        let mut rows: Vec<Vec<Option<String>>> = vec![Vec::with_capacity(columns.len()); shown];
        for name in &columns {
            let values = string_values(&result.frame, name)?;
            for (row, value) in rows.iter_mut().zip(values) {
                row.push(value);
            }
        }

        Ok(Self {
            base: view.base.to_string(),
            compares: view.compare_labels().into_iter().map(str::to_string).collect(),
            links: view.links.clone(),
            skipped: view.skipped.clone(),
            query: query.map(str::to_string).filter(|q| !q.trim().is_empty()),
            matches: result.count,
            columns,
            headers,
            rows,
        })
    }

    /// Rows keyed by column name, for JSON output.
    pub fn records(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(name, value)| {
                        let value = value
                            .clone()
                            .map_or(serde_json::Value::Null, serde_json::Value::String);
                        (name.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "base": self.base,
            "compares": self.compares,
            "links": self.links,
            "skipped": self.skipped,
            "query": self.query,
            "matches": self.matches,
            "rows": self.records(),
        })
    }
}

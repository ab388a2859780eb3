//! Chained left-outer merge of checklists on scientific name.

use std::collections::{HashMap, HashSet};

use polars::prelude::{NamedFrom, Series, UInt32Chunked};
use torist_common::string_values;
use torist_model::{
    LinkSummary, MergedView, NormalizedTable, SCIENTIFIC_NAME, SkippedSource, SynonymMap,
    namespaced,
};
use tracing::{info_span, warn};

use crate::error::MergeError;

/// Merges `compares` into `base`, one source at a time.
///
/// Each base row is linked to a compare row by its own scientific name,
/// or failing that by its single-hop synonym. Unlinked rows keep null
/// compare columns and are never dropped. Compare columns other than the
/// key are renamed `"{column} [{label}]"`.
///
/// A compare source that repeats a linked name yields one output row per
/// repetition; such rows are counted in [`LinkSummary::fanout_rows`].
/// Compare sources listed twice, or equal to the base, are skipped.
///
/// # Errors
///
/// Fails when the base key column cannot be read or a frame operation fails.
/// A compare source whose key cannot be read is skipped instead.
pub fn merge(
    base: &NormalizedTable,
    compares: &[&NormalizedTable],
    synonyms: &SynonymMap,
) -> Result<MergedView, MergeError> {
    let base_label = base.label().to_string();
    let _span = info_span!("merge", base = %base_label, compares = compares.len()).entered();

    let mut frame = base.frame().clone();
    let mut keys = string_values(&frame, SCIENTIFIC_NAME).map_err(|e| MergeError::Schema {
        label: base_label.clone(),
        reason: e.to_string(),
    })?;

    let mut links = Vec::with_capacity(compares.len());
    let mut skipped = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for compare in compares {
        let label = compare.label().to_string();
        let duplicate = if label == base_label {
            Some("is the base checklist")
        } else if !seen.insert(label.clone()) {
            Some("already merged")
        } else {
            None
        };
        if let Some(reason) = duplicate {
            warn!(compare = %label, reason, "skipping compare checklist");
            skipped.push(SkippedSource {
                label,
                reason: reason.to_string(),
            });
            continue;
        }

        let compare_keys = match string_values(compare.frame(), SCIENTIFIC_NAME) {
            Ok(values) => values,
            Err(e) => {
                let err = MergeError::Schema {
                    label: label.clone(),
                    reason: e.to_string(),
                };
                warn!(%err, "skipping compare checklist");
                skipped.push(SkippedSource {
                    label,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let mut rows_by_name: HashMap<&str, Vec<usize>> = HashMap::new();
        for (row, name) in compare_keys.iter().enumerate() {
            if let Some(name) = name {
                rows_by_name.entry(name.as_str()).or_default().push(row);
            }
        }

        let mut summary = LinkSummary::new(label.as_str());
        let mut take: Vec<u32> = Vec::with_capacity(keys.len());
        let mut linked: Vec<Option<usize>> = Vec::with_capacity(keys.len());

        for (row, key) in keys.iter().enumerate() {
            let hit = key.as_deref().and_then(|name| {
                if let Some(rows) = rows_by_name.get(name) {
                    summary.direct += 1;
                    return Some(rows);
                }
                let rows = synonyms
                    .lookup(name)
                    .and_then(|alternate| rows_by_name.get(alternate))?;
                summary.via_synonym += 1;
                Some(rows)
            });

            match hit {
                Some(rows) => {
                    summary.fanout_rows += rows.len() - 1;
                    for compare_row in rows {
                        take.push(row as u32);
                        linked.push(Some(*compare_row));
                    }
                }
                None => {
                    summary.unresolved += 1;
                    take.push(row as u32);
                    linked.push(None);
                }
            }
        }

        if summary.fanout_rows > 0 {
            warn!(
                compare = %label,
                extra_rows = summary.fanout_rows,
                "compare checklist repeats scientific names; rows fanned out"
            );
            let idx = UInt32Chunked::from_vec("idx".into(), take.clone());
            frame = frame.take(&idx)?;
            keys = take.iter().map(|&row| keys[row as usize].clone()).collect();
        }

        for name in compare.column_names() {
            if name == SCIENTIFIC_NAME {
                continue;
            }
            let values = string_values(compare.frame(), &name)?;
            let gathered: Vec<Option<String>> = linked
                .iter()
                .map(|row| row.and_then(|row| values[row].clone()))
                .collect();
            frame.with_column(Series::new(namespaced(&name, &label).into(), gathered))?;
        }

        links.push(summary);
    }

    Ok(MergedView {
        base: base.label().clone(),
        frame,
        links,
        skipped,
    })
}

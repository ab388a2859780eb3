//! Loading every checklist of an index directory, once per process.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use torist_ingest::{IngestError, list_spreadsheet_files};
use torist_model::{MergedView, NormalizedTable, SkippedSource, SynonymMap};
use tracing::{debug, info, info_span, warn};

use crate::error::{MergeError, RegistryError};
use crate::merge::merge;
use crate::sources::{HandlerRegistry, SourceFile, default_handlers};
use crate::synonyms::build_synonyms;

/// All checklists loaded from one directory, keyed by label.
#[derive(Debug, Clone)]
pub struct ChecklistRegistry {
    dir: PathBuf,
    tables: BTreeMap<String, NormalizedTable>,
    synonyms: SynonymMap,
    skipped: Vec<SkippedSource>,
}

impl ChecklistRegistry {
    /// Loads `dir` with the default handlers.
    pub fn build(dir: &Path) -> Result<Self, RegistryError> {
        Self::build_with(dir, default_handlers())
    }

    /// Loads every spreadsheet in `dir` that one of `handlers` claims.
    ///
    /// Files that cannot be read or do not have the expected layout are
    /// recorded in [`skipped`](Self::skipped) and never abort the load. A
    /// change log that cannot be read does not prevent its checklist from
    /// loading. When two files produce the same label the later file wins.
    ///
    /// # Errors
    ///
    /// Fails when `dir` does not exist or nothing could be loaded from it.
    pub fn build_with(dir: &Path, handlers: &HandlerRegistry) -> Result<Self, RegistryError> {
        let _span = info_span!("build_registry", dir = %dir.display()).entered();

        let files = list_spreadsheet_files(dir).map_err(|e| match e {
            IngestError::DirectoryNotFound { path } => RegistryError::MissingDirectory { path },
            other => RegistryError::DirectoryRead(other),
        })?;

        let mut tables = BTreeMap::new();
        let mut synonyms = SynonymMap::new();
        let mut skipped = Vec::new();

        for path in files {
            let file = SourceFile::new(path);
            let Some(handler) = handlers.find(&file.file_name) else {
                debug!(file = %file.file_name, "no handler for file");
                skipped.push(skip(&file, "no matching checklist handler"));
                continue;
            };

            match handler.change_log(&file) {
                Ok(entries) if !entries.is_empty() => {
                    let found = build_synonyms(&entries);
                    info!(file = %file.file_name, entries = entries.len(), synonyms = found.len(), "read change log");
                    synonyms.extend(found);
                }
                Ok(_) => {}
                Err(err) => warn!(file = %file.file_name, %err, "change log unreadable"),
            }

            match handler.extract(&file) {
                Ok(Some(table)) => {
                    let label = table.label().to_string();
                    info!(file = %file.file_name, label = %label, rows = table.height(), "loaded checklist");
                    if tables.insert(label.clone(), table).is_some() {
                        warn!(label = %label, file = %file.file_name, "label loaded twice; keeping the later file");
                    }
                }
                Ok(None) => {
                    debug!(file = %file.file_name, handler = handler.name(), "unexpected sheet layout");
                    skipped.push(skip(&file, "unexpected sheet layout"));
                }
                Err(err) => {
                    warn!(file = %file.file_name, %err, "failed to load checklist");
                    skipped.push(skip(&file, &err.to_string()));
                }
            }
        }

        if tables.is_empty() {
            return Err(RegistryError::NoChecklists {
                path: dir.to_path_buf(),
            });
        }

        info!(
            checklists = tables.len(),
            synonyms = synonyms.len(),
            skipped = skipped.len(),
            "registry ready"
        );
        Ok(Self {
            dir: dir.to_path_buf(),
            tables,
            synonyms,
            skipped,
        })
    }

    /// Directory the registry was loaded from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loaded labels in sorted order.
    pub fn labels(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    pub fn table(&self, label: &str) -> Option<&NormalizedTable> {
        self.tables.get(label)
    }

    pub fn synonyms(&self) -> &SynonymMap {
        &self.synonyms
    }

    /// Files left out of the load, with the reason.
    pub fn skipped(&self) -> &[SkippedSource] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Merges checklists by label.
    ///
    /// Unknown compare labels are skipped and reported in the view.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::UnknownLabel`] when `base` is not loaded.
    pub fn merge_labels(&self, base: &str, compares: &[&str]) -> Result<MergedView, MergeError> {
        let base_table = self.table(base).ok_or_else(|| MergeError::UnknownLabel {
            label: base.to_string(),
        })?;

        let mut unknown = Vec::new();
        let mut tables = Vec::with_capacity(compares.len());
        for label in compares {
            match self.table(label) {
                Some(table) => tables.push(table),
                None => {
                    warn!(compare = %label, "unknown compare checklist; skipping");
                    unknown.push(SkippedSource {
                        label: (*label).to_string(),
                        reason: "unknown checklist".to_string(),
                    });
                }
            }
        }

        let mut view = merge(base_table, &tables, &self.synonyms)?;
        view.skipped.extend(unknown);
        Ok(view)
    }

    /// Suggested compare checklist for `base`; see [`default_compare`].
    pub fn default_compare(&self, base: &str) -> Option<&str> {
        default_compare(&self.labels(), base)
    }
}

fn skip(file: &SourceFile, reason: &str) -> SkippedSource {
    SkippedSource {
        label: file.file_name.clone(),
        reason: reason.to_string(),
    }
}

/// The latest IOC checklist other than `base`.
///
/// Releases are compared by their numeric parts, so `IOC (15.1)` is later
/// than `IOC (9.2)`.
pub fn default_compare<'a>(labels: &[&'a str], base: &str) -> Option<&'a str> {
    labels
        .iter()
        .copied()
        .filter(|label| *label != base && label.contains("IOC"))
        .max_by(|a, b| release_key(a).cmp(&release_key(b)).then_with(|| a.cmp(b)))
}

fn release_key(label: &str) -> Vec<u64> {
    label
        .split(|c: char| !c.is_ascii_digit())
        .filter_map(|part| part.parse().ok())
        .collect()
}

/// Process-lifetime registry cache.
///
/// The first successful build is kept; later calls return it without
/// touching the filesystem, even for a different directory. Failed builds
/// are not cached.
#[derive(Debug, Default)]
pub struct RegistryCache {
    registry: OnceLock<ChecklistRegistry>,
}

impl RegistryCache {
    pub const fn new() -> Self {
        Self {
            registry: OnceLock::new(),
        }
    }

    /// The process-wide cache.
    pub fn shared() -> &'static RegistryCache {
        static SHARED: RegistryCache = RegistryCache::new();
        &SHARED
    }

    pub fn get(&self) -> Option<&ChecklistRegistry> {
        self.registry.get()
    }

    pub fn get_or_build(&self, dir: &Path) -> Result<&ChecklistRegistry, RegistryError> {
        if let Some(registry) = self.registry.get() {
            if registry.dir() != dir {
                warn!(
                    cached = %registry.dir().display(),
                    requested = %dir.display(),
                    "registry already loaded from another directory"
                );
            }
            return Ok(registry);
        }
        let built = ChecklistRegistry::build(dir)?;
        Ok(self.registry.get_or_init(|| built))
    }
}

//! Checklist reconciliation core.
//!
//! Loads every recognized checklist in an index directory into a
//! [`ChecklistRegistry`], then merges a base checklist with any number of
//! compare checklists on scientific name, resolving renamed taxa through
//! the synonym map harvested from change logs.
//!
//! ```ignore
//! use torist_core::{RegistryCache, search};
//!
//! let registry = RegistryCache::shared().get_or_build("original_index".as_ref())?;
//! let view = registry.merge_labels("Taiwan (2023)", &["IOC (15.1)"])?;
//! let hits = search(&view, "passer")?;
//! println!("{} matching rows", hits.count);
//! ```

pub mod error;
pub mod merge;
pub mod registry;
pub mod search;
pub mod sources;
pub mod synonyms;

pub use error::{MergeError, RegistryError, SourceError, SynonymError};
pub use merge::merge;
pub use registry::{ChecklistRegistry, RegistryCache, default_compare};
pub use search::{SearchResult, search};
pub use sources::{HandlerRegistry, SourceFile, SourceHandler, default_handlers};
pub use synonyms::{build_synonyms, parse_synonym_entry};

//! Error types for normalization, synonym parsing, merging and loading.

use std::path::PathBuf;

use thiserror::Error;
use torist_ingest::IngestError;
use torist_model::ModelError;

/// Failure while normalizing one source file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// The sheet was read but lacks a column the handler needs.
    #[error("{label}: {reason}")]
    Schema { label: String, reason: String },
}

/// A change-log entry that does not describe a scientific-name change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynonymError {
    #[error("not a scientific-name change: {entry}")]
    Malformed { entry: String },
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("unknown checklist: {label}")]
    UnknownLabel { label: String },

    /// A table lacks the `ScientificName` join key.
    #[error("{label} cannot be merged: {reason}")]
    Schema { label: String, reason: String },

    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
}

/// Load-level failures. Individual bad files never produce these.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("index directory not found: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("no checklists could be loaded from {path}")]
    NoChecklists { path: PathBuf },

    #[error("failed to read index directory: {0}")]
    DirectoryRead(#[source] IngestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_checklist() {
        let err = MergeError::UnknownLabel {
            label: "IOC (99.9)".to_string(),
        };
        assert_eq!(err.to_string(), "unknown checklist: IOC (99.9)");

        let err = SourceError::Schema {
            label: "Taiwan (2023)".to_string(),
            reason: "change log has no '變動細項' column".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Taiwan (2023): change log has no '變動細項' column"
        );
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("table {label} has no '{column}' column")]
    MissingColumn { label: String, column: String },
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, ModelError>;

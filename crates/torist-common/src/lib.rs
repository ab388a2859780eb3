//! Shared utilities for Torist crates.
//!
//! This crate provides helpers used across the workspace: rendering of
//! spreadsheet numbers, string column construction,
//! and listing-index normalization.

pub mod index;
pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use index::normalize_index;
pub use polars::{format_numeric, string_column, string_values};

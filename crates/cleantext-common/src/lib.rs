//! Shared utilities for the text cleaning crates.
//!
//! This crate provides the Polars-facing helpers used across the workspace:
//! column kind classification and numeric-to-text rendering.

pub mod polars;

// Re-export commonly used items at crate root for convenience
pub use polars::{ColumnKind, format_numeric, numeric_to_text};

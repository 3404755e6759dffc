//! Column-wise text cleaning for Polars DataFrames.
//!
//! Cleans selected columns by filtering characters, trimming or condensing
//! whitespace, and changing case. Parameters may come from any stored schema
//! version; they are migrated before use.
//!
//! # Overview
//!
//! - **pattern**: compiles keep/delete character selections into one regex
//! - **pipeline**: the fixed per-value operation order
//! - **executor**: column validation, kind dispatch, and write-back
//!
//! # Example
//!
//! ```
//! use cleantext_normalization::render;
//! use polars::prelude::*;
//! use serde_json::json;
//!
//! let df = df! { "name" => &["  Ada ", "grace"] }.unwrap();
//! let params = json!({
//!     "colnames": "name",
//!     "type_space": 0,
//!     "type_caps": 1,
//!     "type_char": 0,
//! });
//!
//! let cleaned = render(df, params).unwrap();
//! let names: Vec<Option<&str>> = cleaned.column("name").unwrap().str().unwrap().into_iter().collect();
//! assert_eq!(names, vec![Some("ADA"), Some("GRACE")]);
//! ```

mod error;
mod executor;

pub mod pattern;
pub mod pipeline;

// Core types
pub use pipeline::TextPipeline;

// Error type
pub use error::{CleanTextError, Result};

// Execution
pub use executor::{CleanSummary, ColumnSummary, clean_text, render};

// Parameter model, re-exported for callers that only depend on this crate
pub use cleantext_model::{
    CaseMode, CharCategory, CharFilterMode, CleanTextParams, ParamsError, SpaceMode,
    migrate_params,
};

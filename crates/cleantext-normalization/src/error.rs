//! Error types for the text cleaning engine.

use cleantext_model::ParamsError;
use thiserror::Error;

/// Errors that can occur while cleaning a DataFrame.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanTextError {
    /// A requested column does not exist in the DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    UnrecognizedColumn {
        /// Requested column name.
        column: String,
    },

    /// The parameter record could not be migrated or read.
    #[error(transparent)]
    Params(#[from] ParamsError),

    /// The character filter could not be compiled.
    #[error("failed to build character pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanTextError>;

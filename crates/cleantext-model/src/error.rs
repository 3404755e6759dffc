//! Error types for parameter handling.

use thiserror::Error;

/// Errors raised while migrating or reading a parameter record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParamsError {
    /// The record is not a JSON object.
    #[error("parameters must be an object, found {found}")]
    NotAnObject { found: String },

    /// A field holds a value no schema version accepts.
    #[error("invalid {field} value {value}: {reason}")]
    Malformed {
        field: String,
        value: String,
        reason: String,
    },

    /// The migrated record does not match the current schema.
    #[error("invalid parameters: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl ParamsError {
    pub(crate) fn malformed(
        field: &str,
        value: &serde_json::Value,
        reason: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for parameter operations.
pub type Result<T> = std::result::Result<T, ParamsError>;

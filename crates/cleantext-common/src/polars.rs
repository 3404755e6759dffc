//! Polars column helpers.
//!
//! This module classifies columns into the storage kinds the cleaning engine
//! knows how to handle, and renders numeric `AnyValue`s as their literal text.

use polars::prelude::*;

/// Storage kind of a column, as seen by the cleaning engine.
///
/// The set is closed: every Polars dtype maps onto exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Plain `String` column.
    PlainText,
    /// Text stored with deduplicated categories.
    CategoricalText,
    /// Integer or floating-point column.
    Numeric,
    /// Anything else (boolean, temporal, enum, nested, ...). Never touched.
    Other,
}

impl ColumnKind {
    /// Classify a Polars dtype.
    ///
    /// `Enum` columns are reported as [`ColumnKind::Other`]: their category set
    /// is frozen, so cleaned values could not be re-encoded into them.
    pub fn of(dtype: &DataType) -> Self {
        match dtype {
            DataType::String => Self::PlainText,
            DataType::Categorical(..) => Self::CategoricalText,
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64 => Self::Numeric,
            _ => Self::Other,
        }
    }

    /// Returns a human-readable name for log output.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::PlainText => "text",
            Self::CategoricalText => "categorical",
            Self::Numeric => "numeric",
            Self::Other => "other",
        }
    }
}

/// Renders a numeric `AnyValue` as its literal text.
///
/// Returns `None` for `Null` so absent cells stay absent. Integers keep their
/// exact digits; floats use the shortest representation that round-trips,
/// so `1.0` renders as `"1"` and `2.50` as `"2.5"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use cleantext_common::numeric_to_text;
///
/// assert_eq!(numeric_to_text(AnyValue::Null), None);
/// assert_eq!(numeric_to_text(AnyValue::Int64(42)), Some("42".to_string()));
/// assert_eq!(numeric_to_text(AnyValue::Float64(1.0)), Some("1".to_string()));
/// ```
pub fn numeric_to_text(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(v),
        AnyValue::Float64(v) => format_numeric(v),
        other => other.to_string(),
    };
    Some(text)
}

/// Formats a floating-point number without trailing zeros after the decimal point.
///
/// Integer-valued floats like `40.0` are formatted as `"40"`, not `"4"`.
///
/// # Examples
///
/// ```
/// use cleantext_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// assert_eq!(format_numeric(-0.25), "-0.25");
/// assert_eq!(format_numeric(0.1f32), "0.1");
/// ```
pub fn format_numeric<T: std::fmt::Display>(v: T) -> String {
    let s = v.to_string();
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

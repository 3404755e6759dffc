//! DataFrame cleaning execution.
//!
//! Applies a [`TextPipeline`] to every requested column, dispatching on the
//! column's storage kind:
//!
//! - **text**: cleaned in place, nulls stay null
//! - **categorical**: cleaned as text, then re-encoded with the column's dtype
//! - **numeric**: rendered as literal text, cleaned, and left as text
//! - **other**: passed through untouched

use std::collections::BTreeSet;

use cleantext_common::{ColumnKind, numeric_to_text};
use cleantext_model::CleanTextParams;
use polars::prelude::*;

use crate::error::{CleanTextError, Result};
use crate::pipeline::TextPipeline;

/// Outcome of cleaning one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Storage kind the column had before cleaning.
    pub kind: ColumnKind,
    /// Number of present values whose text changed.
    pub changed_values: usize,
}

/// Outcome of a cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Per-column results, in request order. Empty when the run was a no-op.
    pub columns: Vec<ColumnSummary>,
}

impl CleanSummary {
    /// Whether no column was processed.
    pub fn is_noop(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of values changed across all columns.
    pub fn changed_values(&self) -> usize {
        self.columns.iter().map(|c| c.changed_values).sum()
    }

    /// Summary for a column, if it was processed.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Clean the requested columns of `df` in place.
///
/// Returns without touching `df` when the parameters describe no change.
/// Every requested name is checked before any column is rewritten, and all
/// replacement columns are built before the first one is written back, so a
/// failed call leaves `df` unmodified.
///
/// # Errors
///
/// - [`CleanTextError::UnrecognizedColumn`] if a requested column is missing
/// - [`CleanTextError::Pattern`] if the character filter fails to compile
/// - [`CleanTextError::Polars`] if a column cannot be read or re-encoded
pub fn clean_text(df: &mut DataFrame, params: &CleanTextParams) -> Result<CleanSummary> {
    if params.is_noop() {
        tracing::debug!("Cleaning parameters describe no change, skipping");
        return Ok(CleanSummary::default());
    }

    let names = requested_columns(df, &params.columns)?;
    let pipeline = TextPipeline::from_params(params)?;

    let mut summary = CleanSummary::default();
    let mut replacements: Vec<Series> = Vec::with_capacity(names.len());

    for name in names {
        let column = df.column(name)?;
        let kind = ColumnKind::of(column.dtype());

        let cleaned = match kind {
            ColumnKind::PlainText => Some(clean_plain(column, &pipeline)?),
            ColumnKind::CategoricalText => Some(clean_categorical(column, &pipeline)?),
            ColumnKind::Numeric => Some(clean_numeric(column, &pipeline)?),
            ColumnKind::Other => None,
        };

        let changed_values = match cleaned {
            Some((series, changed)) => {
                replacements.push(series);
                changed
            }
            None => {
                tracing::debug!(
                    column = %name,
                    dtype = %column.dtype(),
                    "Column kind is not cleanable, passing through"
                );
                0
            }
        };

        tracing::debug!(
            column = %name,
            kind = kind.display_name(),
            changed = changed_values,
            "Cleaned column"
        );
        summary.columns.push(ColumnSummary {
            name: name.to_string(),
            kind,
            changed_values,
        });
    }

    for series in replacements {
        df.with_column(series)?;
    }

    tracing::info!(
        columns = summary.columns.len(),
        changed = summary.changed_values(),
        "Text cleaning complete"
    );

    Ok(summary)
}

/// Migrate a stored parameter record, clean `df` with it, and return `df`.
///
/// # Errors
///
/// Returns [`CleanTextError::Params`] for malformed records, otherwise the
/// errors of [`clean_text`].
pub fn render(mut df: DataFrame, params: serde_json::Value) -> Result<DataFrame> {
    let params = CleanTextParams::from_value(params)?;
    clean_text(&mut df, &params)?;
    Ok(df)
}

/// Validate requested names against `df`, dropping repeats.
fn requested_columns<'a>(df: &DataFrame, requested: &'a [String]) -> Result<Vec<&'a str>> {
    let mut seen = BTreeSet::new();
    let mut names = Vec::with_capacity(requested.len());

    for name in requested {
        if df.column(name).is_err() {
            return Err(CleanTextError::UnrecognizedColumn {
                column: name.clone(),
            });
        }
        if seen.insert(name.as_str()) {
            names.push(name.as_str());
        }
    }

    Ok(names)
}

/// Clean a `String` column.
fn clean_plain(column: &Column, pipeline: &TextPipeline) -> Result<(Series, usize)> {
    Ok(clean_strings(column.name().clone(), column.str()?, pipeline))
}

/// Clean a categorical column and re-encode it with its original dtype.
fn clean_categorical(column: &Column, pipeline: &TextPipeline) -> Result<(Series, usize)> {
    let text = column.cast(&DataType::String)?;
    let (series, changed) = clean_strings(column.name().clone(), text.str()?, pipeline);
    Ok((series.cast(column.dtype())?, changed))
}

/// Clean a numeric column through its literal text; the result is a `String` column.
fn clean_numeric(column: &Column, pipeline: &TextPipeline) -> Result<(Series, usize)> {
    let mut changed = 0;
    let mut values: Vec<Option<String>> = Vec::with_capacity(column.len());

    for idx in 0..column.len() {
        let cleaned = numeric_to_text(column.get(idx)?).map(|text| {
            let cleaned = pipeline.apply(&text);
            if cleaned != text {
                changed += 1;
            }
            cleaned
        });
        values.push(cleaned);
    }

    Ok((Series::new(column.name().clone(), values), changed))
}

fn clean_strings(
    name: PlSmallStr,
    values: &StringChunked,
    pipeline: &TextPipeline,
) -> (Series, usize) {
    let mut changed = 0;
    let cleaned: Vec<Option<String>> = values
        .into_iter()
        .map(|value| {
            value.map(|raw| {
                let cleaned = pipeline.apply(raw);
                if cleaned != raw {
                    changed += 1;
                }
                cleaned
            })
        })
        .collect();

    (Series::new(name, cleaned), changed)
}

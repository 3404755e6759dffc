//! Current parameter schema.
//!
//! Field names follow the stored record keys (`colnames`, `type_space`, ...)
//! so a migrated JSON record deserializes directly into [`CleanTextParams`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::CharCategory;
use crate::error::Result;
use crate::migrate::migrate_params;

/// Whitespace handling applied after character filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpaceMode {
    /// Strip leading and trailing whitespace.
    #[default]
    #[serde(rename = "trim_around")]
    TrimBoth,
    /// Strip leading whitespace only.
    #[serde(rename = "trim_before")]
    TrimLeading,
    /// Strip trailing whitespace only.
    #[serde(rename = "trim_after")]
    TrimTrailing,
    /// Remove every whitespace character.
    #[serde(rename = "remove_all")]
    RemoveAllWhitespace,
    #[serde(rename = "nop")]
    NoChange,
}

/// Letter case change, applied last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    #[serde(rename = "nop")]
    NoChange,
    Upper,
    Lower,
}

/// Whether selected characters are kept (everything else deleted) or deleted.
///
/// Stored as a boolean: `true` keeps, `false` deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum CharFilterMode {
    Keep,
    #[default]
    Delete,
}

impl From<bool> for CharFilterMode {
    fn from(keep: bool) -> Self {
        if keep { Self::Keep } else { Self::Delete }
    }
}

impl From<CharFilterMode> for bool {
    fn from(mode: CharFilterMode) -> Self {
        mode == CharFilterMode::Keep
    }
}

/// Text cleaning parameters in the current schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanTextParams {
    /// Columns to clean, in request order.
    #[serde(rename = "colnames")]
    pub columns: Vec<String>,

    #[serde(rename = "type_space")]
    pub space_mode: SpaceMode,

    /// Collapse whitespace runs to a single space.
    /// Ignored under [`SpaceMode::RemoveAllWhitespace`].
    pub condense: bool,

    #[serde(rename = "type_caps")]
    pub case_mode: CaseMode,

    #[serde(rename = "type_char")]
    pub char_filter_mode: CharFilterMode,

    pub number: bool,
    pub letter: bool,
    #[serde(rename = "punc")]
    pub punctuation: bool,

    /// Whether `custom_chars` takes part in filtering.
    #[serde(rename = "custom")]
    pub use_custom_chars: bool,

    /// Custom character selection; only its distinct characters matter.
    #[serde(rename = "chars")]
    pub custom_chars: String,
}

impl CleanTextParams {
    /// Create default parameters (no columns, so cleaning is a no-op).
    pub fn new() -> Self {
        Self::default()
    }

    /// Migrate a stored record of any schema version and read it.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let migrated = migrate_params(value)?;
        Ok(serde_json::from_value(migrated)?)
    }

    /// Serialize into a current-schema record.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_space_mode(mut self, mode: SpaceMode) -> Self {
        self.space_mode = mode;
        self
    }

    pub fn with_condense(mut self, condense: bool) -> Self {
        self.condense = condense;
        self
    }

    pub fn with_case_mode(mut self, mode: CaseMode) -> Self {
        self.case_mode = mode;
        self
    }

    pub fn with_char_filter_mode(mut self, mode: CharFilterMode) -> Self {
        self.char_filter_mode = mode;
        self
    }

    /// Select or deselect a character category.
    pub fn with_category(mut self, category: CharCategory, selected: bool) -> Self {
        match category {
            CharCategory::Number => self.number = selected,
            CharCategory::Letter => self.letter = selected,
            CharCategory::Punctuation => self.punctuation = selected,
        }
        self
    }

    /// Enable the custom character set.
    pub fn with_custom_chars(mut self, chars: impl Into<String>) -> Self {
        self.use_custom_chars = true;
        self.custom_chars = chars.into();
        self
    }

    /// Selected categories, in pattern order.
    pub fn char_categories(&self) -> Vec<CharCategory> {
        CharCategory::ALL
            .into_iter()
            .filter(|category| match category {
                CharCategory::Number => self.number,
                CharCategory::Letter => self.letter,
                CharCategory::Punctuation => self.punctuation,
            })
            .collect()
    }

    /// Distinct custom characters, empty when the custom set is disabled.
    pub fn custom_char_set(&self) -> BTreeSet<char> {
        if self.use_custom_chars {
            self.custom_chars.chars().collect()
        } else {
            BTreeSet::new()
        }
    }

    /// Condense flag as applied: always false when all whitespace is removed.
    pub fn effective_condense(&self) -> bool {
        self.condense && self.space_mode != SpaceMode::RemoveAllWhitespace
    }

    /// Whether any character filtering takes place.
    pub fn filters_chars(&self) -> bool {
        self.number
            || self.letter
            || self.punctuation
            || (self.use_custom_chars && !self.custom_chars.is_empty())
    }

    /// Whether cleaning would leave every value unchanged.
    pub fn is_noop(&self) -> bool {
        self.columns.is_empty()
            || (self.space_mode == SpaceMode::NoChange
                && !self.effective_condense()
                && self.case_mode == CaseMode::NoChange
                && !self.filters_chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_noop() {
        let params = CleanTextParams::new();
        assert!(params.is_noop());
        assert_eq!(params.space_mode, SpaceMode::TrimBoth);
        assert_eq!(params.char_filter_mode, CharFilterMode::Delete);
    }

    #[test]
    fn test_deserialize_current_schema() {
        let params: CleanTextParams = serde_json::from_value(json!({
            "colnames": ["A", "B"],
            "type_space": "remove_all",
            "condense": true,
            "type_caps": "upper",
            "type_char": true,
            "letter": true,
            "number": false,
            "punc": true,
            "custom": true,
            "chars": "xyx",
        }))
        .unwrap();

        assert_eq!(params.columns, vec!["A", "B"]);
        assert_eq!(params.space_mode, SpaceMode::RemoveAllWhitespace);
        assert_eq!(params.case_mode, CaseMode::Upper);
        assert_eq!(params.char_filter_mode, CharFilterMode::Keep);
        assert_eq!(
            params.char_categories(),
            vec![CharCategory::Letter, CharCategory::Punctuation]
        );
        assert_eq!(params.custom_char_set(), BTreeSet::from(['x', 'y']));
        assert!(!params.effective_condense());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let params: CleanTextParams = serde_json::from_value(json!({
            "colnames": ["A"],
        }))
        .unwrap();
        assert_eq!(params, CleanTextParams::new().with_columns(["A"]));
    }

    #[test]
    fn test_unknown_space_mode_rejected() {
        let result = serde_json::from_value::<CleanTextParams>(json!({
            "type_space": "squeeze",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_stored_keys() {
        let value = CleanTextParams::new()
            .with_columns(["A"])
            .with_char_filter_mode(CharFilterMode::Keep)
            .to_value()
            .unwrap();
        assert_eq!(value["colnames"], json!(["A"]));
        assert_eq!(value["type_space"], json!("trim_around"));
        assert_eq!(value["type_caps"], json!("nop"));
        assert_eq!(value["type_char"], json!(true));
        assert_eq!(value["punc"], json!(false));
        assert_eq!(value["chars"], json!(""));
    }

    #[test]
    fn test_custom_set_ignored_when_disabled() {
        let mut params = CleanTextParams::new().with_custom_chars("abc");
        assert!(params.filters_chars());
        params.use_custom_chars = false;
        assert!(params.custom_char_set().is_empty());
        assert!(!params.filters_chars());
    }

    #[test]
    fn test_empty_custom_chars_do_not_filter() {
        let params = CleanTextParams::new()
            .with_columns(["A"])
            .with_space_mode(SpaceMode::NoChange)
            .with_custom_chars("");
        assert!(!params.filters_chars());
        assert!(params.is_noop());
    }

    #[test]
    fn test_condense_alone_is_not_noop() {
        let params = CleanTextParams::new()
            .with_columns(["A"])
            .with_space_mode(SpaceMode::NoChange)
            .with_condense(true);
        assert!(!params.is_noop());
    }

    #[test]
    fn test_keep_mode_without_selection_is_noop() {
        let params = CleanTextParams::new()
            .with_columns(["A"])
            .with_space_mode(SpaceMode::NoChange)
            .with_char_filter_mode(CharFilterMode::Keep);
        assert!(params.is_noop());
    }
}

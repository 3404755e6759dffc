//! Per-value normalization pipeline.
//!
//! Operations run in a fixed order:
//!
//! 1. character filter (remove every pattern match)
//! 2. whitespace trimming or removal
//! 3. condensing whitespace runs to one space
//! 4. case change
//!
//! Filtering runs first so that deleted characters cannot strand whitespace
//! at the edges of a value after trimming.

use std::borrow::Cow;
use std::sync::LazyLock;

use cleantext_model::{CaseMode, CleanTextParams, SpaceMode};
use regex::Regex;

use crate::error::Result;
use crate::pattern::compile_char_pattern;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Compiled cleaning operations for a single text value.
#[derive(Debug, Clone)]
pub struct TextPipeline {
    pattern: Option<Regex>,
    space_mode: SpaceMode,
    condense: bool,
    case_mode: CaseMode,
}

impl TextPipeline {
    /// Assemble a pipeline from already-resolved parts.
    ///
    /// `condense` is dropped under [`SpaceMode::RemoveAllWhitespace`], where
    /// there is no whitespace left to condense.
    pub fn new(
        pattern: Option<Regex>,
        space_mode: SpaceMode,
        condense: bool,
        case_mode: CaseMode,
    ) -> Self {
        Self {
            pattern,
            space_mode,
            condense: condense && space_mode != SpaceMode::RemoveAllWhitespace,
            case_mode,
        }
    }

    /// Compile the pipeline described by `params`.
    pub fn from_params(params: &CleanTextParams) -> Result<Self> {
        let pattern = compile_char_pattern(
            params.char_filter_mode,
            &params.char_categories(),
            &params.custom_char_set(),
        )?;
        Ok(Self::new(
            pattern,
            params.space_mode,
            params.condense,
            params.case_mode,
        ))
    }

    /// Whether the pipeline filters characters.
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }

    /// Whether condensing is applied.
    pub fn condenses(&self) -> bool {
        self.condense
    }

    /// Clean one value.
    pub fn apply(&self, value: &str) -> String {
        let filtered = match &self.pattern {
            Some(pattern) => pattern.replace_all(value, ""),
            None => Cow::Borrowed(value),
        };
        let spaced = apply_space_mode(self.space_mode, &filtered);
        let condensed = if self.condense {
            WHITESPACE_RUN.replace_all(&spaced, " ")
        } else {
            Cow::Borrowed(spaced.as_ref())
        };
        match self.case_mode {
            CaseMode::NoChange => condensed.into_owned(),
            CaseMode::Upper => condensed.to_uppercase(),
            CaseMode::Lower => condensed.to_lowercase(),
        }
    }
}

fn apply_space_mode(mode: SpaceMode, value: &str) -> Cow<'_, str> {
    match mode {
        SpaceMode::TrimBoth => Cow::Borrowed(value.trim()),
        SpaceMode::TrimLeading => Cow::Borrowed(value.trim_start()),
        SpaceMode::TrimTrailing => Cow::Borrowed(value.trim_end()),
        SpaceMode::RemoveAllWhitespace => {
            if value.contains(char::is_whitespace) {
                Cow::Owned(value.chars().filter(|ch| !ch.is_whitespace()).collect())
            } else {
                Cow::Borrowed(value)
            }
        }
        SpaceMode::NoChange => Cow::Borrowed(value),
    }
}

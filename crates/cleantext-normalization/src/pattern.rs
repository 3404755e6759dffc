//! Character filter compilation.
//!
//! A filter selection (categories plus custom characters) compiles to a
//! single character class:
//!
//! - **Delete**: `[<selection>]` matches the characters to remove.
//! - **Keep**: `[^\s<selection>]` matches everything outside the selection,
//!   except whitespace, which is never removed by the filter step.
//!
//! Removing every match of the compiled regex applies the filter.

use std::collections::BTreeSet;

use cleantext_model::{CharCategory, CharFilterMode};
use regex::Regex;

use crate::error::Result;

/// Build the regex source for a filter selection.
///
/// Returns `None` when nothing is selected: no categories and no custom
/// characters means no filtering, whichever the mode.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use cleantext_model::{CharCategory, CharFilterMode};
/// use cleantext_normalization::pattern::char_pattern_source;
///
/// let source = char_pattern_source(CharFilterMode::Keep, &[CharCategory::Letter], &BTreeSet::new());
/// assert_eq!(source.as_deref(), Some(r"[^\s\p{L}]"));
/// assert_eq!(char_pattern_source(CharFilterMode::Keep, &[], &BTreeSet::new()), None);
/// ```
pub fn char_pattern_source(
    mode: CharFilterMode,
    categories: &[CharCategory],
    custom: &BTreeSet<char>,
) -> Option<String> {
    if categories.is_empty() && custom.is_empty() {
        return None;
    }

    let mut class = String::new();
    for category in categories {
        class.push_str(r"\p{");
        class.push_str(category.unicode_group());
        class.push('}');
    }
    let mut buf = [0u8; 4];
    for ch in custom {
        class.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
    }

    Some(match mode {
        CharFilterMode::Delete => format!("[{class}]"),
        CharFilterMode::Keep => format!(r"[^\s{class}]"),
    })
}

/// Compile the character filter for a selection.
///
/// # Errors
///
/// Returns [`crate::CleanTextError::Pattern`] if the regex fails to compile,
/// which indicates an escaping bug rather than bad input.
pub fn compile_char_pattern(
    mode: CharFilterMode,
    categories: &[CharCategory],
    custom: &BTreeSet<char>,
) -> Result<Option<Regex>> {
    let Some(source) = char_pattern_source(mode, categories, custom) else {
        return Ok(None);
    };
    tracing::debug!(pattern = %source, "Compiled character filter");
    Ok(Some(Regex::new(&source)?))
}

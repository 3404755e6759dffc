//! Character categories selectable for keep/delete filtering.

/// A group of Unicode general categories.
///
/// Each variant covers every subcategory of its group: `Number` is `Nd`, `Nl`
/// and `No`; `Letter` is `Lu`, `Ll`, `Lt`, `Lm` and `Lo`; `Punctuation` is
/// `Pc`, `Pd`, `Ps`, `Pe`, `Pi`, `Pf` and `Po`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharCategory {
    Number,
    Letter,
    Punctuation,
}

impl CharCategory {
    /// All categories, in pattern order.
    pub const ALL: [Self; 3] = [Self::Number, Self::Letter, Self::Punctuation];

    /// Unicode general-category group name, as used in `\p{..}` classes.
    pub fn unicode_group(self) -> &'static str {
        match self {
            Self::Number => "N",
            Self::Letter => "L",
            Self::Punctuation => "P",
        }
    }

    /// Key of the boolean selector in a stored parameter record.
    pub fn param_key(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Letter => "letter",
            Self::Punctuation => "punc",
        }
    }

    /// Parse a category from its stored key or display name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "number" | "numbers" => Some(Self::Number),
            "letter" | "letters" => Some(Self::Letter),
            "punc" | "punctuation" => Some(Self::Punctuation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_groups() {
        assert_eq!(CharCategory::Number.unicode_group(), "N");
        assert_eq!(CharCategory::Letter.unicode_group(), "L");
        assert_eq!(CharCategory::Punctuation.unicode_group(), "P");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(CharCategory::from_name("number"), Some(CharCategory::Number));
        assert_eq!(CharCategory::from_name(" Letter "), Some(CharCategory::Letter));
        assert_eq!(CharCategory::from_name("punc"), Some(CharCategory::Punctuation));
        assert_eq!(
            CharCategory::from_name("punctuation"),
            Some(CharCategory::Punctuation)
        );
        assert_eq!(CharCategory::from_name("symbol"), None);
    }

    #[test]
    fn test_param_keys_round_trip() {
        for category in CharCategory::ALL {
            assert_eq!(CharCategory::from_name(category.param_key()), Some(category));
        }
    }
}

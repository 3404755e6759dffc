//! Property tests for the per-value pipeline.

use cleantext_normalization::{
    CaseMode, CharCategory, CharFilterMode, CleanTextParams, SpaceMode, TextPipeline,
};
use proptest::prelude::*;

fn pipeline(params: CleanTextParams) -> TextPipeline {
    TextPipeline::from_params(&params.with_columns(["A"])).unwrap()
}

fn space_mode() -> impl Strategy<Value = SpaceMode> {
    prop_oneof![
        Just(SpaceMode::TrimBoth),
        Just(SpaceMode::TrimLeading),
        Just(SpaceMode::TrimTrailing),
        Just(SpaceMode::RemoveAllWhitespace),
        Just(SpaceMode::NoChange),
    ]
}

// Mixed letters, digits, punctuation, and several kinds of whitespace.
const TEXT: &str = "[a-zA-Zé谢0-9٣½.,!@#\\- \t\n\r\u{a0}\u{3000}]{0,24}";

proptest! {
    #[test]
    fn remove_all_leaves_no_whitespace(value in TEXT, condense in any::<bool>()) {
        let cleaned = pipeline(
            CleanTextParams::new()
                .with_space_mode(SpaceMode::RemoveAllWhitespace)
                .with_condense(condense),
        )
        .apply(&value);
        prop_assert!(!cleaned.chars().any(char::is_whitespace));
    }

    #[test]
    fn keep_filter_preserves_whitespace(value in TEXT) {
        let cleaned = pipeline(
            CleanTextParams::new()
                .with_space_mode(SpaceMode::NoChange)
                .with_char_filter_mode(CharFilterMode::Keep)
                .with_category(CharCategory::Letter, true),
        )
        .apply(&value);
        let count = |s: &str| s.chars().filter(|c| c.is_whitespace()).count();
        prop_assert_eq!(count(&cleaned), count(&value));
    }

    #[test]
    fn condense_leaves_no_whitespace_runs(value in TEXT, mode in space_mode()) {
        let cleaned = pipeline(
            CleanTextParams::new()
                .with_space_mode(mode)
                .with_condense(true),
        )
        .apply(&value);
        let chars: Vec<char> = cleaned.chars().collect();
        prop_assert!(
            !chars
                .windows(2)
                .any(|pair| pair[0].is_whitespace() && pair[1].is_whitespace())
        );
    }

    #[test]
    fn delete_letters_leaves_no_letters(value in TEXT, mode in space_mode()) {
        let cleaned = pipeline(
            CleanTextParams::new()
                .with_space_mode(mode)
                .with_case_mode(CaseMode::NoChange)
                .with_category(CharCategory::Letter, true),
        )
        .apply(&value);
        prop_assert!(!cleaned.chars().any(char::is_alphabetic));
    }

    #[test]
    fn cleaning_is_idempotent(value in TEXT, mode in space_mode(), condense in any::<bool>()) {
        let pipeline = pipeline(
            CleanTextParams::new()
                .with_space_mode(mode)
                .with_condense(condense)
                .with_case_mode(CaseMode::Lower)
                .with_category(CharCategory::Punctuation, true),
        );
        let once = pipeline.apply(&value);
        prop_assert_eq!(pipeline.apply(&once), once);
    }
}

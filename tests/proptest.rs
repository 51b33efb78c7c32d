//! Property-based tests for the cleaning pipeline.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use channelpack::clean::{AMHARIC_STOPWORDS, Cleaner, is_stopword, normalize_chars, tokenize};
use channelpack::config::CleanConfig;

/// Mixed Amharic / Latin / noise fragments, recombined at random.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "ሃላፊነት".to_string(),
            "ዋጋ".to_string(),
            "ብር".to_string(),
            "እና".to_string(),
            "ነው".to_string(),
            "ሐሳብ".to_string(),
            "፣".to_string(),
            "።".to_string(),
            "hello".to_string(),
            "123".to_string(),
            "!!!".to_string(),
            "🔥🔥".to_string(),
            "https://t.me/shop".to_string(),
            "www.example.com".to_string(),
            "   ".to_string(),
            "\t\n".to_string(),
            String::new(),
        ]),
        0..12,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================
    // CLEANING PROPERTIES
    // ============================================

    /// Cleaning twice yields the same string as cleaning once.
    #[test]
    fn clean_is_idempotent(text in arb_text()) {
        let cleaner = Cleaner::new(CleanConfig::new());
        let once = cleaner.clean(Some(&text));
        let twice = cleaner.clean(Some(&once));
        prop_assert_eq!(once, twice);
    }

    /// Cleaned text never has double spaces or ragged ends.
    #[test]
    fn clean_normalizes_whitespace(text in arb_text()) {
        let cleaner = Cleaner::new(CleanConfig::new());
        let cleaned = cleaner.clean(Some(&text));
        prop_assert!(!cleaned.contains("  "));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }

    /// The full pipeline is idempotent too: processing its own output
    /// changes nothing.
    #[test]
    fn process_is_idempotent(text in arb_text()) {
        let cleaner = Cleaner::new(CleanConfig::new());
        let once = cleaner.process(Some(&text));
        let twice = cleaner.process(Some(&once.text));
        prop_assert_eq!(once, twice);
    }

    /// Arbitrary unicode input never panics.
    #[test]
    fn clean_never_panics(text in "\\PC*") {
        let cleaner = Cleaner::new(CleanConfig::new());
        let _ = cleaner.process(Some(&text));
    }

    // ============================================
    // NORMALIZATION PROPERTIES
    // ============================================

    /// Variant folding is deterministic and leaves no source variants behind.
    #[test]
    fn normalize_chars_removes_all_variants(text in arb_text()) {
        let normalized = normalize_chars(&text);
        for variant in ['ሃ', 'ሐ', 'ሓ', 'ኀ', 'ኅ', 'ኻ'] {
            prop_assert!(!normalized.contains(variant));
        }
        // stable under repetition
        prop_assert_eq!(normalize_chars(&normalized), normalized);
    }

    /// Folding never changes the character count.
    #[test]
    fn normalize_chars_preserves_length(text in "\\PC*") {
        prop_assert_eq!(
            normalize_chars(&text).chars().count(),
            text.chars().count()
        );
    }

    // ============================================
    // STOPWORD PROPERTIES
    // ============================================

    /// Stopword removal drops exactly the stopwords, preserving order.
    #[test]
    fn stopword_filter_is_order_preserving_subset(text in arb_text()) {
        let cleaner = Cleaner::new(CleanConfig::new().with_remove_stopwords(true));
        let out = cleaner.process(Some(&text));

        // filtered tokens are the non-stopword tokens, in the same order
        let expected: Vec<&String> = out
            .tokens
            .iter()
            .filter(|t| !is_stopword(t))
            .collect();
        let actual: Vec<&String> = out.filtered_tokens.iter().collect();
        prop_assert_eq!(actual, expected);

        // and none of the survivors is a stopword
        for token in &out.filtered_tokens {
            prop_assert!(!AMHARIC_STOPWORDS.contains(&token.as_str()));
        }
    }

    /// Tokenizing cleaned text and re-joining reproduces the cleaned text.
    #[test]
    fn tokens_rejoin_to_cleaned_text(text in arb_text()) {
        let cleaner = Cleaner::new(CleanConfig::new());
        let cleaned = cleaner.clean(Some(&text));
        prop_assert_eq!(tokenize(&cleaned).join(" "), cleaned);
    }
}

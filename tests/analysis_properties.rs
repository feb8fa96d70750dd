//! Property-based tests for the analysis engine
//!
//! These tests verify invariants that should hold for all inputs:
//! - Classification and analysis are deterministic
//! - The label always agrees with the marker counts
//! - Short texts are summarized to themselves
//! - Longer texts are summarized to their first and last sentences
//! - Suggestions never exceed the cap and always come from the tone rule

use proptest::prelude::*;
use tonemap::suggestions::rules::{
    NEGATIVE_TONE_ADVICE, NEUTRAL_TONE_ADVICE, POSITIVE_TONE_ADVICE,
};
use tonemap::*;

/// Prose-like text mixing marker words, plain words and punctuation
fn prose() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("good".to_string()),
        Just("terrible".to_string()),
        Just("Excellent".to_string()),
        Just("bad".to_string()),
        "[a-z]{1,8}",
    ];
    let separator = prop_oneof![
        Just(" ".to_string()),
        Just(". ".to_string()),
        Just("! ".to_string()),
        Just("? ".to_string()),
        Just("\n".to_string()),
    ];
    prop::collection::vec((word, separator), 0..60).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(word, separator)| format!("{word}{separator}"))
            .collect::<String>()
    })
}

/// A sentence fragment without terminators, padded with spaces
fn fragment() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z ,]{0,20}".prop_map(|s| format!("  {s} "))
}

fn label() -> impl Strategy<Value = SentimentLabel> {
    prop_oneof![
        Just(SentimentLabel::Positive),
        Just(SentimentLabel::Negative),
        Just(SentimentLabel::Neutral),
    ]
}

proptest! {
    #[test]
    fn prop_analysis_is_deterministic(text in prose()) {
        prop_assert_eq!(analyze(&text), analyze(&text));
        prop_assert_eq!(classify(&text), classify(&text));
    }

    #[test]
    fn prop_label_follows_counts(text in prose()) {
        let counts = count_markers(&text, &DEFAULT_LEXICON);
        let expected = if counts.positive > counts.negative {
            SentimentLabel::Positive
        } else if counts.negative > counts.positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        prop_assert_eq!(classify(&text), expected);
    }

    #[test]
    fn prop_short_texts_summarize_to_themselves(
        first in fragment(),
        second in fragment(),
        terminator in "[.!?]{1,3}",
        two in any::<bool>(),
    ) {
        let text = if two {
            format!("{first}{terminator}{second}")
        } else {
            format!("{first}{terminator}")
        };
        prop_assert!(split_sentences(&text).len() <= 2);
        prop_assert_eq!(summarize(&text), text.trim());
    }

    #[test]
    fn prop_long_texts_keep_first_and_last(
        fragments in prop::collection::vec(fragment(), 3..8),
        terminator in "[.!?]{1,3}",
    ) {
        let text = fragments.join(terminator.as_str());
        let first = fragments[0].trim();
        let last = fragments[fragments.len() - 1].trim();

        let summary = summarize(&text);
        prop_assert!(summary.ends_with('.'));
        prop_assert_eq!(summary, format!("{first}. {last}."));
    }

    #[test]
    fn prop_suggestions_are_capped_tone_advice(text in prose(), sentiment in label()) {
        let suggestions = suggest(&text, sentiment);
        prop_assert!(suggestions.len() <= MAX_SUGGESTIONS);

        let expected = match sentiment {
            SentimentLabel::Positive => POSITIVE_TONE_ADVICE,
            SentimentLabel::Negative => NEGATIVE_TONE_ADVICE,
            SentimentLabel::Neutral => NEUTRAL_TONE_ADVICE,
        };
        prop_assert_eq!(suggestions, expected.to_vec());
    }
}

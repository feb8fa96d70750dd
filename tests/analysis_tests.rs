use indoc::indoc;
use pretty_assertions::assert_eq;
use tonemap::suggestions::rules::{
    NEGATIVE_TONE_ADVICE, NEUTRAL_TONE_ADVICE, POSITIVE_TONE_ADVICE,
};
use tonemap::*;

#[test]
fn test_praise_is_positive_and_kept_whole() {
    let text = "Great job! The team did excellent work and finished on time.";
    let result = analyze(text);

    assert_eq!(result.sentiment, SentimentLabel::Positive);
    assert_eq!(result.summary, text);
    // Short text would also earn "expand" advice, but the cap keeps the
    // three tone suggestions only.
    assert_eq!(result.suggestions, POSITIVE_TONE_ADVICE);
}

#[test]
fn test_complaint_is_negative_and_summarized() {
    let text = "This is bad. It was a terrible failure. Nothing worked. We are very disappointed overall.";
    let result = analyze(text);

    assert_eq!(
        result,
        AnalysisResult {
            summary: "This is bad. We are very disappointed overall.".to_string(),
            sentiment: SentimentLabel::Negative,
            suggestions: NEGATIVE_TONE_ADVICE.to_vec(),
        }
    );
}

#[test]
fn test_blank_input_never_reaches_the_engine() {
    for text in ["", " ", "\n\n\t "] {
        assert!(matches!(try_analyze(text), Err(TonemapError::EmptyInput)));
    }
}

#[test]
fn test_neutral_memo() {
    let text = indoc! {"
        The meeting is scheduled for Monday at the main office.
        Agenda items will be sent beforehand.
        Please bring the quarterly figures.
    "};
    let result = analyze(text);

    assert_eq!(result.sentiment, SentimentLabel::Neutral);
    assert_eq!(
        result.summary,
        "The meeting is scheduled for Monday at the main office. Please bring the quarterly figures."
    );
    assert_eq!(result.suggestions, NEUTRAL_TONE_ADVICE);
}

#[test]
fn test_substring_matches_count() {
    // "goodness" contains the marker "good".
    assert_eq!(classify("goodness"), SentimentLabel::Positive);
    // "window" contains "win"; "hardware" contains "hard".
    assert_eq!(
        count_markers("window hardware", &DEFAULT_LEXICON),
        MarkerCounts {
            positive: 1,
            negative: 1
        }
    );
}

#[test]
fn test_multi_word_markers_are_dead_entries() {
    // "on time" is in the positive list but spans two tokens.
    assert_eq!(classify("delivered on time"), SentimentLabel::Neutral);
    assert_eq!(
        DEFAULT_LEXICON.unreachable_markers(),
        vec!["on time", "very unpleasant"]
    );
}

#[test]
fn test_negative_mid_length_engaging_text_gets_only_tone_advice() {
    let body = "we saw a terrible outcome ".repeat(20);
    let text = format!("{body}What now?");
    assert_eq!(TextStats::from_text(&text).token_count, 102);

    let result = analyze(&text);
    assert_eq!(result.sentiment, SentimentLabel::Negative);
    assert_eq!(result.suggestions, NEGATIVE_TONE_ADVICE);
}

#[test]
fn test_rule_table_is_enumerable() {
    let names: Vec<_> = SUGGESTION_RULES.iter().map(|rule| rule.name).collect();
    assert_eq!(
        names,
        vec![
            "negative-tone",
            "positive-tone",
            "neutral-tone",
            "too-short",
            "too-long",
            "no-engagement"
        ]
    );
}

#[test]
fn test_analyzer_with_configured_lexicon() {
    let lexicon = Lexicon::with_extra(["stellar"], Vec::<&str>::new());
    let analyzer = TextAnalyzer::new(&lexicon);

    assert_eq!(
        analyzer.analyze("A stellar quarter.").sentiment,
        SentimentLabel::Positive
    );
    assert_eq!(analyze("A stellar quarter.").sentiment, SentimentLabel::Neutral);
}

#[test]
fn test_analyze_is_shareable_across_threads() {
    let text = "This is bad. It was a terrible failure. Nothing worked. We are very disappointed overall.";
    let expected = analyze(text);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || analyze(text)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

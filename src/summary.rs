//! First-and-last sentence extractive summaries.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence terminator pattern is valid"));

/// Split `text` on runs of `.`, `!` and `?`, returning the trimmed non-empty
/// fragments in order.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Summarize `text` as its first and last sentences.
///
/// Texts with two sentences or fewer come back trimmed but otherwise untouched,
/// keeping their original punctuation.
pub fn summarize(text: &str) -> String {
    let sentences = split_sentences(text);
    match sentences.as_slice() {
        [first, .., last] if sentences.len() > 2 => format!("{first}. {last}."),
        _ => text.trim().to_string(),
    }
}

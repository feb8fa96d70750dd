//! Lexicon-based sentiment classification.

use crate::core::SentimentLabel;
use crate::lexicon::{Lexicon, DEFAULT_LEXICON};
use serde::Serialize;

/// Number of tokens that matched each side of the lexicon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MarkerCounts {
    pub positive: usize,
    pub negative: usize,
}

impl MarkerCounts {
    pub fn label(&self) -> SentimentLabel {
        match self.positive.cmp(&self.negative) {
            std::cmp::Ordering::Greater => SentimentLabel::Positive,
            std::cmp::Ordering::Less => SentimentLabel::Negative,
            std::cmp::Ordering::Equal => SentimentLabel::Neutral,
        }
    }
}

/// Count lowercase whitespace tokens containing a positive or negative marker.
///
/// A token counts at most once per side, but may count toward both.
pub fn count_markers(text: &str, lexicon: &Lexicon) -> MarkerCounts {
    let lowered = text.to_lowercase();
    lowered
        .split_whitespace()
        .fold(MarkerCounts::default(), |mut counts, token| {
            if lexicon.matches_positive(token) {
                counts.positive += 1;
            }
            if lexicon.matches_negative(token) {
                counts.negative += 1;
            }
            counts
        })
}

/// Classify `text` against the process-wide lexicon.
pub fn classify(text: &str) -> SentimentLabel {
    classify_with(text, &DEFAULT_LEXICON)
}

pub fn classify_with(text: &str, lexicon: &Lexicon) -> SentimentLabel {
    let counts = count_markers(text, lexicon);
    let label = counts.label();
    tracing::debug!(
        positive = counts.positive,
        negative = counts.negative,
        %label,
        "Classified sentiment"
    );
    label
}

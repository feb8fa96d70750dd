//! Rule-based writing suggestions.

pub mod rules;

pub use rules::{SuggestionRule, SUGGESTION_RULES};

use crate::core::{SentimentLabel, Suggestion};
use serde::Serialize;

/// Upper bound on suggestions returned for one text.
pub const MAX_SUGGESTIONS: usize = 3;

/// Surface statistics the suggestion rules look at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Whitespace-delimited tokens.
    pub token_count: usize,
    pub has_question: bool,
    pub has_exclamation: bool,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            token_count: text.split_whitespace().count(),
            has_question: text.contains('?'),
            has_exclamation: text.contains('!'),
        }
    }
}

/// Produce up to [`MAX_SUGGESTIONS`] suggestions for `text`.
///
/// `sentiment` is the classifier's label for the same text.
pub fn suggest(text: &str, sentiment: SentimentLabel) -> Vec<Suggestion> {
    let stats = TextStats::from_text(text);
    let suggestions: Vec<Suggestion> = SUGGESTION_RULES
        .iter()
        .filter(|rule| rule.matches(&stats, sentiment))
        .inspect(|rule| tracing::trace!(rule = rule.name, "Suggestion rule matched"))
        .flat_map(|rule| rule.suggestions.iter().copied())
        .take(MAX_SUGGESTIONS)
        .collect();

    tracing::debug!(
        tokens = stats.token_count,
        count = suggestions.len(),
        "Generated suggestions"
    );
    suggestions
}

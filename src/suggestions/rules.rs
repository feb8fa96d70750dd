//! The suggestion rule table.
//!
//! Rules are evaluated top to bottom. Each matching rule contributes all of
//! its suggestions, and the concatenated list is cut to
//! [`super::MAX_SUGGESTIONS`]. Every text matches exactly one tone rule, and
//! each tone rule carries three suggestions, so the tone advice always fills
//! the list on its own.

use super::TextStats;
use crate::core::{SentimentLabel, Suggestion};

/// Texts shorter than this many tokens are asked to expand.
pub const SHORT_TEXT_TOKENS: usize = 50;
/// Texts longer than this many tokens are asked to tighten.
pub const LONG_TEXT_TOKENS: usize = 200;

/// A predicate over the text and its sentiment, paired with the advice it
/// produces.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRule {
    pub name: &'static str,
    pub applies: fn(&TextStats, SentimentLabel) -> bool,
    pub suggestions: &'static [Suggestion],
}

impl SuggestionRule {
    pub fn matches(&self, stats: &TextStats, sentiment: SentimentLabel) -> bool {
        (self.applies)(stats, sentiment)
    }
}

pub const NEGATIVE_TONE_ADVICE: &[Suggestion] = &[
    "Consider reframing negative points with potential solutions",
    "Add specific examples to support your concerns",
    "Include actionable steps to address the issues mentioned",
];

pub const POSITIVE_TONE_ADVICE: &[Suggestion] = &[
    "Share this positive feedback with relevant stakeholders",
    "Document successful strategies for future reference",
    "Consider expanding on what made this experience positive",
];

pub const NEUTRAL_TONE_ADVICE: &[Suggestion] = &[
    "Add more specific details to strengthen your message",
    "Consider including examples to illustrate your points",
    "Think about the desired outcome and make it clearer",
];

pub const EXPAND_ADVICE: &[Suggestion] = &["Consider expanding your content with more details"];

pub const CONDENSE_ADVICE: &[Suggestion] = &["Try to make your message more concise and focused"];

pub const ENGAGEMENT_ADVICE: &[Suggestion] = &["Consider adding questions or calls to action"];

/// All rules in precedence order.
pub const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        name: "negative-tone",
        applies: |_, sentiment| sentiment == SentimentLabel::Negative,
        suggestions: NEGATIVE_TONE_ADVICE,
    },
    SuggestionRule {
        name: "positive-tone",
        applies: |_, sentiment| sentiment == SentimentLabel::Positive,
        suggestions: POSITIVE_TONE_ADVICE,
    },
    SuggestionRule {
        name: "neutral-tone",
        applies: |_, sentiment| sentiment == SentimentLabel::Neutral,
        suggestions: NEUTRAL_TONE_ADVICE,
    },
    SuggestionRule {
        name: "too-short",
        applies: |stats, _| stats.token_count < SHORT_TEXT_TOKENS,
        suggestions: EXPAND_ADVICE,
    },
    SuggestionRule {
        name: "too-long",
        applies: |stats, _| stats.token_count > LONG_TEXT_TOKENS,
        suggestions: CONDENSE_ADVICE,
    },
    SuggestionRule {
        name: "no-engagement",
        applies: |stats, _| !stats.has_question && !stats.has_exclamation,
        suggestions: ENGAGEMENT_ADVICE,
    },
];

/// Look up a rule by name.
pub fn rule(name: &str) -> Option<&'static SuggestionRule> {
    SUGGESTION_RULES.iter().find(|rule| rule.name == name)
}

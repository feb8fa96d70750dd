//! Deterministic text analysis: an extractive summary, a coarse sentiment
//! label and a few writing suggestions for any block of prose.
//!
//! ```rust
//! use tonemap::{analyze, SentimentLabel};
//!
//! let result = analyze("Great job! The team did excellent work and finished on time.");
//! assert_eq!(result.sentiment, SentimentLabel::Positive);
//! assert_eq!(result.suggestions.len(), 3);
//! ```

// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod lexicon;
pub mod observability;
pub mod sentiment;
pub mod suggestions;
pub mod summary;

// Re-export commonly used types
pub use crate::core::{AnalysisResult, SentimentLabel, Suggestion};

pub use crate::analysis::{analyze, ensure_not_blank, try_analyze, TextAnalyzer};
pub use crate::errors::{ErrorCode, TonemapError};
pub use crate::lexicon::{Lexicon, DEFAULT_LEXICON};
pub use crate::sentiment::{classify, classify_with, count_markers, MarkerCounts};
pub use crate::suggestions::{
    suggest, SuggestionRule, TextStats, MAX_SUGGESTIONS, SUGGESTION_RULES,
};
pub use crate::summary::{split_sentences, summarize};

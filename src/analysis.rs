//! Analysis entry points.
//!
//! [`analyze`] runs the classifier, the summarizer and the suggestion rules in
//! that order and bundles their output. The sentiment label is handed to the
//! suggestion rules explicitly, so each stage stays testable on its own.

use crate::core::AnalysisResult;
use crate::errors::TonemapError;
use crate::lexicon::{Lexicon, DEFAULT_LEXICON};
use crate::observability::{set_input_size, set_phase, AnalysisPhase};
use crate::sentiment::classify_with;
use crate::suggestions::suggest;
use crate::summary::summarize;

/// Analyzer bound to a lexicon.
///
/// Holds only a borrow, so building one per call costs nothing and many
/// threads can share the same lexicon.
#[derive(Debug, Clone, Copy)]
pub struct TextAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Analyze `text` without checking it for blankness.
    ///
    /// Callers are expected to reject blank input first; see
    /// [`TextAnalyzer::try_analyze`].
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let _input = set_input_size(text.chars().count());

        let sentiment = {
            let _phase = set_phase(AnalysisPhase::Classification);
            classify_with(text, self.lexicon)
        };
        let summary = {
            let _phase = set_phase(AnalysisPhase::Summarization);
            summarize(text)
        };
        let suggestions = {
            let _phase = set_phase(AnalysisPhase::SuggestionGeneration);
            suggest(text, sentiment)
        };

        AnalysisResult {
            summary,
            sentiment,
            suggestions,
        }
    }

    /// Analyze `text`, rejecting empty or whitespace-only input.
    pub fn try_analyze(&self, text: &str) -> Result<AnalysisResult, TonemapError> {
        {
            let _phase = set_phase(AnalysisPhase::InputValidation);
            ensure_not_blank(text)?;
        }
        Ok(self.analyze(text))
    }
}

impl Default for TextAnalyzer<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_LEXICON)
    }
}

/// Reject text that is empty once trimmed.
pub fn ensure_not_blank(text: &str) -> Result<(), TonemapError> {
    if text.trim().is_empty() {
        tracing::debug!("Rejected blank input");
        return Err(TonemapError::EmptyInput);
    }
    Ok(())
}

/// Analyze `text` with the default lexicon.
pub fn analyze(text: &str) -> AnalysisResult {
    TextAnalyzer::default().analyze(text)
}

/// Analyze `text` with the default lexicon, rejecting blank input.
pub fn try_analyze(text: &str) -> Result<AnalysisResult, TonemapError> {
    TextAnalyzer::default().try_analyze(text)
}

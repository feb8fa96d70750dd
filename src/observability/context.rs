//! Thread-local analysis phase tracking for crash reports.
//!
//! Each thread records the phase it is in; guards restore the previous phase
//! on drop so nested phases unwind correctly.

use std::cell::RefCell;

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

/// Snapshot of what the current thread is doing.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    /// Length of the text under analysis, in characters.
    pub input_chars: Option<usize>,
}

impl AnalysisContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            input_chars: None,
        }
    }
}

/// Stages of a single analysis, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Checking the input is not blank
    InputValidation,
    /// Scoring tokens against the lexicon
    Classification,
    /// Extracting the first and last sentences
    Summarization,
    /// Evaluating the suggestion rules
    SuggestionGeneration,
    /// Rendering the report
    OutputGeneration,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputValidation => write!(f, "input_validation"),
            Self::Classification => write!(f, "classification"),
            Self::Summarization => write!(f, "summarization"),
            Self::SuggestionGeneration => write!(f, "suggestion_generation"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current analysis phase until the returned guard drops.
///
/// ```ignore
/// let _phase = set_phase(AnalysisPhase::Summarization);
/// // phase restored when _phase drops
/// ```
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

/// Record the size of the text being analyzed until the guard drops.
#[must_use]
pub fn set_input_size(chars: usize) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().input_chars = Some(chars);
        ContextGuard { previous }
    })
}

/// Current thread's context snapshot; read by the panic hook.
#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = AnalysisContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        reset_context();

        let _phase1 = set_phase(AnalysisPhase::Classification);
        assert_eq!(
            get_current_context().phase,
            Some(AnalysisPhase::Classification)
        );

        {
            let _phase2 = set_phase(AnalysisPhase::Summarization);
            assert_eq!(
                get_current_context().phase,
                Some(AnalysisPhase::Summarization)
            );
        }

        assert_eq!(
            get_current_context().phase,
            Some(AnalysisPhase::Classification),
            "Phase should be restored after inner guard drops"
        );
    }

    #[test]
    fn test_input_size_is_scoped() {
        reset_context();
        {
            let _size = set_input_size(42);
            assert_eq!(get_current_context().input_chars, Some(42));
        }
        assert_eq!(get_current_context().input_chars, None);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(
            AnalysisPhase::SuggestionGeneration.to_string(),
            "suggestion_generation"
        );
    }
}

use serde::{Deserialize, Serialize};

/// A piece of writing advice drawn from the fixed suggestion catalog.
pub type Suggestion = &'static str;

/// Coarse three-way tone classification of a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything derived from one analyzed text.
///
/// Built fresh by every call to [`crate::analyze`]; nothing in it is shared
/// with other analyses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub sentiment: SentimentLabel,
    /// At most three entries, in rule precedence order.
    pub suggestions: Vec<Suggestion>,
}

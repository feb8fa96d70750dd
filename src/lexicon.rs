//! Marker word lists used by the sentiment classifier.
//!
//! A [`Lexicon`] is two lists of lowercase markers. The built-in lists live in
//! [`POSITIVE_MARKERS`] and [`NEGATIVE_MARKERS`]; [`DEFAULT_LEXICON`] wraps them
//! once per process and is borrowed by every analysis.
//!
//! Markers are matched as substrings of single whitespace-delimited tokens, so
//! an entry containing a space (`"on time"`) can never match. Those entries are
//! kept in the lists and reported by [`Lexicon::unreachable_markers`].

use once_cell::sync::Lazy;

pub const POSITIVE_MARKERS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "happy",
    "excited", "perfect", "awesome", "brilliant", "outstanding", "superb", "delighted",
    "thrilled", "pleased", "satisfied", "positive", "success", "achieve", "win", "benefit",
    "improve", "better", "best", "increase", "growth", "progress", "on time", "timely",
    "appreciate", "grateful", "thankful", "admire", "respect", "trust", "supportive",
    "encouraging", "motivated", "optimistic", "hopeful", "uplifting", "inspiring", "joyful",
    "content", "relieved", "calm", "peaceful", "reassured", "confident", "empowered",
    "enthusiastic", "excelling", "triumph", "victory", "achievement", "prosperous",
    "favorable", "advantageous", "beneficial", "rewarding", "fruitful", "productive",
    "constructive", "valuable", "worthwhile", "meaningful", "significant", "impactful",
    "transformative", "life-changing", "enriching", "fulfilling", "satisfying", "gratifying",
    "pleasurable", "delightful", "charming", "captivating", "engaging", "entertaining",
    "amusing", "funny", "humorous",
];

pub const NEGATIVE_MARKERS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "sad", "angry", "frustrated",
    "disappointed", "worried", "concerned", "problem", "issue", "fail", "failure", "wrong",
    "error", "difficult", "hard", "struggle", "challenge", "poor", "worst", "negative",
    "decline", "decrease", "late", "missed", "lost", "regret", "unhappy", "upset", "confused",
    "annoyed", "irritated", "displeased", "dissatisfied", "uncomfortable", "unpleasant",
    "stressful", "overwhelmed", "burdened", "exhausted", "tired", "fatigued", "drained",
    "abominable", "very unpleasant", "disagreeable", "miserable", "deplorable", "foul",
    "unsuitable", "unacceptable", "unfavorable", "unfortunate", "undesirable", "distressing",
    "disturbing", "troubling", "worrisome", "alarming", "dismaying", "disheartening",
];

/// Process-wide lexicon built from the built-in marker lists.
pub static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::default);

/// Positive and negative marker words, lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from arbitrary marker lists.
    ///
    /// Markers are trimmed and lowercased; blank entries are dropped because an
    /// empty marker would match every token.
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: normalize_markers(positive),
            negative: normalize_markers(negative),
        }
    }

    /// The built-in lists extended with caller-supplied markers.
    pub fn with_extra<P, N>(extra_positive: P, extra_negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for marker in normalize_markers(extra_positive) {
            if !lexicon.positive.contains(&marker) {
                lexicon.positive.push(marker);
            }
        }
        for marker in normalize_markers(extra_negative) {
            if !lexicon.negative.contains(&marker) {
                lexicon.negative.push(marker);
            }
        }
        lexicon
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// Whether any positive marker occurs inside `token`.
    pub fn matches_positive(&self, token: &str) -> bool {
        self.positive.iter().any(|marker| token.contains(marker.as_str()))
    }

    /// Whether any negative marker occurs inside `token`.
    pub fn matches_negative(&self, token: &str) -> bool {
        self.negative.iter().any(|marker| token.contains(marker.as_str()))
    }

    /// Markers that no single whitespace-delimited token can ever contain.
    pub fn unreachable_markers(&self) -> Vec<&str> {
        self.positive
            .iter()
            .chain(self.negative.iter())
            .filter(|marker| marker.chars().any(char::is_whitespace))
            .map(String::as_str)
            .collect()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(POSITIVE_MARKERS, NEGATIVE_MARKERS)
    }
}

fn normalize_markers<I>(markers: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    markers
        .into_iter()
        .map(|marker| marker.as_ref().trim().to_lowercase())
        .filter(|marker| !marker.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_markers_are_lowercase_and_non_empty() {
        for marker in POSITIVE_MARKERS.iter().chain(NEGATIVE_MARKERS) {
            assert!(!marker.is_empty());
            assert_eq!(*marker, marker.to_lowercase(), "{marker} is not lowercase");
        }
    }

    #[test]
    fn test_default_lexicon_mirrors_builtin_lists() {
        assert_eq!(DEFAULT_LEXICON.positive().len(), POSITIVE_MARKERS.len());
        assert_eq!(DEFAULT_LEXICON.negative().len(), NEGATIVE_MARKERS.len());
    }

    #[test]
    fn test_multi_word_markers_are_reported_unreachable() {
        let unreachable = DEFAULT_LEXICON.unreachable_markers();
        assert_eq!(unreachable, vec!["on time", "very unpleasant"]);
    }

    #[test]
    fn test_substring_matching() {
        let lexicon = Lexicon::default();
        assert!(lexicon.matches_positive("goodness"));
        assert!(lexicon.matches_negative("hardware"));
        assert!(!lexicon.matches_positive("meeting"));
    }

    #[test]
    fn test_new_normalizes_and_drops_blank_markers() {
        let lexicon = Lexicon::new(["  Stellar ", ""], ["MEH", "   "]);
        assert_eq!(lexicon.positive(), ["stellar"]);
        assert_eq!(lexicon.negative(), ["meh"]);
    }

    #[test]
    fn test_with_extra_extends_without_duplicates() {
        let lexicon = Lexicon::with_extra(["Stellar", "good"], ["meh"]);
        assert_eq!(lexicon.positive().len(), POSITIVE_MARKERS.len() + 1);
        assert_eq!(lexicon.negative().len(), NEGATIVE_MARKERS.len() + 1);
        assert!(lexicon.matches_positive("stellar!"));
        assert!(lexicon.matches_negative("meh."));
    }
}

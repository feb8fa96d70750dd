use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Root configuration structure for tonemap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TonemapConfig {
    /// Extra marker words added to the built-in lexicon
    #[serde(default)]
    pub lexicon: Option<LexiconConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl TonemapConfig {
    /// Build the lexicon this configuration describes.
    ///
    /// Without extra markers this is the built-in lexicon.
    pub fn lexicon(&self) -> Lexicon {
        match &self.lexicon {
            Some(extra) => Lexicon::with_extra(&extra.extra_positive, &extra.extra_negative),
            None => Lexicon::default(),
        }
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LexiconConfig {
    #[serde(default)]
    pub extra_positive: Vec<String>,

    #[serde(default)]
    pub extra_negative: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// One of `terminal`, `json`, `markdown`
    pub default_format: Option<String>,
}

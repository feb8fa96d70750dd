use crate::core::SentimentLabel;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if terminal supports Unicode
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (ASCII-only, no colors, no emoji)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

/// Styling decisions for terminal reports.
pub struct Formatter {
    use_color: bool,
    use_emoji: bool,
}

impl Formatter {
    pub fn new(config: FormattingConfig) -> Self {
        let use_color = config.color.should_use_color();
        colored::control::set_override(use_color);
        Self {
            use_color,
            use_emoji: config.emoji.should_use_emoji(),
        }
    }

    pub fn header(&self, text: &str) -> String {
        if self.use_color {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn emoji<'a>(&self, emoji: &'a str, fallback: &'a str) -> &'a str {
        if self.use_emoji {
            emoji
        } else {
            fallback
        }
    }

    /// Sentiment badge: icon plus label, colored by tone.
    pub fn sentiment_badge(&self, sentiment: SentimentLabel) -> String {
        let (icon, fallback) = sentiment_icon(sentiment);
        let badge = format!("{} {}", self.emoji(icon, fallback), sentiment);
        if !self.use_color {
            return badge;
        }
        match sentiment {
            SentimentLabel::Positive => badge.green().bold().to_string(),
            SentimentLabel::Negative => badge.red().bold().to_string(),
            SentimentLabel::Neutral => badge.yellow().bold().to_string(),
        }
    }
}

/// Emoji and ASCII fallback for each sentiment.
pub fn sentiment_icon(sentiment: SentimentLabel) -> (&'static str, &'static str) {
    match sentiment {
        SentimentLabel::Positive => ("😊", "[+]"),
        SentimentLabel::Negative => ("😔", "[-]"),
        SentimentLabel::Neutral => ("😐", "[=]"),
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

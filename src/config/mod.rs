//! `.tonemap.toml` configuration.
//!
//! Configuration is read once at startup; the lexicon it produces stays
//! read-only for the rest of the process.

mod core;
mod loader;

pub use self::core::{LexiconConfig, OutputConfig, TonemapConfig};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};

/// Contents written by `tonemap init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Tonemap Configuration

[lexicon]
# Marker words added to the built-in lists. Matching is case-insensitive and
# by substring within a single word, so entries containing spaces never match.
extra_positive = []
extra_negative = []

[output]
# terminal, json or markdown
default_format = "terminal"
"#;

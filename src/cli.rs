use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tonemap")]
#[command(about = "Text tone, summary and writing suggestion analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a text, label its sentiment and suggest improvements
    Analyze {
        /// Text to analyze (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short = 'i', long = "file", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .tonemap.toml)
        #[arg(short, long, env = "TONEMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Wait this many milliseconds before analyzing
        #[arg(long = "delay-ms", default_value = "0")]
        delay_ms: u64,

        /// Plain output: no colors, no emoji
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::Analyze { verbosity, .. } => *verbosity,
            Self::Init { .. } => 0,
        }
    }
}

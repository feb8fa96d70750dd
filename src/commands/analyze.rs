use crate::analysis::{ensure_not_blank, TextAnalyzer};
use crate::config::{load_config, load_config_from_path, TonemapConfig};
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{self, create_writer, AnalysisReport, OutputFormat};
use crate::observability::{set_phase, AnalysisPhase};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Notice shown when there is nothing to analyze.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter some text to analyze first!";

/// Where the text to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    pub fn read(self) -> Result<String> {
        let text = match self {
            Self::Inline(text) => text,
            Self::File(path) => io::read_file(&path)?,
            Self::Stdin => io::read_stdin()?,
        };
        Ok(text)
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub input: InputSource,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Pause before analyzing, purely for presentation pacing.
    pub delay_ms: u64,
    pub formatting_config: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = match &config.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };

    let text = config.input.read()?;
    if let Err(err) = ensure_not_blank(&text) {
        eprintln!("Oops! {EMPTY_INPUT_NOTICE}");
        return Err(err.into());
    }

    if config.delay_ms > 0 {
        tracing::info!(delay_ms = config.delay_ms, "Pacing analysis");
        std::thread::sleep(Duration::from_millis(config.delay_ms));
    }

    let lexicon = settings.lexicon();
    let result = TextAnalyzer::new(&lexicon).analyze(&text);
    tracing::info!(sentiment = %result.sentiment, "Analysis complete");

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    let format = resolve_format(config.format, &settings);
    let report = AnalysisReport::new(&text, &result);

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let formatting = FormattingConfig {
                color: ColorMode::Never,
                ..config.formatting_config
            };
            let mut sink = BufWriter::new(file);
            create_writer(format, Box::new(&mut sink), formatting).write_report(&report)?;
            sink.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut sink = stdout.lock();
            create_writer(format, Box::new(&mut sink), config.formatting_config)
                .write_report(&report)?;
            sink.flush()?;
        }
    }

    Ok(())
}

/// CLI flag first, then the configured default, then terminal output.
pub fn resolve_format(cli_format: Option<OutputFormat>, settings: &TonemapConfig) -> OutputFormat {
    if let Some(format) = cli_format {
        return format;
    }
    match settings.default_format() {
        Some(name) => OutputFormat::parse(name).unwrap_or_else(|| {
            tracing::warn!(format = name, "Unknown default_format in config, using terminal");
            OutputFormat::Terminal
        }),
        None => OutputFormat::Terminal,
    }
}

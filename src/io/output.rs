use crate::core::AnalysisResult;
use crate::formatting::{Formatter, FormattingConfig};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

/// An analysis result together with counts taken from the input text.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    pub characters: usize,
    pub words: usize,
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(text: &str, result: &'a AnalysisResult) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
            result,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let result = report.result;

        writeln!(self.writer, "# Text Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} characters, {} words",
            report.characters, report.words
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", result.summary)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Sentiment")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}**", result.sentiment)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Suggestions")?;
        writeln!(self.writer)?;
        for (index, suggestion) in result.suggestions.iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, suggestion)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Formatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: Formatter::new(formatting),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let f = &self.formatter;
        let result = report.result;

        writeln!(self.writer, "{}", f.header("Text Analysis Report"))?;
        writeln!(self.writer, "{}", f.header("===================="))?;
        writeln!(
            self.writer,
            "{}",
            f.dim(&format!(
                "{} characters • {} words",
                report.characters, report.words
            ))
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{} {}", f.emoji("📝", "[SUMMARY]"), f.bold("Summary"))?;
        writeln!(self.writer, "  {}", result.summary)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{} {}", f.emoji("📈", "[TONE]"), f.bold("Sentiment"))?;
        writeln!(self.writer, "  {}", f.sentiment_badge(result.sentiment))?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{} {}", f.emoji("💡", "[IDEAS]"), f.bold("Suggestions"))?;
        for (index, suggestion) in result.suggestions.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", index + 1, suggestion)?;
        }
        Ok(())
    }
}

pub fn create_writer<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

use anyhow::Result;
use clap::Parser;
use tonemap::cli::{Cli, Commands};
use tonemap::commands::{AnalyzeConfig, InputSource};
use tonemap::formatting::FormattingConfig;
use tonemap::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Analyze {
            text,
            file,
            format,
            output,
            config,
            delay_ms,
            plain,
            verbosity: _,
        } => {
            let analyze_config = AnalyzeConfig {
                input: InputSource::from_args(text, file),
                format,
                output,
                config,
                delay_ms,
                formatting_config: create_formatting_config(plain),
            };
            tonemap::commands::handle_analyze(analyze_config)
        }
        Commands::Init { force } => tonemap::commands::init_config(force),
    }
}

// Pure function to create formatting config
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use group_harvest::utils::logging::format_success;
use group_harvest::{Config, PipelineOrchestrator};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "group_harvest")]
#[command(version = "0.1.0")]
#[command(about = "Extract group names and member numbers from saved HTML pages", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Hide the progress bar
    #[arg(long, action = ArgAction::SetTrue)]
    quiet: bool,

    /// Directory scanned for html files
    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// Directory the result files are written to
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    group_harvest::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let config = load_config(&cli)?;
    let start_time = Instant::now();

    let orchestrator = PipelineOrchestrator::new(config).with_progress(!cli.quiet, cli.color);
    let stats = orchestrator.run().context("Harvest aborted")?;

    eprintln!(
        "{}",
        format_success(&format!(
            "Processed {} files, wrote {} numbers in {:.2}s",
            stats.files_processed,
            stats.tokens_written,
            start_time.elapsed().as_secs_f64()
        ))
    );
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).context("Failed to load default configuration")?
    };

    if let Some(input) = &cli.input {
        config.input.directory = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output.directory = output.clone();
    }

    config.validate()?;
    Ok(config)
}

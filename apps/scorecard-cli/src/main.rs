//! `scorecard` binary entry point.
//!
//! ```text
//! scorecard --data demos/sample_data.json --format table
//! scorecard --config demos/scorecard.toml --output report.json
//! RUST_LOG=scorecard=trace scorecard --data sales.json
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use scorecard_cli::{run, OutputFormat, ScorecardConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Seller performance scorecard: revenue, profit, bonus and top products.
#[derive(Debug, Parser)]
#[command(name = "scorecard", version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sales dataset JSON file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = execute(cli) {
        error!(error = %format!("{err:#}"), "Scorecard run failed");
        return Err(err);
    }
    Ok(())
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let mut config =
        ScorecardConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Flags win over file and environment.
    if let Some(data) = cli.data {
        config.input.data_path = Some(data);
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(output) = cli.output {
        config.output.path = Some(output);
    }
    if cli.compact {
        config.output.pretty = false;
    }

    info!(
        data = ?config.input.data_path,
        format = %config.output.format,
        "Starting scorecard run"
    );

    match config.output.path.clone() {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            run(&config, &mut BufWriter::new(file))?;
            info!(?path, "Report saved");
        }
        None => run(&config, &mut io::stdout().lock())?,
    }

    Ok(())
}

/// Initializes tracing to stderr so stdout stays clean for the report.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,scorecard=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

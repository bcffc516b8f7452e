//! Process entry point for a scan pass (specification §12).
//!
//! The only binary in the workspace, and the only place a `tracing`
//! subscriber is installed. Library crates never install one themselves.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use vcp_scan::{
    FileUniverse, JsonLinesFetcher, JsonLinesStore, PersistedSignal, ScanConfig, ScanDriver,
    ScanOptions, Store,
};

#[derive(Parser, Debug)]
#[command(name = "vcp-cli")]
#[command(about = "Run a Volatility Contraction Pattern scan", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch each symbol in the universe and run the detector over it.
    Scan {
        /// Path to a newline/comma-separated ticker list. Falls back to a
        /// small built-in universe when omitted.
        #[arg(long)]
        universe: Option<PathBuf>,

        /// Path to a JSON-lines `{symbol, frame}` fetch source.
        #[arg(long)]
        source: PathBuf,

        /// Where detected signals are upserted.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Maximum number of symbols detected concurrently.
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Print how many signals are currently persisted, grouped by ticker.
    Summary {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let config = ScanConfig::from_env().context("loading configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(config.log_level.clone()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            universe,
            source,
            output,
            concurrency,
        } => run_scan(config, universe, source, output, concurrency),
        Commands::Summary { output } => run_summary(config, output),
    }
}

fn run_scan(
    config: ScanConfig,
    universe: Option<PathBuf>,
    source: PathBuf,
    output: Option<PathBuf>,
    concurrency: Option<usize>,
) -> Result<()> {
    let universe_path = universe.or(config.universe_path);
    let universe: Box<dyn vcp_scan::Universe> = match universe_path {
        Some(path) => Box::new(FileUniverse::load(&path).context("loading universe")?),
        None => Box::new(FileUniverse::fallback()),
    };

    let fetcher = JsonLinesFetcher::load(&source).context("loading fetch source")?;
    let output_path = output.unwrap_or(config.output_path);
    let store = JsonLinesStore::open(&output_path).context("opening output store")?;

    let options = ScanOptions {
        max_concurrency: concurrency.unwrap_or(config.max_concurrency),
        ..ScanOptions::default()
    };
    let driver = ScanDriver::new(options);
    let cancelled = AtomicBool::new(false);

    let (signals, summary) = driver.scan_with_summary(universe.as_ref(), &fetcher, &cancelled);
    tracing::info!(
        total_symbols = summary.total_symbols,
        success_count = summary.success_count,
        failed_count = summary.failed_count,
        "scan complete"
    );

    let as_of = Utc::now();
    let rows: Vec<PersistedSignal> = signals
        .iter()
        .map(|signal| PersistedSignal::from_signal(signal, as_of, None))
        .collect();
    store.upsert(&rows).context("persisting detected signals")?;

    println!(
        "scanned {} symbols: {} detected, {} failed",
        summary.total_symbols, summary.success_count, summary.failed_count
    );
    Ok(())
}

fn run_summary(config: ScanConfig, output: Option<PathBuf>) -> Result<()> {
    let output_path = output.unwrap_or(config.output_path);
    let store = JsonLinesStore::open(&output_path).context("opening output store")?;
    println!("{} signals persisted in {}", store.len(), output_path.display());
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use evtx_scanner::prelude::*;
use evtx_scanner::scanner::directory_scanner::{DEFAULT_DIRECTORY, DEFAULT_EXTENSION};

#[derive(Parser)]
#[command(name = "evtx_scanner")]
#[command(about = "Lists .evtx files in a directory and checks their file signature", long_about = None)]
struct Cli {
    /// Directory to scan for event log files
    #[arg(default_value = DEFAULT_DIRECTORY)]
    directory: PathBuf,

    /// File extension to match (case-sensitive)
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Diagnostics go to stderr so they never mix with the report on stdout.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ScanConfig::new(cli.directory, &cli.extension);
    let outcome = scan_directory(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &config, &outcome).context("Failed to write report")?;

    Ok(())
}

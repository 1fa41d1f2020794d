//! BankClient Demo CLI
//!
//! Entry point for the transaction pass. Runs the canonical demonstration
//! with no arguments; report lines go to stdout, logs to stderr.

use std::path::{Path, PathBuf};

use anyhow::Result;
use bank_client::config::{ClientConfig, DEFAULT_CONFIG_PATH};
use bank_client::sink::StdoutSink;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Drive savings, current and fixed term accounts through one transaction pass
#[derive(Parser)]
#[command(name = "bank-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to bank_client.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicitly named file must exist and be valid; the default one is optional
    let (config, ignored) = match &cli.config {
        Some(path) => (ClientConfig::load_and_validate(path)?, None),
        None => ClientConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
    };

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };

    // Initialize tracing
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(bank_client::log_filter(rust_log.as_deref(), &level))
        .init();

    if let Some(e) = ignored {
        tracing::warn!(
            path = DEFAULT_CONFIG_PATH,
            error = %e,
            "Ignoring default config, using built-in defaults"
        );
    }

    tracing::info!("BankClient Demo Starting...");

    bank_client::run(&config, &mut StdoutSink::new())?;

    tracing::info!("BankClient Demo Complete");

    Ok(())
}

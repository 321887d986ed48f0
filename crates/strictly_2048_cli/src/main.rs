//! Strictly 2048 - terminal game binary.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use std::path::Path;
use strictly_2048_cli::{GameSettings, Session};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;
    info!("Starting Strictly 2048");

    let settings = match &cli.config {
        Some(path) => GameSettings::from_file(path)?,
        None => GameSettings::new(),
    }
    .with_overrides(cli.size, cli.base, cli.seed);
    settings.engine_config()?;
    debug!(?settings, "Resolved settings");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), settings);
    session.run()
}

/// Logs go to stderr, or to `log_file` without ANSI colors, so stdout
/// carries only the game.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .with_target(false)
                .init();
        }
    }
    Ok(())
}

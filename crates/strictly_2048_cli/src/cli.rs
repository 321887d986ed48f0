//! Command-line interface for strictly_2048.

use clap::Parser;
use std::path::PathBuf;

/// Strictly 2048 - Slide and merge tiles on a square grid
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "Play 2048 in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Grid side length for regular games
    #[arg(long)]
    pub size: Option<usize>,

    /// Base tile value for regular games
    #[arg(long)]
    pub base: Option<u64>,

    /// Seed for reproducible tile spawns
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

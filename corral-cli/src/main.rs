//! Corral CLI
//!
//! Command-line interface for inspecting and adjusting a runner pool.
//!
//! Pool settings come from the same environment variables the daemon
//! reads, so the CLI can be pointed at a pool by sourcing its deployment
//! environment.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use corral_pool::PoolSettings;

#[derive(Parser)]
#[command(name = "corral")]
#[command(about = "Self-hosted runner pool CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = PoolSettings::from_env().context("Failed to load pool settings")?;
    settings.validate().context("Invalid pool settings")?;

    handle_command(cli.command, &settings).await
}

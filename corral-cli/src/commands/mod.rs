//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod pool;
mod runners;

pub use pool::PoolCommands;
pub use runners::RunnerCommands;

use anyhow::Result;
use clap::Subcommand;
use corral_pool::PoolSettings;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Pool inspection and adjustment
    Pool {
        #[command(subcommand)]
        command: PoolCommands,
    },
    /// Registered runner management
    Runners {
        #[command(subcommand)]
        command: RunnerCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `settings` - Pool settings loaded from the environment
pub async fn handle_command(command: Commands, settings: &PoolSettings) -> Result<()> {
    match command {
        Commands::Pool { command } => pool::handle_pool_command(command, settings).await,
        Commands::Runners { command } => runners::handle_runner_command(command, settings).await,
    }
}

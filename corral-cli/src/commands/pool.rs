//! Pool command handlers
//!
//! Handles pool inspection and one-shot adjustment from the command line.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use corral_core::dto::pool::PoolRequest;
use corral_core::pool::PoolCensus;
use corral_fleet::FleetClient;
use corral_github::{EnterpriseUrls, GithubClient};
use corral_pool::{PoolReconciler, PoolSettings};

/// Pool subcommands
#[derive(Subcommand)]
pub enum PoolCommands {
    /// Run one adjustment pass
    Adjust {
        /// Desired pool size; defaults to the POOL_SIZE setting
        #[arg(long, env = "POOL_SIZE")]
        size: Option<u32>,
    },
    /// Show the pool census without ordering anything
    Status {
        /// Print the census as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle pool commands
pub async fn handle_pool_command(command: PoolCommands, settings: &PoolSettings) -> Result<()> {
    let reconciler = build_reconciler(settings)?;

    match command {
        PoolCommands::Adjust { size } => {
            let desired = size.unwrap_or(settings.pool_size);
            adjust_pool(&reconciler, desired).await
        }
        PoolCommands::Status { json } => show_status(&reconciler, json).await,
    }
}

/// Wires a reconciler over the HTTP providers
fn build_reconciler(settings: &PoolSettings) -> Result<PoolReconciler> {
    let urls = EnterpriseUrls::resolve(settings.enterprise_base_url.as_deref())
        .context("Failed to resolve GitHub endpoints")?;
    let github = Arc::new(
        GithubClient::new(&settings.github_token, &urls)
            .context("Failed to build GitHub client")?,
    );
    let fleet = Arc::new(FleetClient::new(settings.fleet_api_url.clone()));

    Ok(PoolReconciler::new(
        settings.clone(),
        fleet.clone(),
        github,
        fleet,
    ))
}

/// Run one adjustment pass and print the outcome
async fn adjust_pool(reconciler: &PoolReconciler, desired: u32) -> Result<()> {
    let report = reconciler
        .adjust(PoolRequest {
            desired_pool_size: desired,
        })
        .await?;

    print_census(&report.census);
    println!();
    if report.requested > 0 {
        println!(
            "{}",
            format!(
                "Ordered {} new runner(s) to reach {}.",
                report.requested, report.desired_pool_size
            )
            .green()
        );
    } else {
        println!(
            "{}",
            format!(
                "Pool already has capacity {} of {} desired.",
                report.census.capacity(),
                report.desired_pool_size
            )
            .green()
        );
    }

    Ok(())
}

/// Show the census without ordering anything
async fn show_status(reconciler: &PoolReconciler, json: bool) -> Result<()> {
    let census = reconciler.census().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&census)?);
    } else {
        print_census(&census);
    }

    Ok(())
}

/// Print a pool census
fn print_census(census: &PoolCensus) {
    println!(
        "{}",
        format!("Pool census ({} instance(s)):", census.total()).bold()
    );
    println!();
    println!(
        "  {} Idle:      {}",
        "▸".cyan(),
        census.idle.to_string().green()
    );
    println!(
        "  {} Busy:      {}",
        "▸".cyan(),
        census.busy.to_string().yellow()
    );
    println!(
        "  {} Booting:   {}",
        "▸".cyan(),
        census.booting.to_string().cyan()
    );
    println!(
        "  {} Offline:   {}",
        "▸".cyan(),
        census.offline.to_string().red()
    );
    println!(
        "  {} Orphaned:  {}",
        "▸".cyan(),
        census.orphaned.to_string().red()
    );
    println!();
    println!("  Capacity: {}", census.capacity().to_string().bold());
}

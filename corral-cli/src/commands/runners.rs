//! Runner command handlers
//!
//! Lists the self-hosted runners registered under the configured scope.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use corral_core::domain::runner::{RegisteredRunner, RunnerStatus};
use corral_github::{EnterpriseUrls, GithubClient};
use corral_pool::PoolSettings;

/// Runner subcommands
#[derive(Subcommand)]
pub enum RunnerCommands {
    /// List runners registered under the pool scope
    List,
}

/// Handle runner commands
///
/// # Arguments
/// * `command` - The runner command to execute
/// * `settings` - Pool settings loaded from the environment
pub async fn handle_runner_command(
    command: RunnerCommands,
    settings: &PoolSettings,
) -> Result<()> {
    let urls = EnterpriseUrls::resolve(settings.enterprise_base_url.as_deref())
        .context("Failed to resolve GitHub endpoints")?;
    let client =
        GithubClient::new(&settings.github_token, &urls).context("Failed to build GitHub client")?;

    match command {
        RunnerCommands::List => list_runners(&client, settings).await,
    }
}

/// List registered runners
async fn list_runners(client: &GithubClient, settings: &PoolSettings) -> Result<()> {
    let scope = settings.scope();
    let runners = match client.list_self_hosted_runners(&scope).await {
        Ok(runners) => runners,
        Err(e) if e.is_not_found() => {
            println!(
                "{}",
                format!("Scope {} not found or the token lacks access to it.", scope).red()
            );
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if runners.is_empty() {
        println!("{}", "No runners registered.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} registered runner(s) for {}:", runners.len(), scope).bold()
        );
        println!();
        for runner in runners {
            print_runner_summary(&runner);
        }
    }

    Ok(())
}

/// Print a runner summary
fn print_runner_summary(runner: &RegisteredRunner) {
    println!("  {} Runner {}", "▸".cyan(), runner.name.bold());
    println!("    Id:      {}", runner.id);
    println!("    Status:  {}", colorize_status(&runner.status));
    println!(
        "    Busy:    {}",
        if runner.busy {
            "yes".yellow()
        } else {
            "no".green()
        }
    );
    if !runner.labels.is_empty() {
        let labels: Vec<&str> = runner.labels.iter().map(String::as_str).collect();
        println!("    Labels:  {}", labels.join(", ").dimmed());
    }
    println!();
}

/// Colorize runner status for display
fn colorize_status(status: &RunnerStatus) -> colored::ColoredString {
    match status {
        RunnerStatus::Online => "Online".green(),
        RunnerStatus::Offline => "Offline".red(),
    }
}

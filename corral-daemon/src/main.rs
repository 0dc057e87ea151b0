//! Corral Daemon
//!
//! Long-running keeper for a pool of self-hosted GitHub Actions runners.
//!
//! Architecture:
//! - Configuration: pool settings loaded from environment variables
//! - Clients: GitHub administration API and the fleet service
//! - Reconciler: snapshot both sides, classify, top the pool up
//! - Scheduler: periodic adjustment passes
//!
//! On every pass the daemon reads the fleet inventory and GitHub's
//! registration list, and orders new runner hosts whenever available plus
//! booting capacity falls short of the configured pool size.

mod scheduler;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use corral_core::dto::pool::PoolRequest;
use corral_fleet::FleetClient;
use corral_github::{EnterpriseUrls, GithubClient};
use corral_pool::{PoolReconciler, PoolSettings};

use crate::scheduler::PoolScheduler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "corral_daemon=info,corral_pool=info,corral_github=info,corral_fleet=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Corral daemon");

    // Load configuration
    let settings = PoolSettings::from_env().context("Failed to load pool settings")?;
    settings.validate().context("Invalid pool settings")?;
    info!(
        "Loaded settings: scope={}, pool_size={}, boot_grace={}m, interval={:?}",
        settings.scope(),
        settings.pool_size,
        settings.boot_grace.num_minutes(),
        settings.reconcile_interval
    );

    // Resolve GitHub endpoints and initialize clients
    let urls = EnterpriseUrls::resolve(settings.enterprise_base_url.as_deref())
        .context("Failed to resolve GitHub endpoints")?;
    info!("GitHub API endpoint: {}", urls.api_url());

    let github = Arc::new(
        GithubClient::new(&settings.github_token, &urls)
            .context("Failed to build GitHub client")?,
    );
    let fleet = Arc::new(FleetClient::new(settings.fleet_api_url.clone()));

    info!("Clients initialized");

    // Wire the reconciler and start the scheduler
    let request = PoolRequest {
        desired_pool_size: settings.pool_size,
    };
    let interval = settings.reconcile_interval;
    let reconciler = PoolReconciler::new(settings, fleet.clone(), github, fleet);
    let scheduler = PoolScheduler::new(reconciler, request, interval);

    scheduler.run().await
}

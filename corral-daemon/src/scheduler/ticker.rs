//! Adjustment ticker
//!
//! Runs one adjustment pass per interval tick. A failed pass is logged and
//! dropped; the next tick starts over from fresh snapshots.

use anyhow::Result;
use std::time::Duration;
use tokio::time;
use tracing::{debug, error, info};

use corral_core::dto::pool::PoolRequest;
use corral_pool::{AdjustReport, PoolReconciler};

/// Drives adjustment passes until the process stops
pub struct PoolScheduler {
    reconciler: PoolReconciler,
    request: PoolRequest,
    interval: Duration,
}

impl PoolScheduler {
    /// Creates a scheduler that keeps the pool at the requested size
    pub fn new(reconciler: PoolReconciler, request: PoolRequest, interval: Duration) -> Self {
        Self {
            reconciler,
            request,
            interval,
        }
    }

    /// Starts the adjustment loop
    pub async fn run(&self) -> Result<()> {
        info!(
            "Starting pool scheduler (desired size: {}, interval: {:?})",
            self.request.desired_pool_size, self.interval
        );

        let mut interval = time::interval(self.interval);

        loop {
            interval.tick().await;

            debug!("Running adjustment pass");

            match self.adjust_once().await {
                Ok(report) => {
                    if report.requested > 0 {
                        info!("Ordered {} runner(s) this pass", report.requested);
                    }
                }
                Err(e) => {
                    error!("Error during adjustment pass: {:#}", e);
                }
            }
        }
    }

    /// Performs a single adjustment pass
    async fn adjust_once(&self) -> Result<AdjustReport> {
        Ok(self.reconciler.adjust(self.request).await?)
    }
}

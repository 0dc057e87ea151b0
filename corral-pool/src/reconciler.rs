//! Pool reconciler
//!
//! Joins the fleet instance inventory with GitHub's registration list and
//! tops the pool up to a requested size. One adjustment pass places at
//! most one provisioning order and never retries; the next pass sees the
//! updated inventory and corrects from there.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use corral_core::domain::instance::Instance;
use corral_core::domain::runner::RegisteredRunner;
use corral_core::domain::scope::Scope;
use corral_core::dto::pool::{CreateRunnersSpec, PoolRequest};
use corral_core::pool::{PoolCensus, classify, strip_runner_prefix};

use crate::config::PoolSettings;
use crate::error::{PoolError, Result};
use crate::provider::{InstanceInventory, RunnerCreator, RunnerRegistry};

/// Outcome of one adjustment pass
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdjustReport {
    /// Size the pool was asked to reach
    pub desired_pool_size: u32,

    /// Classification counts observed before any provisioning
    pub census: PoolCensus,

    /// Runners ordered from the fleet service this pass; zero when the
    /// pool already had enough capacity
    pub requested: u32,
}

/// Keeps one runner pool at its requested size
pub struct PoolReconciler {
    settings: PoolSettings,
    scope: Scope,
    inventory: Arc<dyn InstanceInventory>,
    registry: Arc<dyn RunnerRegistry>,
    creator: Arc<dyn RunnerCreator>,
}

impl PoolReconciler {
    /// Creates a reconciler over the given providers
    pub fn new(
        settings: PoolSettings,
        inventory: Arc<dyn InstanceInventory>,
        registry: Arc<dyn RunnerRegistry>,
        creator: Arc<dyn RunnerCreator>,
    ) -> Self {
        let scope = settings.scope();
        Self {
            settings,
            scope,
            inventory,
            registry,
            creator,
        }
    }

    /// Brings the pool up to the requested size.
    ///
    /// Fetches both snapshots concurrently, classifies every instance
    /// against one clock reading, and orders exactly the missing number of
    /// runner hosts when capacity falls short. Downsizing is out of scope;
    /// a surplus pool is left alone.
    pub async fn adjust(&self, request: PoolRequest) -> Result<AdjustReport> {
        let (instances, runners) = self.snapshots().await?;
        let census = self.take_census(&instances, &runners, Utc::now());

        info!(
            "Pool {} holds {} instance(s): {}",
            self.scope,
            census.total(),
            census
        );

        let deficit = census.deficit(request.desired_pool_size);
        if deficit == 0 {
            info!(
                "Pool {} has capacity {} of {} desired, nothing to order",
                self.scope,
                census.capacity(),
                request.desired_pool_size
            );
            return Ok(AdjustReport {
                desired_pool_size: request.desired_pool_size,
                census,
                requested: 0,
            });
        }

        info!(
            "Pool {} short by {} runner(s), placing order",
            self.scope, deficit
        );

        let spec = CreateRunnersSpec {
            number_of_runners: deficit,
            scope: self.scope.clone(),
            enterprise_base_url: self.settings.enterprise_base_url.clone(),
        };
        self.creator
            .create_runners(&spec)
            .await
            .map_err(PoolError::Creation)?;

        Ok(AdjustReport {
            desired_pool_size: request.desired_pool_size,
            census,
            requested: deficit,
        })
    }

    /// Classifies the pool without ordering anything
    pub async fn census(&self) -> Result<PoolCensus> {
        let (instances, runners) = self.snapshots().await?;
        Ok(self.take_census(&instances, &runners, Utc::now()))
    }

    /// Fetches both snapshots concurrently; either failure aborts the pass
    async fn snapshots(&self) -> Result<(Vec<Instance>, Vec<RegisteredRunner>)> {
        tokio::try_join!(
            async {
                self.inventory
                    .list_instances(&self.scope)
                    .await
                    .map_err(PoolError::InstanceInventory)
            },
            async {
                self.registry
                    .list_registered_runners(&self.scope)
                    .await
                    .map_err(PoolError::RunnerRegistry)
            },
        )
    }

    /// Folds the two snapshots into a census.
    ///
    /// Runners correlate to instances by prefix-stripped name; names
    /// without the configured prefix belong to runners outside the pool
    /// and are ignored.
    fn take_census(
        &self,
        instances: &[Instance],
        runners: &[RegisteredRunner],
        now: DateTime<Utc>,
    ) -> PoolCensus {
        let prefix = self.settings.runner_name_prefix.as_deref();
        let mut by_instance_id: HashMap<&str, &RegisteredRunner> = HashMap::new();

        for runner in runners {
            let Some(instance_id) = strip_runner_prefix(&runner.name, prefix) else {
                debug!("Ignoring foreign runner {}", runner.name);
                continue;
            };
            if let Some(previous) = by_instance_id.insert(instance_id, runner) {
                warn!(
                    "Runners {} and {} both map to instance id {}, keeping the latter",
                    previous.name, runner.name, instance_id
                );
            }
        }

        let mut census = PoolCensus::default();
        for instance in instances {
            let runner = by_instance_id.get(instance.id.as_str()).copied();
            let class = classify(instance, runner, self.settings.boot_grace, now);
            debug!("Instance {} classified as {}", instance.id, class);
            census.record(class);
        }

        census
    }
}

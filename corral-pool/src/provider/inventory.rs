//! Instance inventory provider
//!
//! Supplies the fleet-side snapshot of an adjustment pass: every instance
//! currently leased for the pool's scope.

use anyhow::Result;
use async_trait::async_trait;
use corral_core::domain::instance::Instance;
use corral_core::domain::scope::Scope;
use corral_fleet::FleetClient;

/// Source of the live instance list
#[async_trait]
pub trait InstanceInventory: Send + Sync {
    /// Lists the instances leased for `scope`
    ///
    /// An empty list is a valid answer for a fresh pool. Failures must
    /// surface as errors, never as an empty list.
    async fn list_instances(&self, scope: &Scope) -> Result<Vec<Instance>>;
}

#[async_trait]
impl InstanceInventory for FleetClient {
    async fn list_instances(&self, scope: &Scope) -> Result<Vec<Instance>> {
        Ok(FleetClient::list_instances(self, scope).await?)
    }
}

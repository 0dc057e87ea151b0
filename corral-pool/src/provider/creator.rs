//! Runner creator provider
//!
//! The provisioning side of an adjustment pass. The reconciler invokes it
//! at most once per pass, with the exact shortfall.

use anyhow::Result;
use async_trait::async_trait;
use corral_core::dto::pool::CreateRunnersSpec;
use corral_fleet::FleetClient;

/// Sink for provisioning orders
#[async_trait]
pub trait RunnerCreator: Send + Sync {
    /// Orders `spec.number_of_runners` new runner hosts
    ///
    /// Implementations acknowledge acceptance of the order; they do not
    /// wait for the machines to boot or register.
    async fn create_runners(&self, spec: &CreateRunnersSpec) -> Result<()>;
}

#[async_trait]
impl RunnerCreator for FleetClient {
    async fn create_runners(&self, spec: &CreateRunnersSpec) -> Result<()> {
        Ok(FleetClient::create_runners(self, spec).await?)
    }
}

//! Instance inventory endpoints

use corral_core::domain::instance::Instance;
use corral_core::domain::scope::Scope;
use tracing::debug;

use crate::FleetClient;
use crate::error::Result;

impl FleetClient {
    /// List the instances currently leased for a scope
    ///
    /// Instances appear in the inventory the moment the fleet service
    /// accepts a launch order and stay there until the machine is
    /// reclaimed, so the list covers booting, working and wedged machines
    /// alike. An empty list is normal for a fresh pool.
    ///
    /// # Arguments
    /// * `scope` - Organization or repository whose instances to list
    pub async fn list_instances(&self, scope: &Scope) -> Result<Vec<Instance>> {
        let url = format!("{}/api/instances", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("kind", scope.kind.to_string()),
                ("owner", scope.owner.clone()),
            ])
            .send()
            .await?;

        let instances: Vec<Instance> = self.handle_response(response).await?;
        debug!("Fleet reports {} instance(s) for {}", instances.len(), scope);
        Ok(instances)
    }
}

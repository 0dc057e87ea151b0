//! Pool DTOs
//!
//! Data transfer objects for pool sizing and fleet provisioning requests.

use serde::{Deserialize, Serialize};

use crate::domain::scope::Scope;

/// Request to bring a pool up to a desired size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRequest {
    /// Number of runners the pool should hold, counting runners that are
    /// available now and instances still booting toward registration
    pub desired_pool_size: u32,
}

/// Instruction for the fleet service to launch new runner hosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRunnersSpec {
    /// Exact number of instances to launch
    pub number_of_runners: u32,

    /// Where the new runners must register
    pub scope: Scope,

    /// Base URL the runners register against when the pool targets a
    /// GitHub Enterprise deployment instead of public GitHub
    pub enterprise_base_url: Option<String>,
}

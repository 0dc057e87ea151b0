//! Compute instance domain model
//!
//! Represents a machine leased from the fleet service to host exactly one
//! self-hosted runner.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::scope::ScopeKind;

/// A runner host leased from the fleet service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Fleet-assigned identifier; also the suffix of the runner name the
    /// instance registers under
    pub id: String,

    /// When the instance was launched
    pub launch_time: DateTime<Utc>,

    /// Registration level the instance was provisioned for
    pub scope: ScopeKind,

    /// Organization or repository the instance serves
    pub owner: String,
}

impl Instance {
    /// Time elapsed since the instance was launched
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.launch_time)
    }
}

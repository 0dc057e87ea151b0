//! Registered runner domain model
//!
//! Represents a self-hosted runner as reported by the GitHub Actions
//! administration API.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A self-hosted runner registered with GitHub Actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredRunner {
    /// GitHub-assigned numeric identifier
    pub id: u64,

    /// Runner name chosen at registration time
    pub name: String,

    /// Whether the runner is currently connected
    pub status: RunnerStatus,

    /// Whether the runner is executing a job right now
    pub busy: bool,

    /// Labels the runner advertises
    pub labels: BTreeSet<String>,
}

/// Connectivity of a registered runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerStatus {
    /// Runner is connected and can accept jobs
    Online,

    /// Runner is registered but not connected
    Offline,
}

impl std::fmt::Display for RunnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerStatus::Online => write!(f, "Online"),
            RunnerStatus::Offline => write!(f, "Offline"),
        }
    }
}

//! Corral Pool
//!
//! Reconciliation library that keeps a pool of self-hosted GitHub Actions
//! runners at a requested size. Each adjustment pass reads two snapshots,
//! the fleet instance inventory and GitHub's registration list, classifies
//! every instance, and orders exactly the missing number of runner hosts
//! from the fleet service.
//!
//! Architecture:
//! - Config: pool settings read from environment variables
//! - Providers: trait seams over the fleet and GitHub clients
//! - Reconciler: the snapshot-classify-order pass itself

pub mod config;
pub mod error;
pub mod provider;
pub mod reconciler;

// Re-export commonly used types
pub use config::PoolSettings;
pub use error::PoolError;
pub use provider::{InstanceInventory, RunnerCreator, RunnerRegistry};
pub use reconciler::{AdjustReport, PoolReconciler};

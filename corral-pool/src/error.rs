//! Error types for pool reconciliation

use thiserror::Error;

/// Result type alias for pool operations
pub type Result<T> = std::result::Result<T, PoolError>;

/// Errors that can occur while adjusting a pool
///
/// Snapshot errors abort the whole pass before anything is ordered; a
/// failed order surfaces as `Creation` and is not retried until the next
/// pass.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The fleet-side snapshot could not be read
    #[error("failed to list runner instances")]
    InstanceInventory(#[source] anyhow::Error),

    /// The GitHub-side snapshot could not be read
    #[error("failed to list registered runners")]
    RunnerRegistry(#[source] anyhow::Error),

    /// The provisioning order was not accepted
    #[error("runner creation order failed")]
    Creation(#[source] anyhow::Error),

    /// Settings are missing or invalid
    #[error("invalid pool configuration: {0}")]
    Configuration(String),
}

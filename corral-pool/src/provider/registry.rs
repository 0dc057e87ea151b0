//! Runner registry provider
//!
//! Supplies the GitHub-side snapshot of an adjustment pass: every runner
//! registered under the pool's scope, offline registrations included.

use anyhow::Result;
use async_trait::async_trait;
use corral_core::domain::runner::RegisteredRunner;
use corral_core::domain::scope::Scope;
use corral_github::GithubClient;

/// Source of the registered runner list
#[async_trait]
pub trait RunnerRegistry: Send + Sync {
    /// Lists the runners registered under `scope`
    ///
    /// The list must include offline registrations, not just connected
    /// runners.
    async fn list_registered_runners(&self, scope: &Scope) -> Result<Vec<RegisteredRunner>>;
}

#[async_trait]
impl RunnerRegistry for GithubClient {
    async fn list_registered_runners(&self, scope: &Scope) -> Result<Vec<RegisteredRunner>> {
        Ok(self.list_self_hosted_runners(scope).await?)
    }
}

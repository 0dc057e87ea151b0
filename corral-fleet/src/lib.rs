//! Corral Fleet Client
//!
//! A typed HTTP client for the fleet service, the compute provider that
//! leases the machines self-hosted runners live on. Corral uses it for two
//! things: reading the current instance inventory and ordering new runner
//! hosts.
//!
//! # Example
//!
//! ```no_run
//! use corral_core::domain::scope::Scope;
//! use corral_fleet::FleetClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FleetClient::new("http://fleet.internal:8080");
//!
//!     let instances = client.list_instances(&Scope::organization("acme")).await?;
//!     println!("{} instance(s) leased", instances.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod instances;
mod runners;

// Re-export commonly used types
pub use error::{FleetError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the fleet service API
#[derive(Debug, Clone)]
pub struct FleetClient {
    /// Base URL of the fleet service (e.g., "http://fleet.internal:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl FleetClient {
    /// Create a new fleet client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the fleet service API
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new fleet client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the fleet service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FleetError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| FleetError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body does not matter
    ///
    /// Used for provisioning requests, which are acknowledged with an empty
    /// 2xx once the fleet service accepts the order.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FleetError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

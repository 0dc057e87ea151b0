//! Corral GitHub Client
//!
//! A typed client for the slice of the GitHub Actions administration API
//! the pool keeper needs: listing the self-hosted runners registered under
//! an organization or a repository.
//!
//! The client works against public GitHub, GitHub Enterprise Server and
//! GitHub data-residency deployments; [`EnterpriseUrls`] resolves which
//! endpoints to talk to.
//!
//! # Example
//!
//! ```no_run
//! use corral_core::domain::scope::Scope;
//! use corral_github::{EnterpriseUrls, GithubClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let urls = EnterpriseUrls::resolve(None)?;
//!     let client = GithubClient::new("ghs_installation_token", &urls)?;
//!
//!     let runners = client
//!         .list_self_hosted_runners(&Scope::organization("acme"))
//!         .await?;
//!     println!("{} registered runner(s)", runners.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod runners;
pub mod urls;

// Re-export commonly used types
pub use error::{GithubError, Result};
pub use urls::EnterpriseUrls;

use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

static APP_USER_AGENT: &str = concat!("corral/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the GitHub Actions administration API
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// REST API root (e.g. "https://api.github.com")
    api_url: String,
    /// HTTP client instance carrying the auth and accept headers
    client: Client,
}

impl GithubClient {
    /// Create a client authenticated with an installation token
    ///
    /// # Arguments
    /// * `token` - Token with administration read access to the target scope
    /// * `urls` - Resolved endpoints, see [`EnterpriseUrls::resolve`]
    pub fn new(token: &str, urls: &EnterpriseUrls) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            GithubError::InvalidRequest(
                "token contains characters that are not allowed in a header".to_string(),
            )
        })?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self::with_client(urls.api_url(), client))
    }

    /// Create a client around a preconfigured reqwest client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    /// The caller is responsible for attaching authentication headers.
    pub fn with_client(api_url: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// REST API root this client talks to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GithubError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| GithubError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = GithubClient::with_client("https://api.github.com/", Client::new());
        assert_eq!(client.api_url(), "https://api.github.com");
    }

    #[test]
    fn test_client_from_resolved_urls() {
        let urls = EnterpriseUrls::resolve(None).unwrap();
        let client = GithubClient::new("token", &urls).unwrap();
        assert_eq!(client.api_url(), "https://api.github.com");
    }
}

//! GitHub endpoint resolution
//!
//! Maps the optional enterprise base URL from configuration onto the two
//! URLs Corral needs: the REST API root used for administration calls and
//! the web base URL new runners register against.

use reqwest::Url;

use crate::error::{GithubError, Result};

/// REST API root for public GitHub
pub const PUBLIC_API_URL: &str = "https://api.github.com";

/// Web base URL for public GitHub
pub const PUBLIC_BASE_URL: &str = "https://github.com";

const DATA_RESIDENCY_SUFFIX: &str = ".ghe.com";

/// Resolved GitHub endpoints for one deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseUrls {
    api_url: String,
    base_url: String,
}

impl EnterpriseUrls {
    /// Resolves endpoints from an optional enterprise base URL.
    ///
    /// With no URL (or an empty one) the public GitHub endpoints are used.
    /// Data-residency deployments (`*.ghe.com`) serve their API from an
    /// `api.` sibling host; every other enterprise deployment serves it
    /// under the `/api/v3` path of the base URL.
    ///
    /// # Example
    /// ```
    /// use corral_github::EnterpriseUrls;
    ///
    /// let urls = EnterpriseUrls::resolve(Some("https://companyname.ghe.com")).unwrap();
    /// assert_eq!(urls.api_url(), "https://api.companyname.ghe.com");
    /// assert_eq!(urls.base_url(), "https://companyname.ghe.com");
    /// ```
    pub fn resolve(enterprise_base_url: Option<&str>) -> Result<Self> {
        let base = match enterprise_base_url {
            None => return Ok(Self::public()),
            Some(url) if url.trim().is_empty() => return Ok(Self::public()),
            Some(url) => url.trim().trim_end_matches('/'),
        };

        let parsed = Url::parse(base).map_err(|e| {
            GithubError::InvalidRequest(format!("invalid enterprise base URL `{}`: {}", base, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(GithubError::InvalidRequest(format!(
                "enterprise base URL `{}` must use http or https",
                base
            )));
        }

        let host = parsed.host_str().ok_or_else(|| {
            GithubError::InvalidRequest(format!("enterprise base URL `{}` has no host", base))
        })?;

        let api_url = if host.ends_with(DATA_RESIDENCY_SUFFIX) {
            format!("https://api.{}", host)
        } else {
            format!("{}/api/v3", base)
        };

        Ok(EnterpriseUrls {
            api_url,
            base_url: base.to_string(),
        })
    }

    fn public() -> Self {
        EnterpriseUrls {
            api_url: PUBLIC_API_URL.to_string(),
            base_url: PUBLIC_BASE_URL.to_string(),
        }
    }

    /// REST API root, without a trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Web base URL runners register against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

//! Pool configuration
//!
//! Defines all configurable parameters for a runner pool: target size,
//! boot grace period, runner naming, registration scope and the endpoints
//! of the two services the reconciler talks to.

use std::time::Duration;

use corral_core::domain::scope::Scope;

use crate::error::PoolError;

/// Runner pool configuration
///
/// The boot grace period deserves tuning per image: it must outlast a
/// normal boot-and-register cycle, or fresh instances get miscounted as
/// orphans and the pool overshoots.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Number of runners the pool should keep available or booting
    pub pool_size: u32,

    /// How long an instance may stay unregistered before it stops counting
    /// as booting capacity
    pub boot_grace: chrono::Duration,

    /// Prefix runner names carry in front of the instance id; `None` when
    /// runners register under the bare instance id
    pub runner_name_prefix: Option<String>,

    /// Organization login, or `owner/repo` when `org_runners` is false
    pub runner_owner: String,

    /// Register runners for the whole organization instead of a single
    /// repository
    pub org_runners: bool,

    /// GitHub Enterprise base URL; `None` targets public GitHub
    pub enterprise_base_url: Option<String>,

    /// Token with administration read access to the target scope
    pub github_token: String,

    /// Base URL of the fleet service
    pub fleet_api_url: String,

    /// How often the daemon runs an adjustment pass
    pub reconcile_interval: Duration,
}

impl PoolSettings {
    /// Creates settings from environment variables
    ///
    /// Expected environment variables:
    /// - POOL_SIZE (required)
    /// - RUNNER_OWNER (required)
    /// - GITHUB_TOKEN (required)
    /// - FLEET_API_URL (required)
    /// - BOOT_GRACE_PERIOD_MINUTES (optional, default: 5)
    /// - RUNNER_NAME_PREFIX (optional, default: no prefix)
    /// - ENABLE_ORG_RUNNERS (optional, "true"/"false", default: false)
    /// - GITHUB_ENTERPRISE_URL (optional, default: public GitHub)
    /// - POOL_RECONCILE_INTERVAL_SECONDS (optional, default: 60)
    pub fn from_env() -> Result<Self, PoolError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self, PoolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pool_size = required(&get, "POOL_SIZE")?
            .parse::<u32>()
            .map_err(|_| invalid("POOL_SIZE must be a non-negative integer"))?;

        let runner_owner = required(&get, "RUNNER_OWNER")?;
        let github_token = required(&get, "GITHUB_TOKEN")?;
        let fleet_api_url = required(&get, "FLEET_API_URL")?;

        let boot_grace_minutes = get("BOOT_GRACE_PERIOD_MINUTES")
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|_| invalid("BOOT_GRACE_PERIOD_MINUTES must be a non-negative integer"))
            })
            .transpose()?
            .unwrap_or(5);

        let runner_name_prefix = get("RUNNER_NAME_PREFIX").filter(|p| !p.is_empty());

        let org_runners = get("ENABLE_ORG_RUNNERS")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        let enterprise_base_url = get("GITHUB_ENTERPRISE_URL").filter(|u| !u.trim().is_empty());

        let reconcile_interval = get("POOL_RECONCILE_INTERVAL_SECONDS")
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|_| invalid("POOL_RECONCILE_INTERVAL_SECONDS must be a positive integer"))
            })
            .transpose()?
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(60));

        Ok(Self {
            pool_size,
            boot_grace: chrono::Duration::minutes(i64::from(boot_grace_minutes)),
            runner_name_prefix,
            runner_owner,
            org_runners,
            enterprise_base_url,
            github_token,
            fleet_api_url,
            reconcile_interval,
        })
    }

    /// The scope the pool serves, derived from owner and registration level
    pub fn scope(&self) -> Scope {
        if self.org_runners {
            Scope::organization(self.runner_owner.clone())
        } else {
            Scope::repository(self.runner_owner.clone())
        }
    }

    /// Validates the settings
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.runner_owner.is_empty() {
            return Err(invalid("runner_owner cannot be empty"));
        }

        if self.org_runners && self.runner_owner.contains('/') {
            return Err(invalid(
                "runner_owner must be an organization login when org runners are enabled",
            ));
        }

        if !self.org_runners && !self.runner_owner.contains('/') {
            return Err(invalid(
                "runner_owner must be written as owner/repo when org runners are disabled",
            ));
        }

        if self.github_token.is_empty() {
            return Err(invalid("github_token cannot be empty"));
        }

        if !self.fleet_api_url.starts_with("http://")
            && !self.fleet_api_url.starts_with("https://")
        {
            return Err(invalid("fleet_api_url must start with http:// or https://"));
        }

        if self.reconcile_interval.as_secs() == 0 {
            return Err(invalid("reconcile_interval must be greater than 0"));
        }

        Ok(())
    }
}

fn required<F>(get: &F, key: &str) -> Result<String, PoolError>
where
    F: Fn(&str) -> Option<String>,
{
    get(key).ok_or_else(|| {
        PoolError::Configuration(format!("{} environment variable not set", key))
    })
}

fn invalid(message: &str) -> PoolError {
    PoolError::Configuration(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use corral_core::domain::scope::ScopeKind;
    use std::collections::HashMap;

    fn vars(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn from_vars(entries: &[(&str, &str)]) -> Result<PoolSettings, PoolError> {
        let vars = vars(entries);
        PoolSettings::from_lookup(|key| vars.get(key).cloned())
    }

    fn minimal() -> Vec<(&'static str, &'static str)> {
        vec![
            ("POOL_SIZE", "4"),
            ("RUNNER_OWNER", "acme/widgets"),
            ("GITHUB_TOKEN", "token"),
            ("FLEET_API_URL", "http://fleet.internal:8080"),
        ]
    }

    #[test]
    fn test_defaults_for_optional_settings() {
        let settings = from_vars(&minimal()).unwrap();

        assert_eq!(settings.pool_size, 4);
        assert_eq!(settings.boot_grace, chrono::Duration::minutes(5));
        assert_eq!(settings.runner_name_prefix, None);
        assert!(!settings.org_runners);
        assert_eq!(settings.enterprise_base_url, None);
        assert_eq!(settings.reconcile_interval, Duration::from_secs(60));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_required_variable_fails() {
        let mut entries = minimal();
        entries.retain(|(k, _)| *k != "POOL_SIZE");

        let err = from_vars(&entries).unwrap_err();
        assert!(err.to_string().contains("POOL_SIZE"));
    }

    #[test]
    fn test_invalid_numbers_fail() {
        let mut entries = minimal();
        entries.push(("BOOT_GRACE_PERIOD_MINUTES", "soon"));
        assert!(from_vars(&entries).is_err());

        let mut entries = minimal();
        entries[0] = ("POOL_SIZE", "-3");
        assert!(from_vars(&entries).is_err());
    }

    #[test]
    fn test_org_level_scope() {
        let mut entries = minimal();
        entries.push(("ENABLE_ORG_RUNNERS", "true"));
        entries[1] = ("RUNNER_OWNER", "acme");

        let settings = from_vars(&entries).unwrap();
        assert!(settings.validate().is_ok());

        let scope = settings.scope();
        assert_eq!(scope.kind, ScopeKind::Organization);
        assert_eq!(scope.owner, "acme");
    }

    #[test]
    fn test_validation_rejects_mismatched_owner() {
        let mut entries = minimal();
        entries.push(("ENABLE_ORG_RUNNERS", "true"));
        let settings = from_vars(&entries).unwrap();
        assert!(settings.validate().is_err());

        let mut entries = minimal();
        entries[1] = ("RUNNER_OWNER", "acme");
        let settings = from_vars(&entries).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_fleet_url() {
        let mut entries = minimal();
        entries[3] = ("FLEET_API_URL", "fleet.internal:8080");
        let settings = from_vars(&entries).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_empty_prefix_means_no_prefix() {
        let mut entries = minimal();
        entries.push(("RUNNER_NAME_PREFIX", ""));
        let settings = from_vars(&entries).unwrap();
        assert_eq!(settings.runner_name_prefix, None);

        let mut entries = minimal();
        entries.push(("RUNNER_NAME_PREFIX", "pool-"));
        let settings = from_vars(&entries).unwrap();
        assert_eq!(settings.runner_name_prefix.as_deref(), Some("pool-"));
    }
}

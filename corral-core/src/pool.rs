//! Pool membership classification
//!
//! Pure functions that fold two snapshots, the fleet instance list and the
//! GitHub registered-runner list, into a census of the pool. Nothing here
//! performs I/O; callers fetch both snapshots first and classify them
//! against a single clock reading.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::instance::Instance;
use crate::domain::runner::{RegisteredRunner, RunnerStatus};

// =============================================================================
// Classification
// =============================================================================

/// What a single instance contributes to the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceClass {
    /// Registered, online and waiting for work
    Idle,

    /// Registered and currently executing a job
    Busy,

    /// Not registered yet, still inside the boot grace period
    Booting,

    /// Registered but disconnected from GitHub
    Offline,

    /// Never registered and past the boot grace period
    Orphaned,
}

impl InstanceClass {
    /// Whether this class counts toward pool capacity
    pub fn counts_toward_capacity(self) -> bool {
        matches!(self, InstanceClass::Idle | InstanceClass::Booting)
    }
}

impl std::fmt::Display for InstanceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceClass::Idle => write!(f, "Idle"),
            InstanceClass::Busy => write!(f, "Busy"),
            InstanceClass::Booting => write!(f, "Booting"),
            InstanceClass::Offline => write!(f, "Offline"),
            InstanceClass::Orphaned => write!(f, "Orphaned"),
        }
    }
}

/// Strips the pool naming prefix from a registered runner name.
///
/// Runners launched by the pool register under `{prefix}{instance_id}`, so
/// the remainder after the prefix is the fleet instance id the runner runs
/// on. Returns `None` when the name does not carry the prefix, which marks
/// the runner as foreign to this pool.
pub fn strip_runner_prefix<'a>(name: &'a str, prefix: Option<&str>) -> Option<&'a str> {
    match prefix {
        Some(prefix) => name.strip_prefix(prefix),
        None => Some(name),
    }
}

/// Classifies one instance against the runner registered for it, if any.
///
/// `runner` must be the registration whose prefix-stripped name equals the
/// instance id. Instances without a registration get the boot grace period
/// to finish setup before they are written off as orphaned.
///
/// Busyness wins over connectivity: a busy runner stays `Busy` even when
/// the registration also reports it offline.
pub fn classify(
    instance: &Instance,
    runner: Option<&RegisteredRunner>,
    boot_grace: Duration,
    now: DateTime<Utc>,
) -> InstanceClass {
    match runner {
        Some(runner) if runner.busy => InstanceClass::Busy,
        Some(runner) => match runner.status {
            RunnerStatus::Online => InstanceClass::Idle,
            RunnerStatus::Offline => InstanceClass::Offline,
        },
        None if instance.age(now) < boot_grace => InstanceClass::Booting,
        None => InstanceClass::Orphaned,
    }
}

// =============================================================================
// Census
// =============================================================================

/// Aggregated classification counts for one pool snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolCensus {
    pub idle: u32,
    pub busy: u32,
    pub booting: u32,
    pub offline: u32,
    pub orphaned: u32,
}

impl PoolCensus {
    /// Adds one classified instance to the census
    pub fn record(&mut self, class: InstanceClass) {
        match class {
            InstanceClass::Idle => self.idle += 1,
            InstanceClass::Busy => self.busy += 1,
            InstanceClass::Booting => self.booting += 1,
            InstanceClass::Offline => self.offline += 1,
            InstanceClass::Orphaned => self.orphaned += 1,
        }
    }

    /// Runners that are available now or will be once booting finishes
    pub fn capacity(&self) -> u32 {
        self.idle + self.booting
    }

    /// Every instance seen in the snapshot, regardless of class
    pub fn total(&self) -> u32 {
        self.idle + self.busy + self.booting + self.offline + self.orphaned
    }

    /// How many instances must be launched to reach `desired` capacity
    pub fn deficit(&self, desired: u32) -> u32 {
        desired.saturating_sub(self.capacity())
    }
}

impl std::fmt::Display for PoolCensus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} idle, {} busy, {} booting, {} offline, {} orphaned",
            self.idle, self.busy, self.booting, self.offline, self.orphaned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scope::ScopeKind;
    use std::collections::BTreeSet;

    fn instance(id: &str, age_minutes: i64, now: DateTime<Utc>) -> Instance {
        Instance {
            id: id.to_string(),
            launch_time: now - Duration::minutes(age_minutes),
            scope: ScopeKind::Organization,
            owner: "acme".to_string(),
        }
    }

    fn runner(name: &str, status: RunnerStatus, busy: bool) -> RegisteredRunner {
        RegisteredRunner {
            id: 1,
            name: name.to_string(),
            status,
            busy,
            labels: BTreeSet::new(),
        }
    }

    #[test]
    fn test_correlated_idle_runner() {
        let now = Utc::now();
        let instance = instance("i-1", 30, now);
        let runner = runner("pool-i-1", RunnerStatus::Online, false);

        let class = classify(&instance, Some(&runner), Duration::minutes(5), now);
        assert_eq!(class, InstanceClass::Idle);
        assert!(class.counts_toward_capacity());
    }

    #[test]
    fn test_correlated_busy_runner() {
        let now = Utc::now();
        let instance = instance("i-1", 30, now);
        let runner = runner("pool-i-1", RunnerStatus::Online, true);

        let class = classify(&instance, Some(&runner), Duration::minutes(5), now);
        assert_eq!(class, InstanceClass::Busy);
        assert!(!class.counts_toward_capacity());
    }

    #[test]
    fn test_busy_wins_over_offline() {
        let now = Utc::now();
        let instance = instance("i-1", 30, now);
        let runner = runner("pool-i-1", RunnerStatus::Offline, true);

        let class = classify(&instance, Some(&runner), Duration::minutes(5), now);
        assert_eq!(class, InstanceClass::Busy);
    }

    #[test]
    fn test_correlated_offline_runner_excluded() {
        let now = Utc::now();
        let instance = instance("i-1", 30, now);
        let runner = runner("pool-i-1", RunnerStatus::Offline, false);

        let class = classify(&instance, Some(&runner), Duration::minutes(5), now);
        assert_eq!(class, InstanceClass::Offline);
        assert!(!class.counts_toward_capacity());
    }

    #[test]
    fn test_unregistered_instance_within_grace_is_booting() {
        let now = Utc::now();
        let instance = instance("i-1", 2, now);

        let class = classify(&instance, None, Duration::minutes(5), now);
        assert_eq!(class, InstanceClass::Booting);
        assert!(class.counts_toward_capacity());
    }

    #[test]
    fn test_unregistered_instance_past_grace_is_orphaned() {
        let now = Utc::now();
        let instance = instance("i-1", 10, now);

        let class = classify(&instance, None, Duration::minutes(5), now);
        assert_eq!(class, InstanceClass::Orphaned);
        assert!(!class.counts_toward_capacity());
    }

    #[test]
    fn test_age_exactly_at_grace_is_orphaned() {
        let now = Utc::now();
        let instance = instance("i-1", 5, now);

        let class = classify(&instance, None, Duration::minutes(5), now);
        assert_eq!(class, InstanceClass::Orphaned);
    }

    #[test]
    fn test_strip_runner_prefix() {
        assert_eq!(strip_runner_prefix("pool-i-1", Some("pool-")), Some("i-1"));
        assert_eq!(strip_runner_prefix("other-i-1", Some("pool-")), None);
        assert_eq!(strip_runner_prefix("i-1", None), Some("i-1"));
    }

    #[test]
    fn test_census_capacity_and_deficit() {
        let mut census = PoolCensus::default();
        census.record(InstanceClass::Idle);
        census.record(InstanceClass::Idle);
        census.record(InstanceClass::Booting);
        census.record(InstanceClass::Busy);
        census.record(InstanceClass::Offline);
        census.record(InstanceClass::Orphaned);

        assert_eq!(census.capacity(), 3);
        assert_eq!(census.total(), 6);
        assert_eq!(census.deficit(5), 2);
        assert_eq!(census.deficit(3), 0);
        assert_eq!(census.deficit(1), 0);
    }

    #[test]
    fn test_runner_status_wire_format() {
        let status: RunnerStatus = serde_json::from_str("\"online\"").unwrap();
        assert_eq!(status, RunnerStatus::Online);
        assert_eq!(serde_json::to_string(&InstanceClass::Idle).unwrap(), "\"idle\"");
    }
}

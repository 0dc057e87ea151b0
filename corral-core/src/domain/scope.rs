//! Pool scope domain model
//!
//! Identifies where a pool's runners register: a whole organization or a
//! single repository.

use serde::{Deserialize, Serialize};

/// Registration level of a runner pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    /// Runners are shared by every repository in an organization
    Organization,

    /// Runners belong to a single repository
    Repository,
}

impl std::fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeKind::Organization => write!(f, "Organization"),
            ScopeKind::Repository => write!(f, "Repository"),
        }
    }
}

/// The organization or repository a pool serves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Registration level
    pub kind: ScopeKind,

    /// Organization login, or `owner/repo` for repository pools
    pub owner: String,
}

impl Scope {
    /// Creates an organization-level scope
    pub fn organization(owner: impl Into<String>) -> Self {
        Scope {
            kind: ScopeKind::Organization,
            owner: owner.into(),
        }
    }

    /// Creates a repository-level scope; `owner` is expected as `owner/repo`
    pub fn repository(owner: impl Into<String>) -> Self {
        Scope {
            kind: ScopeKind::Repository,
            owner: owner.into(),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.owner)
    }
}

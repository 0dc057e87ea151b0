//! Self-hosted runner listing endpoints

use corral_core::domain::runner::{RegisteredRunner, RunnerStatus};
use corral_core::domain::scope::{Scope, ScopeKind};
use serde::Deserialize;
use tracing::debug;

use crate::GithubClient;
use crate::error::{GithubError, Result};

/// Page size requested from the API; GitHub caps per_page at 100
const RUNNERS_PAGE_SIZE: usize = 100;

/// One page of the runners listing
#[derive(Debug, Deserialize)]
struct RunnersPage {
    total_count: u64,
    runners: Vec<RunnerRow>,
}

/// Runner entry as GitHub reports it
#[derive(Debug, Deserialize)]
struct RunnerRow {
    id: u64,
    name: String,
    status: String,
    busy: bool,
    #[serde(default)]
    labels: Vec<RunnerLabel>,
}

#[derive(Debug, Deserialize)]
struct RunnerLabel {
    name: String,
}

impl From<RunnerRow> for RegisteredRunner {
    fn from(row: RunnerRow) -> Self {
        // GitHub also reports transitional statuses; anything but
        // "online" maps to Offline.
        let status = match row.status.as_str() {
            "online" => RunnerStatus::Online,
            _ => RunnerStatus::Offline,
        };

        RegisteredRunner {
            id: row.id,
            name: row.name,
            status,
            busy: row.busy,
            labels: row.labels.into_iter().map(|label| label.name).collect(),
        }
    }
}

impl GithubClient {
    /// List every self-hosted runner registered under a scope
    ///
    /// Follows GitHub's page-numbered pagination until a short page, so the
    /// result is the complete registration list including offline runners.
    ///
    /// # Arguments
    /// * `scope` - Organization or `owner/repo` the runners register under
    pub async fn list_self_hosted_runners(&self, scope: &Scope) -> Result<Vec<RegisteredRunner>> {
        let url = format!("{}{}", self.api_url, runners_path(scope)?);
        let mut runners = Vec::new();
        let mut page: u32 = 1;

        loop {
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("per_page", RUNNERS_PAGE_SIZE.to_string()),
                    ("page", page.to_string()),
                ])
                .send()
                .await?;

            let body: RunnersPage = self.handle_response(response).await?;
            let total = body.total_count;
            let fetched = body.runners.len();
            runners.extend(body.runners.into_iter().map(RegisteredRunner::from));
            debug!(
                "Fetched {} of {} registered runner(s) for {}",
                runners.len(),
                total,
                scope
            );

            if fetched < RUNNERS_PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(runners)
    }
}

/// Builds the listing path for a scope
fn runners_path(scope: &Scope) -> Result<String> {
    match scope.kind {
        ScopeKind::Organization => Ok(format!("/orgs/{}/actions/runners", scope.owner)),
        ScopeKind::Repository => {
            let (owner, repo) = scope.owner.split_once('/').ok_or_else(|| {
                GithubError::InvalidRequest(format!(
                    "repository scope `{}` must be written as owner/repo",
                    scope.owner
                ))
            })?;
            Ok(format!("/repos/{}/{}/actions/runners", owner, repo))
        }
    }
}

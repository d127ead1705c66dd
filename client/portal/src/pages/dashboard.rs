//! Dashboard view-model

use auth::session::SessionStore;
use common::error::ApiResult;
use common::http::ApiClient;
use common::notify::Notifier;
use tracing::info;

use crate::models::{Job, JobsResponse};
use crate::pages::{ensure_success, report_failure};

const JOBS_ENDPOINT: &str = "/api/v1/jobs";

/// Headline numbers shown on the dashboard cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub companies: usize,
}

/// Dashboard page: recent jobs plus headline counts
#[derive(Clone)]
pub struct DashboardPage {
    api: ApiClient,
    session: SessionStore,
    notifier: Notifier,
}

impl DashboardPage {
    /// Create a new dashboard page
    pub fn new(api: ApiClient, session: SessionStore, notifier: Notifier) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Load the jobs feeding the dashboard
    pub async fn load(&self) -> ApiResult<Vec<Job>> {
        let result = self.fetch().await;
        report_failure(&self.notifier, "Failed to load jobs. Please try again.", result)
    }

    async fn fetch(&self) -> ApiResult<Vec<Job>> {
        info!("Loading dashboard jobs");

        let token = self.session.token();
        let response: JobsResponse = self.api.get_json(JOBS_ENDPOINT, token.as_deref()).await?;

        ensure_success(response.success, response.message, "Failed to load jobs")?;
        Ok(response.jobs)
    }

    /// Headline counts over the loaded jobs
    pub fn stats(jobs: &[Job]) -> DashboardStats {
        let mut companies: Vec<&str> = jobs.iter().map(|job| job.company.as_str()).collect();
        companies.sort_unstable();
        companies.dedup();

        DashboardStats {
            total_jobs: jobs.len(),
            companies: companies.len(),
        }
    }

    /// The newest `limit` jobs, most recent first
    pub fn recent(jobs: &[Job], limit: usize) -> Vec<&Job> {
        let mut sorted: Vec<&Job> = jobs.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(limit);
        sorted
    }
}

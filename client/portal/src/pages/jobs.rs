//! Job listing view-model
//!
//! Loads the full job list once and filters it locally: a case-insensitive
//! substring search over position, company and work location, composable
//! with a work-type filter.

use auth::session::SessionStore;
use common::error::ApiResult;
use common::http::ApiClient;
use common::notify::Notifier;
use tracing::info;

use crate::models::{Job, JobsResponse};
use crate::pages::{ensure_success, report_failure};

const JOBS_ENDPOINT: &str = "/api/v1/jobs";

/// Job listing page with search and work-type filtering
#[derive(Clone)]
pub struct JobsPage {
    api: ApiClient,
    session: SessionStore,
    notifier: Notifier,
}

impl JobsPage {
    /// Create a new jobs page
    pub fn new(api: ApiClient, session: SessionStore, notifier: Notifier) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Load the full job list
    pub async fn load(&self) -> ApiResult<Vec<Job>> {
        let result = self.fetch().await;
        report_failure(&self.notifier, "Failed to load jobs. Please try again.", result)
    }

    async fn fetch(&self) -> ApiResult<Vec<Job>> {
        info!("Loading job list");

        let token = self.session.token();
        let response: JobsResponse = self.api.get_json(JOBS_ENDPOINT, token.as_deref()).await?;

        ensure_success(response.success, response.message, "Failed to load jobs")?;
        Ok(response.jobs)
    }

    /// Filter the loaded list by search text and work type
    ///
    /// An empty search matches everything; the work-type filter compares
    /// case-insensitively and composes with the search.
    pub fn filter<'a>(jobs: &'a [Job], search: &str, work_type: Option<&str>) -> Vec<&'a Job> {
        let needle = search.to_lowercase();

        jobs.iter()
            .filter(|job| {
                let matches_search = needle.is_empty()
                    || job.position.to_lowercase().contains(&needle)
                    || job.company.to_lowercase().contains(&needle)
                    || job.work_location.to_lowercase().contains(&needle);

                let matches_work_type = match work_type {
                    None | Some("") => true,
                    Some(wanted) => job
                        .work_type
                        .as_deref()
                        .is_some_and(|actual| actual.eq_ignore_ascii_case(wanted)),
                };

                matches_search && matches_work_type
            })
            .collect()
    }

    /// Distinct work types present in the list, in first-seen order
    pub fn work_types(jobs: &[Job]) -> Vec<String> {
        let mut seen = Vec::new();

        for job in jobs {
            if let Some(work_type) = job.work_type.as_deref() {
                if !work_type.is_empty() && !seen.iter().any(|s: &String| s == work_type) {
                    seen.push(work_type.to_string());
                }
            }
        }

        seen
    }
}

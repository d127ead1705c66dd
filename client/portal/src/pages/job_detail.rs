//! Job detail view-model

use auth::session::SessionStore;
use common::error::{ApiError, ApiResult};
use common::http::{ApiClient, Envelope};
use common::notify::Notifier;
use tracing::info;

use crate::models::{Job, JobResponse};
use crate::pages::{ensure_success, report_failure};

const JOBS_ENDPOINT: &str = "/api/v1/jobs";

/// Job detail page with the apply action
#[derive(Clone)]
pub struct JobDetailPage {
    api: ApiClient,
    session: SessionStore,
    notifier: Notifier,
}

impl JobDetailPage {
    /// Create a new job detail page
    pub fn new(api: ApiClient, session: SessionStore, notifier: Notifier) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Load one job by id
    pub async fn load(&self, id: &str) -> ApiResult<Job> {
        let result = self.fetch(id).await;
        report_failure(&self.notifier, "Failed to load job details", result)
    }

    /// Apply to the job, then refetch it so the applicant count is fresh
    pub async fn apply(&self, id: &str) -> ApiResult<Job> {
        let result = self.send_application(id).await;
        report_failure(&self.notifier, "Failed to apply. Please login.", result)?;

        self.notifier.success("Application submitted successfully!");
        self.load(id).await
    }

    async fn fetch(&self, id: &str) -> ApiResult<Job> {
        info!("Loading job {}", id);

        let token = self.session.token();
        let response: JobResponse = self
            .api
            .get_json(&format!("{}/{}", JOBS_ENDPOINT, id), token.as_deref())
            .await?;

        ensure_success(response.success, response.message, "Failed to load job")?;
        response
            .job
            .ok_or_else(|| ApiError::Rejected("Job not found".to_string()))
    }

    async fn send_application(&self, id: &str) -> ApiResult<()> {
        info!("Applying to job {}", id);

        let token = self.session.token();
        let envelope: Envelope<serde_json::Value> = self
            .api
            .post_json(
                &format!("{}/{}/apply", JOBS_ENDPOINT, id),
                &serde_json::json!({}),
                token.as_deref(),
            )
            .await?;

        ensure_success(envelope.success, envelope.message, "Failed to apply")
    }
}

//! Job posting view-model

use auth::session::SessionStore;
use common::error::ApiResult;
use common::http::{ApiClient, Envelope};
use common::notify::Notifier;
use tracing::info;

use crate::models::NewJob;
use crate::pages::{SubmitOutcome, ensure_success, report_failure};
use crate::validation::{FieldError, FieldErrors, validate_description, validate_required};

const JOBS_ENDPOINT: &str = "/api/v1/jobs";

/// Work types the posting form offers
pub const WORK_TYPE_OPTIONS: [&str; 5] =
    ["full-time", "part-time", "contract", "internship", "remote"];

/// Status values the posting form offers
pub const STATUS_OPTIONS: [&str; 4] = ["active", "pending", "interview", "closed"];

/// Job posting form state
#[derive(Debug, Clone)]
pub struct PostJobForm {
    pub position: String,
    pub company: String,
    pub work_location: String,
    pub work_type: String,
    pub status: String,
    pub description: String,
}

impl Default for PostJobForm {
    fn default() -> Self {
        Self {
            position: String::new(),
            company: String::new(),
            work_location: String::new(),
            work_type: String::new(),
            status: "active".to_string(),
            description: String::new(),
        }
    }
}

impl PostJobForm {
    /// Validate every field, returning either the payload to send or the
    /// per-field messages to show
    pub fn validate(&self) -> Result<NewJob, FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(message) = validate_required(&self.position, "Position") {
            errors.push(FieldError {
                field: "position",
                message,
            });
        }

        if let Err(message) = validate_required(&self.company, "Company name") {
            errors.push(FieldError {
                field: "company",
                message,
            });
        }

        if let Err(message) = validate_required(&self.work_location, "Work location") {
            errors.push(FieldError {
                field: "workLocation",
                message,
            });
        }

        if self.work_type.is_empty() {
            errors.push(FieldError {
                field: "workType",
                message: "Please select work type".to_string(),
            });
        }

        if let Err(message) = validate_description(&self.description) {
            errors.push(FieldError {
                field: "description",
                message,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewJob {
            position: self.position.trim().to_string(),
            company: self.company.trim().to_string(),
            work_location: self.work_location.trim().to_string(),
            work_type: self.work_type.clone(),
            status: self.status.clone(),
            description: self.description.trim().to_string(),
        })
    }
}

/// Job posting page (employee and admin only; the route guard enforces it)
#[derive(Clone)]
pub struct PostJobPage {
    api: ApiClient,
    session: SessionStore,
    notifier: Notifier,
}

impl PostJobPage {
    /// Create a new job posting page
    pub fn new(api: ApiClient, session: SessionStore, notifier: Notifier) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Validate and submit the form
    ///
    /// An invalid form never reaches the network; it comes back as
    /// [`SubmitOutcome::Invalid`] alongside one error notice.
    pub async fn submit(&self, form: &PostJobForm) -> ApiResult<SubmitOutcome> {
        let job = match form.validate() {
            Ok(job) => job,
            Err(errors) => {
                self.notifier.error("Please fix the errors in the form");
                return Ok(SubmitOutcome::Invalid(errors));
            }
        };

        let result = self.send(&job).await;
        report_failure(&self.notifier, "Failed to post job", result)?;

        self.notifier.success("Job posted successfully!");
        Ok(SubmitOutcome::Submitted)
    }

    async fn send(&self, job: &NewJob) -> ApiResult<()> {
        info!("Posting job: {} at {}", job.position, job.company);

        let token = self.session.token();
        let envelope: Envelope<serde_json::Value> = self
            .api
            .post_json(JOBS_ENDPOINT, job, token.as_deref())
            .await?;

        ensure_success(envelope.success, envelope.message, "Failed to post job")
    }
}

//! Page view-models
//!
//! Each page loads data or submits a form through the shared API client
//! using the session's token, reports failures through the notification
//! center, and returns plain values for the rendering shell to draw. Pages
//! never redirect: a page-level failure surfaces as one error notice and an
//! error return, and `ApiError::Unauthorized` passes through untouched so
//! the shell can send the user to login.

pub mod create_employee;
pub mod dashboard;
pub mod job_detail;
pub mod jobs;
pub mod post_job;
pub mod profile;

// Re-export for convenience
pub use create_employee::{CreateEmployeeForm, CreateEmployeePage};
pub use dashboard::{DashboardPage, DashboardStats};
pub use job_detail::JobDetailPage;
pub use jobs::JobsPage;
pub use post_job::{PostJobForm, PostJobPage};
pub use profile::{ProfileForm, ProfilePage};

use common::error::{ApiError, ApiResult};
use common::notify::Notifier;

use crate::validation::FieldErrors;

/// Outcome of one form submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The backend accepted the payload
    Submitted,
    /// Client-side validation refused the form; nothing was sent
    Invalid(FieldErrors),
}

/// Map a failed call onto one user-visible notice
///
/// `Unauthorized` stays silent here: the shell redirects to login on it and
/// a toast on top of a navigation would just flash.
pub(crate) fn report_failure<T>(
    notifier: &Notifier,
    fallback: &str,
    result: ApiResult<T>,
) -> ApiResult<T> {
    if let Err(error) = &result {
        match error {
            ApiError::Unauthorized => {}
            ApiError::Rejected(message) => notifier.error(message.clone()),
            _ => notifier.error(fallback.to_string()),
        }
    }

    result
}

/// Turn a `success: false` envelope into a rejection carrying the backend
/// message
pub(crate) fn ensure_success(
    success: bool,
    message: Option<String>,
    fallback: &str,
) -> ApiResult<()> {
    if success {
        Ok(())
    } else {
        Err(ApiError::Rejected(
            message.unwrap_or_else(|| fallback.to_string()),
        ))
    }
}

//! Profile editor view-model
//!
//! The one page that writes the session: a successful save goes back
//! through `SessionStore::set_user`, so the guard and the navigation shell
//! see the updated record on their next read.

use auth::models::{UpdateProfile, User};
use auth::session::SessionStore;
use common::error::{ApiError, ApiResult};
use common::http::{ApiClient, Envelope};
use common::notify::Notifier;
use tracing::info;

use crate::pages::{SubmitOutcome, report_failure};
use crate::validation::{FieldError, FieldErrors, validate_email, validate_required};

const UPDATE_PROFILE_ENDPOINT: &str = "/api/v1/user/update-user";

/// Profile form state, prefilled from the session cache
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    /// Prefill the form from the cached user record
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }

    /// Validate every field, returning either the payload to send or the
    /// per-field messages to show
    pub fn validate(&self) -> Result<UpdateProfile, FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(message) = validate_required(&self.name, "Name") {
            errors.push(FieldError {
                field: "name",
                message,
            });
        }

        if let Err(message) = validate_required(&self.last_name, "Last name") {
            errors.push(FieldError {
                field: "lastName",
                message,
            });
        }

        if let Err(message) = validate_email(&self.email) {
            errors.push(FieldError {
                field: "email",
                message,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(UpdateProfile {
            name: self.name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

/// Profile editor page
#[derive(Clone)]
pub struct ProfilePage {
    api: ApiClient,
    session: SessionStore,
    notifier: Notifier,
}

impl ProfilePage {
    /// Create a new profile page
    pub fn new(api: ApiClient, session: SessionStore, notifier: Notifier) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Form prefilled from the session cache, empty when unresolved
    pub fn form(&self) -> ProfileForm {
        self.session
            .current_user()
            .map(|user| ProfileForm::from_user(&user))
            .unwrap_or_default()
    }

    /// Validate and submit the form; a successful save is written back to
    /// the session cache
    pub async fn submit(&self, form: &ProfileForm) -> ApiResult<SubmitOutcome> {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                self.notifier.error("Please fix the errors in the form");
                return Ok(SubmitOutcome::Invalid(errors));
            }
        };

        let result = self.send(&payload).await;
        let updated = report_failure(&self.notifier, "Failed to update profile", result)?;

        self.session.set_user(updated);
        self.notifier.success("Profile updated successfully!");
        Ok(SubmitOutcome::Submitted)
    }

    async fn send(&self, payload: &UpdateProfile) -> ApiResult<User> {
        info!("Updating profile for {}", payload.email);

        let token = self.session.token();
        let envelope: Envelope<User> = self
            .api
            .put_json(UPDATE_PROFILE_ENDPOINT, payload, token.as_deref())
            .await?;

        match envelope {
            Envelope {
                success: true,
                data: Some(user),
                ..
            } => Ok(user),
            Envelope { message, .. } => Err(ApiError::Rejected(
                message.unwrap_or_else(|| "Failed to update profile".to_string()),
            )),
        }
    }
}

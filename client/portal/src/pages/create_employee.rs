//! Employee creation view-model

use auth::models::NewEmployee;
use auth::session::SessionStore;
use common::error::ApiResult;
use common::http::{ApiClient, Envelope};
use common::notify::Notifier;
use tracing::info;

use crate::pages::{SubmitOutcome, ensure_success, report_failure};
use crate::validation::{FieldError, FieldErrors, validate_email, validate_password, validate_required};

const CREATE_EMPLOYEE_ENDPOINT: &str = "/api/v1/auth/create-employee";

/// Employee creation form state
#[derive(Debug, Clone, Default)]
pub struct CreateEmployeeForm {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

impl CreateEmployeeForm {
    /// Validate every field, returning either the payload to send or the
    /// per-field messages to show
    pub fn validate(&self) -> Result<NewEmployee, FieldErrors> {
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

        if let Err(message) = validate_password(&self.password) {
            errors.push(FieldError {
                field: "password",
                message,
            });
        }

        if let Err(message) = validate_required(&self.location, "Location") {
            errors.push(FieldError {
                field: "location",
                message,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEmployee {
            name: self.name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            location: self.location.trim().to_string(),
        })
    }
}

/// Employee creation page (admin only; the route guard enforces it)
#[derive(Clone)]
pub struct CreateEmployeePage {
    api: ApiClient,
    session: SessionStore,
    notifier: Notifier,
}

impl CreateEmployeePage {
    /// Create a new employee creation page
    pub fn new(api: ApiClient, session: SessionStore, notifier: Notifier) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Validate and submit the form
    pub async fn submit(&self, form: &CreateEmployeeForm) -> ApiResult<SubmitOutcome> {
        let employee = match form.validate() {
            Ok(employee) => employee,
            Err(errors) => {
                self.notifier.error("Please fix the errors in the form");
                return Ok(SubmitOutcome::Invalid(errors));
            }
        };

        let result = self.send(&employee).await;
        report_failure(&self.notifier, "Error creating employee", result)?;

        self.notifier.success("Employee created successfully!");
        Ok(SubmitOutcome::Submitted)
    }

    async fn send(&self, employee: &NewEmployee) -> ApiResult<()> {
        info!("Creating employee account for {}", employee.email);

        let token = self.session.token();
        let envelope: Envelope<serde_json::Value> = self
            .api
            .post_json(CREATE_EMPLOYEE_ENDPOINT, employee, token.as_deref())
            .await?;

        ensure_success(envelope.success, envelope.message, "Failed to create employee")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CreateEmployeeForm {
        CreateEmployeeForm {
            name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            password: "hunter2!".to_string(),
            location: "New York".to_string(),
        }
    }

    #[test]
    fn valid_form_produces_the_payload() {
        let payload = filled_form().validate().unwrap();

        assert_eq!(payload.name, "Grace");
        assert_eq!(payload.last_name, "Hopper");
        assert_eq!(payload.email, "grace@example.com");
    }

    #[test]
    fn malformed_email_is_refused() {
        let mut form = filled_form();
        form.email = "grace-at-example".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Email is invalid");
    }

    #[test]
    fn short_password_is_refused() {
        let mut form = filled_form();
        form.password = "12345".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].field, "password");
        assert_eq!(errors[0].message, "Password must be at least 6 characters");
    }
}

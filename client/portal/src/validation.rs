//! Form input validation
//!
//! Field-level checks shared by the posting, employee-creation, and profile
//! forms. Validation only ever reports; the forms decide what to do with a
//! failure.

use regex::Regex;
use std::sync::OnceLock;

/// One failed field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the message belongs to
    pub field: &'static str,
    /// User-visible message
    pub message: String,
}

/// Collected failures of one form validation pass
pub type FieldErrors = Vec<FieldError>;

/// Validate a required free-text field
pub fn validate_required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", label));
    }

    Ok(())
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email.trim()) {
        return Err("Email is invalid".to_string());
    }

    Ok(())
}

/// Validate an account password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }

    Ok(())
}

/// Validate a job description
pub fn validate_description(description: &str) -> Result<(), String> {
    let trimmed = description.trim();

    if trimmed.is_empty() {
        return Err("Job description is required".to_string());
    }

    if trimmed.chars().count() < 50 {
        return Err("Description should be at least 50 characters".to_string());
    }

    Ok(())
}

//! User model and related functionality

use serde::{Deserialize, Serialize};

use super::Role;

/// User record as the backend returns it from `getUser`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl User {
    /// Full display name, trimmed of a missing last name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }

    /// Single-character avatar initial, falling back to the email
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .or_else(|| self.email.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// New employee creation payload (admin only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

/// Profile update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
}

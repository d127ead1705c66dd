//! Job models and the backend wire shapes around them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job record as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub position: String,
    pub company: String,
    #[serde(rename = "workLocation")]
    pub work_location: String,
    #[serde(rename = "workType", default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applicants: Vec<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Work type with display capitalization, defaulting to full-time
    pub fn work_type_label(&self) -> String {
        match self.work_type.as_deref() {
            None | Some("") => "Full-time".to_string(),
            Some(work_type) => {
                let lower = work_type.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => lower,
                }
            }
        }
    }

    /// Single-character company logo placeholder
    pub fn company_initial(&self) -> char {
        self.company
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }

    /// Description preview cut at `max_len` characters
    pub fn summary(&self, max_len: usize) -> String {
        match self.description.as_deref() {
            None | Some("") => "No description available".to_string(),
            Some(description) if description.chars().count() > max_len => {
                let cut: String = description.chars().take(max_len).collect();
                format!("{}...", cut)
            }
            Some(description) => description.to_string(),
        }
    }

    /// Posted date formatted for display, e.g. "September 1, 2023"
    pub fn posted_on(&self) -> String {
        match self.created_at {
            Some(created_at) => created_at.format("%B %-d, %Y").to_string(),
            None => "N/A".to_string(),
        }
    }

    /// Whole days since the job was posted, as of `now`
    pub fn days_posted(&self, now: DateTime<Utc>) -> Option<i64> {
        self.created_at
            .map(|created_at| (now - created_at).num_days().max(0))
    }
}

/// Response shape of the job list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Response shape of the job detail endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct JobResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub job: Option<Job>,
}

/// New job posting payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
    pub position: String,
    pub company: String,
    #[serde(rename = "workLocation")]
    pub work_location: String,
    #[serde(rename = "workType")]
    pub work_type: String,
    pub status: String,
    pub description: String,
}

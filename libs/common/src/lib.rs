//! Common library for the job-portal client
//!
//! This crate provides the plumbing shared by the client-side crates:
//! durable key-value storage (the `localStorage` analogue), the bearer-token
//! HTTP client for the backend API, the notification center, and error
//! handling.

pub mod error;
pub mod http;
pub mod notify;
pub mod storage;

/// Example wiring of the shared plumbing
///
/// ```rust,no_run
/// use common::http::{ApiClient, ApiConfig};
/// use common::storage::{FileStorage, StorageConfig};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let storage = FileStorage::open(&StorageConfig::from_env()?)?;
///     let api = ApiClient::new(&ApiConfig::from_env()?)?;
///     let _ = (storage, api);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}

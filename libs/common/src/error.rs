//! Custom error types for the common library
//!
//! This module defines the error types shared by every client-side crate:
//! failures of backend API calls and failures of the durable client
//! storage.

use thiserror::Error;

/// Custom error type for backend API calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend rejected the bearer token (HTTP 401)
    #[error("Unauthorized")]
    Unauthorized,

    /// The backend answered but reported failure (`success: false` or a
    /// non-2xx status); carries the backend message when one was provided
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The request never produced a usable response (connect, timeout,
    /// or body decode failure)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("API configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Custom error type for the durable client storage
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error reading or writing the backing file
    #[error("Storage I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// The backing file does not contain valid JSON
    #[error("Storage decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Configuration error
    #[error("Storage configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

//! HTTP client for the job-portal backend API
//!
//! Every REST call the client makes goes through one [`ApiClient`] holding
//! a shared `reqwest::Client`. The client speaks the backend's bearer-token
//! convention and triages failures into [`ApiError`] so callers never see a
//! raw status code.

use crate::error::{ApiError, ApiResult};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl ApiConfig {
    /// Create a new ApiConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PORTAL_API_BASE_URL`: backend base URL (default: "http://localhost:8080")
    /// - `PORTAL_API_TIMEOUT`: request timeout in seconds (default: 30)
    pub fn from_env() -> ApiResult<Self> {
        let base_url = std::env::var("PORTAL_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let timeout_seconds = std::env::var("PORTAL_API_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds,
        })
    }
}

/// Envelope the backend wraps single-record payloads in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Client for the job-portal backend API
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from its configuration
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(ApiClient {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// GET a JSON payload
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> ApiResult<T> {
        self.send::<(), T>(Method::GET, path, None, token).await
    }

    /// POST a JSON body and decode the JSON payload of the response
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ApiResult<T> {
        self.send(Method::POST, path, Some(body), token).await
    }

    /// PUT a JSON body and decode the JSON payload of the response
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ApiResult<T> {
        self.send(Method::PUT, path, Some(body), token).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            // Surface the backend's own message when the error body carries one.
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("HTTP {}", status));

            error!("Request to {} failed: {}", url, message);
            return Err(ApiError::Rejected(message));
        }

        Ok(response.json().await?)
    }
}

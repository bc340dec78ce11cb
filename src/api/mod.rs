// src/api/mod.rs
//
// Thin wrapper over the V2 REST API: base URL from the environment, fixed
// request timeout, JSON decoding into src/model.rs types, and error logging
// at the call boundary. One submodule per endpoint group.

use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::consts::{API_URL_ENV, DEFAULT_API_URL, REQUEST_TIMEOUT_SECS};
use crate::model::ErrorBody;

pub mod academies;
pub mod analysis;
pub mod crawl;
pub mod legacy;
pub mod mentions;
pub mod reports;
pub mod teachers;
pub mod weekly;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API error {status}: {error}")]
    Status { status: u16, error: String },

    #[error("fetch worker panicked")]
    Worker,
}

/// HTTP client for the TeacherHub API. Cheap to clone; safe to share
/// across worker threads.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Base URL from `TEACHERHUB_API_URL`, falling back to localhost.
    pub fn from_env() -> Result<Self, ApiError> {
        let base = env::var(API_URL_ENV).unwrap_or_else(|_| s!(DEFAULT_API_URL));
        Self::new(&base)
    }

    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with query params, decode 2xx bodies as JSON.
    /// Non-2xx responses are mapped to `ApiError::Status` using the
    /// server's `{status, error}` body when it has one.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.get(&url);
        if !query.is_empty() {
            req = req.query(query);
        }
        let resp = req.send().inspect_err(|e| {
            loge!("API: GET {} failed: {}", path, e);
        })?;

        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let error = if body.error.is_empty() {
                s!(status.canonical_reason().unwrap_or("unknown"))
            } else {
                body.error
            };
            loge!("API: GET {} → {} ({})", path, status.as_u16(), error);
            return Err(ApiError::Status { status: status.as_u16(), error });
        }

        logd!("API: GET {} → {}", path, status.as_u16());
        serde_json::from_str(&text).map_err(|e| {
            loge!("API: GET {} → bad body: {}", path, e);
            ApiError::Decode(e)
        })
    }

    /// POST with an empty body; used by the crawl trigger.
    pub fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.http.post(&url).send().inspect_err(|e| {
            loge!("API: POST {} failed: {}", path, e);
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body: ErrorBody = resp.text().ok().and_then(|t| serde_json::from_str(&t).ok()).unwrap_or_default();
            loge!("API: POST {} → {} ({})", path, status.as_u16(), body.error);
            return Err(ApiError::Status { status: status.as_u16(), error: body.error });
        }
        logf!("API: POST {} → {}", path, status.as_u16());
        Ok(())
    }
}

// src/api/crawl.rs
use crate::model::CrawlStatus;
use super::{ApiClient, ApiError};

pub fn status(api: &ApiClient) -> Result<CrawlStatus, ApiError> {
    api.get_json("/api/v2/crawl/status", &[])
}

pub fn logs(api: &ApiClient, limit: usize) -> Result<Vec<CrawlStatus>, ApiError> {
    api.get_json("/api/v2/crawl/logs", &[("limit", limit.to_string())])
}

/// Kick off a crawl run. Fire-and-forget; progress shows up via `status`.
pub fn trigger(api: &ApiClient) -> Result<(), ApiError> {
    api.post_empty("/api/v2/crawl/trigger")
}

// src/api/legacy.rs
//
// Pre-V2 endpoints still served for compatibility. Only the CLI uses these.

use crate::model::{KeywordStats, ReputationRow};
use super::{ApiClient, ApiError};

pub fn reputation(api: &ApiClient) -> Result<Vec<ReputationRow>, ApiError> {
    api.get_json("/api/reputation", &[])
}

pub fn stats(api: &ApiClient, keyword: &str) -> Result<KeywordStats, ApiError> {
    api.get_json("/api/reputation/stats", &[("keyword", s!(keyword))])
}

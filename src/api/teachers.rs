// src/api/teachers.rs
use crate::model::{DailyReport, Mention, Teacher};
use super::{ApiClient, ApiError};

pub fn all(api: &ApiClient, academy_id: Option<u64>) -> Result<Vec<Teacher>, ApiError> {
    let mut q = Vec::new();
    if let Some(id) = academy_id {
        q.push(("academyId", id.to_string()));
    }
    api.get_json("/api/v2/teachers", &q)
}

pub fn by_id(api: &ApiClient, id: u64) -> Result<Teacher, ApiError> {
    api.get_json(&format!("/api/v2/teachers/{id}"), &[])
}

/// Server-side search; matches name or alias, case-insensitive.
pub fn search(api: &ApiClient, query: &str) -> Result<Vec<Teacher>, ApiError> {
    api.get_json("/api/v2/teachers/search", &[("q", s!(query))])
}

pub fn mentions(api: &ApiClient, id: u64, limit: usize) -> Result<Vec<Mention>, ApiError> {
    api.get_json(
        &format!("/api/v2/teachers/{id}/mentions"),
        &[("limit", limit.to_string())],
    )
}

/// Per-day report history for the last `days` days.
pub fn reports(api: &ApiClient, id: u64, days: u32) -> Result<Vec<DailyReport>, ApiError> {
    api.get_json(
        &format!("/api/v2/teachers/{id}/reports"),
        &[("days", days.to_string())],
    )
}

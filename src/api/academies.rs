// src/api/academies.rs
use chrono::NaiveDate;

use crate::model::{Academy, AcademyStats, Teacher};
use super::{ApiClient, ApiError};

pub fn all(api: &ApiClient) -> Result<Vec<Academy>, ApiError> {
    api.get_json("/api/v2/academies", &[])
}

pub fn by_id(api: &ApiClient, id: u64) -> Result<Academy, ApiError> {
    api.get_json(&format!("/api/v2/academies/{id}"), &[])
}

pub fn stats(api: &ApiClient, id: u64, date: Option<NaiveDate>) -> Result<AcademyStats, ApiError> {
    let mut q = Vec::new();
    if let Some(d) = date {
        q.push(("date", d.to_string()));
    }
    api.get_json(&format!("/api/v2/academies/{id}/stats"), &q)
}

/// Roster of teachers belonging to one academy.
pub fn teachers(api: &ApiClient, id: u64) -> Result<Vec<Teacher>, ApiError> {
    api.get_json(&format!("/api/v2/academies/{id}/teachers"), &[])
}

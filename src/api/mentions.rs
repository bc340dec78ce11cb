// src/api/mentions.rs
use chrono::NaiveDate;

use crate::model::Mention;
use super::{ApiClient, ApiError};

pub fn recent(api: &ApiClient, limit: usize) -> Result<Vec<Mention>, ApiError> {
    api.get_json("/api/v2/mentions/recent", &[("limit", limit.to_string())])
}

pub fn by_date(api: &ApiClient, date: NaiveDate) -> Result<Vec<Mention>, ApiError> {
    api.get_json("/api/v2/mentions", &[("date", date.to_string())])
}

// src/api/weekly.rs
use crate::model::{WeekInfo, WeeklyReport, WeeklySummary, WeeklyTrendPoint};
use super::{ApiClient, ApiError};

fn week_query(year: i32, week: u32) -> Vec<(&'static str, String)> {
    vec![("year", year.to_string()), ("week", week.to_string())]
}

pub fn report(api: &ApiClient, year: i32, week: u32) -> Result<Vec<WeeklyReport>, ApiError> {
    api.get_json("/api/v2/weekly/report", &week_query(year, week))
}

pub fn ranking(
    api: &ApiClient,
    year: i32,
    week: u32,
    limit: usize,
) -> Result<Vec<WeeklyReport>, ApiError> {
    let mut q = week_query(year, week);
    q.push(("limit", limit.to_string()));
    api.get_json("/api/v2/weekly/ranking", &q)
}

pub fn summary(api: &ApiClient, year: i32, week: u32) -> Result<WeeklySummary, ApiError> {
    api.get_json("/api/v2/weekly/summary", &week_query(year, week))
}

pub fn current(api: &ApiClient) -> Result<WeekInfo, ApiError> {
    api.get_json("/api/v2/weekly/current", &[])
}

pub fn teacher_report(
    api: &ApiClient,
    teacher_id: u64,
    year: i32,
    week: u32,
) -> Result<WeeklyReport, ApiError> {
    api.get_json(&format!("/api/v2/weekly/teacher/{teacher_id}"), &week_query(year, week))
}

/// Last `weeks` weeks for one teacher, oldest first.
pub fn teacher_trend(
    api: &ApiClient,
    teacher_id: u64,
    weeks: u32,
) -> Result<Vec<WeeklyTrendPoint>, ApiError> {
    api.get_json(
        &format!("/api/v2/weekly/teacher/{teacher_id}/trend"),
        &[("weeks", weeks.to_string())],
    )
}

pub fn academy_stats(
    api: &ApiClient,
    academy_id: u64,
    year: i32,
    week: u32,
) -> Result<WeeklySummary, ApiError> {
    api.get_json(&format!("/api/v2/weekly/academy/{academy_id}"), &week_query(year, week))
}

pub fn academy_trend(
    api: &ApiClient,
    academy_id: u64,
    weeks: u32,
) -> Result<Vec<WeeklyTrendPoint>, ApiError> {
    api.get_json(
        &format!("/api/v2/weekly/academy/{academy_id}/trend"),
        &[("weeks", weeks.to_string())],
    )
}

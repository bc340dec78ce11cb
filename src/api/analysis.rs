// src/api/analysis.rs
//
// Aggregated "dashboard" numbers. These are the newest endpoints; the old
// /api/v2/dashboard/... pair they superseded is gone from the server.

use chrono::NaiveDate;

use crate::model::{AcademyStats, AnalysisSummary, DailyReport, RankingEntry};
use super::{ApiClient, ApiError};

pub fn summary(api: &ApiClient, date: Option<NaiveDate>) -> Result<AnalysisSummary, ApiError> {
    let mut q = Vec::new();
    if let Some(d) = date {
        q.push(("date", d.to_string()));
    }
    api.get_json("/api/v2/analysis/summary", &q)
}

pub fn ranking(
    api: &ApiClient,
    date: Option<NaiveDate>,
    limit: usize,
) -> Result<Vec<RankingEntry>, ApiError> {
    let mut q = vec![("limit", limit.to_string())];
    if let Some(d) = date {
        q.push(("date", d.to_string()));
    }
    api.get_json("/api/v2/analysis/ranking", &q)
}

pub fn academy_stats(api: &ApiClient) -> Result<Vec<AcademyStats>, ApiError> {
    api.get_json("/api/v2/analysis/academy-stats", &[])
}

/// Report history for one teacher (analysis flavor; `days` back from today).
pub fn teacher_reports(api: &ApiClient, id: u64, days: u32) -> Result<Vec<DailyReport>, ApiError> {
    api.get_json(
        &format!("/api/v2/analysis/teachers/{id}/reports"),
        &[("days", days.to_string())],
    )
}

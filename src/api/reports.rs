// src/api/reports.rs
use chrono::NaiveDate;

use crate::model::{PeriodReport, Periods};
use super::{ApiClient, ApiError};

pub fn daily(api: &ApiClient, date: NaiveDate) -> Result<PeriodReport, ApiError> {
    api.get_json("/api/v2/reports/daily", &[("date", date.to_string())])
}

pub fn weekly(api: &ApiClient, year: i32, week: u32) -> Result<PeriodReport, ApiError> {
    api.get_json(
        "/api/v2/reports/weekly",
        &[("year", year.to_string()), ("week", week.to_string())],
    )
}

pub fn monthly(api: &ApiClient, year: i32, month: u32) -> Result<PeriodReport, ApiError> {
    api.get_json(
        "/api/v2/reports/monthly",
        &[("year", year.to_string()), ("month", month.to_string())],
    )
}

/// Selectable period lists for the report pickers.
pub fn periods(api: &ApiClient) -> Result<Periods, ApiError> {
    api.get_json("/api/v2/reports/periods", &[])
}

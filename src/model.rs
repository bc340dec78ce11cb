// src/model.rs
//
// JSON shapes consumed from the TeacherHub V2 API. All wire fields are
// camelCase; anything the server may omit decodes to a default so a partial
// payload still renders.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Academy {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub website: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Teacher {
    pub id: u64,
    pub name: String,
    pub aliases: Vec<String>,
    pub academy_id: Option<u64>,
    pub academy_name: Option<String>,
    pub subject_id: Option<u64>,
    pub subject_name: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,

    // Present on roster/stat variants of the teacher payload.
    pub mention_count: Option<i64>,
    pub positive_count: Option<i64>,
    pub negative_count: Option<i64>,
    pub recommendation_count: Option<i64>,
    pub avg_sentiment_score: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mention {
    pub id: u64,
    pub teacher_id: Option<u64>,
    pub sentiment: String,
    pub context: Option<String>,
    pub mention_type: Option<String>,
    pub is_recommended: bool,
    pub created_at: Option<String>,
}

/// One teacher's aggregate for a single day.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyReport {
    pub id: u64,
    pub teacher_id: u64,
    pub teacher_name: String,
    pub academy_name: Option<String>,
    pub report_date: Option<NaiveDate>,
    pub mention_count: i64,
    pub positive_count: i64,
    pub negative_count: i64,
    pub neutral_count: i64,
    pub avg_sentiment_score: Option<f64>,
    pub recommendation_count: i64,
    pub mention_change: i64,
    pub top_keywords: Vec<String>,
    pub difficulty_easy_count: i64,
    pub difficulty_medium_count: i64,
    pub difficulty_hard_count: i64,
    pub summary: Option<String>,
}

/// `/api/v2/analysis/summary` — whole-system aggregate for one day.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisSummary {
    pub total_mentions: i64,
    pub total_teachers: i64,
    pub total_academies: i64,
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_recommendations: i64,
    pub positive_ratio: f64,
    pub mention_change: f64,
}

/// `/api/v2/analysis/ranking` entry.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankingEntry {
    pub teacher_id: u64,
    pub teacher_name: String,
    pub academy_name: Option<String>,
    pub subject_name: Option<String>,
    pub mention_count: i64,
    pub avg_sentiment_score: Option<f64>,
    pub recommendation_count: i64,
}

/// `/api/v2/analysis/academy-stats` entry.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcademyStats {
    pub academy_id: u64,
    pub academy_name: String,
    pub total_mentions: i64,
    pub total_teachers_mentioned: i64,
    pub avg_sentiment_score: Option<f64>,
    pub top_teacher_name: Option<String>,
}

/// `/api/v2/reports/daily|weekly|monthly` — period aggregate with per-teacher rows.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodReport {
    pub period_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_teachers: i64,
    pub total_mentions: i64,
    pub teacher_summaries: Vec<DailyReport>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodEntry {
    pub date: Option<String>,
    pub label: String,
    pub year: Option<i32>,
    pub week: Option<u32>,
    pub month: Option<u32>,
}

/// `/api/v2/reports/periods` — selectable period lists.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Periods {
    pub current: Option<String>,
    pub daily: Vec<PeriodEntry>,
    pub weekly: Vec<PeriodEntry>,
    pub monthly: Vec<PeriodEntry>,
}

/// Weekly ranking/report row (`/api/v2/weekly/ranking`, `/api/v2/weekly/report`).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyReport {
    pub id: u64,
    pub teacher_id: u64,
    pub teacher_name: String,
    pub academy_id: Option<u64>,
    pub academy_name: Option<String>,
    pub year: i32,
    pub week_number: u32,
    pub week_label: Option<String>,
    pub mention_count: i64,
    pub positive_count: i64,
    pub negative_count: i64,
    pub neutral_count: i64,
    pub recommendation_count: i64,
    pub avg_sentiment_score: Option<f64>,
    pub mention_change_rate: Option<f64>,
    pub weekly_rank: Option<u32>,
    pub top_keywords: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklySummary {
    pub year: i32,
    pub week_number: u32,
    pub total_mentions: i64,
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_teachers: i64,
    pub total_recommendations: i64,
    pub mention_change_rate: Option<f64>,
}

/// `/api/v2/weekly/current`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeekInfo {
    pub year: i32,
    pub week: u32,
    pub week_label: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// One point of a teacher/academy weekly trend series.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyTrendPoint {
    pub year: i32,
    pub week_number: u32,
    pub week_label: Option<String>,
    pub mention_count: i64,
    pub positive_count: i64,
    pub negative_count: i64,
    pub recommendation_count: i64,
    pub avg_sentiment_score: Option<f64>,
}

impl WeeklyTrendPoint {
    pub fn label(&self) -> String {
        match &self.week_label {
            Some(l) => l.clone(),
            None => format!("W{}", self.week_number),
        }
    }
}

/// `/api/v2/crawl/status` — crawler state machine: running/completed/failed.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrawlStatus {
    pub status: String,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub posts_collected: i64,
    pub comments_collected: i64,
    pub mentions_found: i64,
    pub error_message: Option<String>,
}

impl CrawlStatus {
    pub fn is_running(&self) -> bool {
        self.status.eq_ignore_ascii_case("running")
    }
}

// Legacy `/api/reputation` endpoints, kept for compatibility.

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReputationRow {
    pub id: u64,
    pub keyword: String,
    pub site_name: Option<String>,
    pub title: String,
    pub url: Option<String>,
    pub sentiment: String,
    pub score: Option<f64>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyStat {
    pub month: String,
    pub post_count: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeywordStats {
    pub keyword: String,
    pub total_posts: i64,
    pub total_comments: i64,
    pub monthly_stats: Vec<MonthlyStat>,
}

/// Error payload carried by non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: Option<String>,
    pub path: Option<String>,
}

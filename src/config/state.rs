// src/config/state.rs
use chrono::{Local, NaiveDate};

use crate::week::WeekRef;
use super::options::AppOptions;

/// Which dashboard tab is showing (teacher ranking vs academy stats).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    TeacherRanking,
    AcademyStats,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    pub window_w: u32,
    pub window_h: u32,

    // Teachers page
    pub search_text: String,
    pub academy_filter: Option<u64>,
    pub teacher_page: usize, // 1-based

    /// Drill-down target; Some = detail view replaces the teacher list.
    pub selected_teacher: Option<u64>,

    /// Expanded academy card on the Academies page.
    pub selected_academy: Option<u64>,

    // Report selectors
    pub report_date: NaiveDate,
    pub week: WeekRef,

    pub dashboard_tab: DashboardTab,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            window_w: 1100,
            window_h: 700,
            search_text: s!(),
            academy_filter: None,
            teacher_page: 1,
            selected_teacher: None,
            selected_academy: None,
            report_date: Local::now().date_naive(),
            week: WeekRef::current(),
            dashboard_tab: DashboardTab::TeacherRanking,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

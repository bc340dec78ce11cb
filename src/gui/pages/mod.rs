// src/gui/pages/mod.rs
use std::time::Duration;

use eframe::egui;

use crate::api::{ApiClient, ApiError};
use crate::config::{options::PageKind, state::AppState};
use crate::table::DataSet;

pub mod academies;
pub mod dashboard;
pub mod reports;
pub mod teacher_detail;
pub mod teachers;
pub mod weekly;

/// Everything one page fetched for one render generation. Replaced wholesale
/// on every refresh; nothing is persisted.
pub enum PageData {
    Dashboard(dashboard::DashboardData),
    Teachers(teachers::TeachersData),
    TeacherDetail(teacher_detail::TeacherDetailData),
    Academies(academies::AcademiesData),
    Daily(reports::DailyData),
    Weekly(weekly::WeeklyData),
}

impl PageData {
    /// The page's main table, for the export bar.
    pub fn primary_table(&self) -> Option<&DataSet> {
        match self {
            PageData::Dashboard(d) => Some(&d.ranking_table),
            PageData::Teachers(d) => Some(&d.table),
            PageData::TeacherDetail(d) => Some(&d.history_table),
            PageData::Academies(d) => Some(&d.stats_table),
            PageData::Daily(d) => Some(&d.table),
            PageData::Weekly(d) => Some(&d.table),
        }
    }
}

/// Shared shorthand for the stat-card strips at the top of several pages.
pub(crate) fn stat_card_row(
    ui: &mut egui::Ui,
    cards: &[(&'static str, String, egui::Color32, Option<(f64, &'static str)>)],
) {
    use crate::gui::components::stat_cards::{self, StatCard};
    let cards: Vec<StatCard> = cards
        .iter()
        .map(|(title, value, accent, change)| {
            let mut card = StatCard::new(*title, value, *accent);
            if let Some((delta, caption)) = change {
                card = card.with_change(*delta, *caption);
            }
            card
        })
        .collect();
    stat_cards::row(ui, &cards);
}

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Fixed banner text when this page's primary fetch fails.
    fn error_message(&self) -> &'static str;

    /// Runs on a worker thread. Independent requests fan out inside;
    /// secondary failures degrade to defaults, only the primary propagates.
    fn fetch(&self, api: &ApiClient, state: &AppState) -> Result<PageData, ApiError>;

    fn draw(&self, ui: &mut egui::Ui, app: &mut crate::gui::app::App);

    /// Some = auto-refresh while the page is visible.
    fn poll_interval(&self) -> Option<Duration> {
        None
    }
}

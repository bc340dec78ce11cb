// src/gui/pages/dashboard.rs
//
// Landing page: today's aggregate cards plus ranking / academy tabs.
// Auto-refreshes while visible.

use std::thread;
use std::time::Duration;

use eframe::egui::{self, Color32, RichText};

use crate::{
    api::{self, ApiClient, ApiError},
    config::{
        consts::{POLL_INTERVAL_SECS, RANKING_LIMIT},
        options::PageKind,
        state::{AppState, DashboardTab},
    },
    fetch::{join_branch, or_default},
    gui::{app::App, components::data_table},
    model::AnalysisSummary,
    table::{self, DataSet},
};

use super::{Page, PageData};

pub static PAGE: Dashboard = Dashboard;

pub struct Dashboard;

pub struct DashboardData {
    pub summary: AnalysisSummary,
    pub ranking_table: DataSet,
    pub academy_table: DataSet,
}

impl Page for Dashboard {
    fn title(&self) -> &'static str { "대시보드" }
    fn kind(&self) -> PageKind { PageKind::Dashboard }
    fn error_message(&self) -> &'static str { "데이터를 불러오는데 실패했습니다." }

    fn poll_interval(&self) -> Option<Duration> {
        Some(Duration::from_secs(POLL_INTERVAL_SECS))
    }

    fn fetch(&self, api: &ApiClient, _state: &AppState) -> Result<PageData, ApiError> {
        let (summary, ranking, academy_stats) = thread::scope(|s| {
            let h_sum = s.spawn(|| api::analysis::summary(api, None));
            let h_rank = s.spawn(|| api::analysis::ranking(api, None, RANKING_LIMIT));
            let h_acad = s.spawn(|| api::analysis::academy_stats(api));

            // Summary is the page; the tab tables degrade to empty.
            let summary = join_branch(h_sum)?;
            let ranking = or_default("dashboard ranking", join_branch(h_rank));
            let academy_stats = or_default("dashboard academy stats", join_branch(h_acad));
            Ok::<_, ApiError>((summary, ranking, academy_stats))
        })?;

        let ranking_table = table::teacher_ranking(&ranking);
        let academy_table = table::academy_stats(&academy_stats);

        Ok(PageData::Dashboard(DashboardData {
            summary,
            ranking_table,
            academy_table,
        }))
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(PageData::Dashboard(data)) = app.data.get(&PageKind::Dashboard) else {
            ui.label(RichText::new("불러오는 중...").weak());
            return;
        };

        let s = &data.summary;
        super::stat_card_row(ui, &[
            ("오늘 언급", cell!(s.total_mentions), Color32::from_rgb(0x19, 0x76, 0xd2), Some((s.mention_change, "전일 대비"))),
            ("분석 강사", cell!(s.total_teachers), Color32::from_rgb(0x6a, 0x3f, 0xb5), None),
            ("모니터링 학원", cell!(s.total_academies), Color32::from_rgb(0xef, 0x6c, 0x00), None),
            ("긍정 비율", format!("{:.0}%", s.positive_ratio * 100.0), Color32::from_rgb(0x2e, 0x7d, 0x32), None),
        ]);

        ui.add_space(8.0);

        let tab = app.state.gui.dashboard_tab;
        ui.horizontal(|ui| {
            if ui.selectable_label(tab == DashboardTab::TeacherRanking, "강사 랭킹 TOP 20").clicked() {
                app.state.gui.dashboard_tab = DashboardTab::TeacherRanking;
            }
            if ui.selectable_label(tab == DashboardTab::AcademyStats, "학원별 현황").clicked() {
                app.state.gui.dashboard_tab = DashboardTab::AcademyStats;
            }
        });
        ui.separator();

        match app.state.gui.dashboard_tab {
            DashboardTab::TeacherRanking => {
                data_table::draw_with(
                    ui,
                    "dashboard_ranking",
                    &data.ranking_table,
                    &[0, 4, 6],
                    &|col, cell| (col == 5).then(|| sentiment_tag_color(cell)).flatten(),
                );
            }
            DashboardTab::AcademyStats => {
                data_table::draw_with(ui, "dashboard_academies", &data.academy_table, &[1, 2, 3], &|_, _| None);
            }
        }
    }
}

fn sentiment_tag_color(tag: &str) -> Option<Color32> {
    use crate::gui::components::sentiment::color_for;
    use crate::sentiment::Sentiment;
    match tag {
        "POSITIVE" => Some(color_for(Sentiment::Positive)),
        "NEGATIVE" => Some(color_for(Sentiment::Negative)),
        "NEUTRAL" => Some(color_for(Sentiment::Neutral)),
        _ => None,
    }
}

// src/gui/pages/weekly.rs
//
// Weekly rollup: ISO-week navigator, summary cards, the top teacher's
// trend charts, and the weekly ranking table.

use std::thread;

use eframe::egui::{self, Button, Color32, RichText};

use crate::{
    api::{self, ApiClient, ApiError},
    config::{
        consts::{TREND_WEEKS, WEEKLY_RANKING_LIMIT},
        options::PageKind,
        state::AppState,
    },
    fetch::{join_branch, or_default},
    gui::{
        app::App,
        components::{data_table, trend_chart::{self, Series}},
    },
    model::{WeeklySummary, WeeklyTrendPoint},
    table::{self, DataSet},
    week::WeekRef,
};

use super::{Page, PageData};

pub static PAGE: WeeklyReports = WeeklyReports;

pub struct WeeklyReports;

pub struct WeeklyData {
    pub summary: WeeklySummary,
    pub table: DataSet,
    pub trend_teacher: Option<String>,
    pub trend: Vec<WeeklyTrendPoint>,
}

impl Page for WeeklyReports {
    fn title(&self) -> &'static str { "주간 리포트" }
    fn kind(&self) -> PageKind { PageKind::WeeklyReports }
    fn error_message(&self) -> &'static str { "주간 리포트를 불러오는데 실패했습니다." }

    fn fetch(&self, api: &ApiClient, state: &AppState) -> Result<PageData, ApiError> {
        let WeekRef { year, week } = state.gui.week;

        let (summary, ranking) = thread::scope(|s| {
            let h_summary = s.spawn(move || api::weekly::summary(api, year, week));
            let h_ranking =
                s.spawn(move || api::weekly::ranking(api, year, week, WEEKLY_RANKING_LIMIT));

            let summary = join_branch(h_summary)?;
            let ranking = or_default("weekly ranking", join_branch(h_ranking));
            Ok::<_, ApiError>((summary, ranking))
        })?;

        // Trend for whoever tops the week. Needs the ranking first, so it
        // runs after the fan-in.
        let (trend_teacher, trend) = match ranking.first() {
            Some(top) => (
                Some(top.teacher_name.clone()),
                or_default(
                    "weekly trend",
                    api::weekly::teacher_trend(api, top.teacher_id, TREND_WEEKS),
                ),
            ),
            None => (None, Vec::new()),
        };

        let table = table::weekly_ranking(&ranking);
        Ok(PageData::Weekly(WeeklyData { summary, table, trend_teacher, trend }))
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let mut new_week: Option<WeekRef> = None;
        let current = WeekRef::current();
        let week = app.state.gui.week;

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                new_week = Some(week.prev());
            }
            ui.label(RichText::new(week.label()).strong());
            if ui.add_enabled(current.is_after(week), Button::new("▶")).clicked() {
                new_week = Some(week.next_clamped(current));
            }
            if current.is_after(week) && ui.button("이번 주").clicked() {
                new_week = Some(current);
            }
        });
        ui.separator();

        {
            let Some(PageData::Weekly(data)) = app.data.get(&PageKind::WeeklyReports) else {
                ui.label(RichText::new("불러오는 중...").weak());
                if let Some(w) = new_week {
                    app.state.gui.week = w;
                    app.request_refresh(PageKind::WeeklyReports);
                }
                return;
            };

            let s = &data.summary;
            super::stat_card_row(ui, &[
                (
                    "주간 언급",
                    cell!(s.total_mentions),
                    Color32::from_rgb(0x19, 0x76, 0xd2),
                    s.mention_change_rate.map(|r| (r, "전주 대비")),
                ),
                ("참여 강사", cell!(s.total_teachers), Color32::from_rgb(0x6a, 0x3f, 0xb5), None),
                ("긍정", cell!(s.total_positive), Color32::from_rgb(0x2e, 0x7d, 0x32), None),
                ("추천", cell!(s.total_recommendations), Color32::from_rgb(0xef, 0x6c, 0x00), None),
            ]);
            ui.add_space(8.0);

            if let Some(name) = &data.trend_teacher {
                ui.label(RichText::new(format!("{name} · 최근 {TREND_WEEKS}주 추이")).strong());
                let labels: Vec<String> = data.trend.iter().map(|p| p.label()).collect();
                let counts = |f: fn(&WeeklyTrendPoint) -> i64| -> Vec<f64> {
                    data.trend.iter().map(|p| f(p) as f64).collect()
                };
                let lines = [
                    Series {
                        name: "언급",
                        color: Color32::from_rgb(0x19, 0x76, 0xd2),
                        values: counts(|p| p.mention_count),
                    },
                    Series {
                        name: "추천",
                        color: Color32::from_rgb(0xef, 0x6c, 0x00),
                        values: counts(|p| p.recommendation_count),
                    },
                ];
                let bars = [
                    Series {
                        name: "긍정",
                        color: Color32::from_rgb(0x2e, 0x7d, 0x32),
                        values: counts(|p| p.positive_count),
                    },
                    Series {
                        name: "부정",
                        color: Color32::from_rgb(0xc6, 0x28, 0x28),
                        values: counts(|p| p.negative_count),
                    },
                ];
                ui.columns(2, |columns| {
                    trend_chart::line_chart(&mut columns[0], &labels, &lines, 130.0);
                    trend_chart::bar_chart(&mut columns[1], &labels, &bars, 130.0);
                });
                ui.add_space(8.0);
            }

            ui.label(RichText::new("주간 랭킹 TOP 30").strong());
            data_table::draw_with(
                ui,
                "weekly_ranking",
                &data.table,
                &[0, 3, 4, 5, 7, 8],
                &|col, cell| (col == 0).then(|| medal_color(cell)).flatten(),
            );
        }

        if let Some(w) = new_week {
            app.state.gui.week = w;
            app.request_refresh(PageKind::WeeklyReports);
        }
    }
}

fn medal_color(rank: &str) -> Option<Color32> {
    match rank {
        "1" => Some(Color32::from_rgb(0xd4, 0xaf, 0x37)),
        "2" => Some(Color32::from_rgb(0xa8, 0xa9, 0xad)),
        "3" => Some(Color32::from_rgb(0xcd, 0x7f, 0x32)),
        _ => None,
    }
}

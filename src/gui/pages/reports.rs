// src/gui/pages/reports.rs
//
// Daily report browser: one day at a time, newest allowed day is today.

use std::thread;

use chrono::{Days, Local, NaiveDate};
use eframe::egui::{self, Button, Color32, RichText};

use crate::{
    api::{self, ApiClient, ApiError},
    config::{options::PageKind, state::AppState},
    fetch::join_branch,
    gui::{app::App, components::data_table},
    model::{AnalysisSummary, PeriodReport},
    table::{self, DataSet},
};

use super::{Page, PageData};

pub static PAGE: DailyReports = DailyReports;

pub struct DailyReports;

pub struct DailyData {
    pub report: PeriodReport,
    pub summary: Option<AnalysisSummary>,
    pub table: DataSet,
}

impl Page for DailyReports {
    fn title(&self) -> &'static str { "일간 리포트" }
    fn kind(&self) -> PageKind { PageKind::DailyReports }
    fn error_message(&self) -> &'static str { "리포트를 불러오는데 실패했습니다." }

    fn fetch(&self, api: &ApiClient, state: &AppState) -> Result<PageData, ApiError> {
        let date = state.gui.report_date;

        let (report, summary) = thread::scope(|s| {
            let h_report = s.spawn(move || api::reports::daily(api, date));
            let h_summary = s.spawn(move || api::analysis::summary(api, Some(date)));

            let report = join_branch(h_report)?;
            let summary = join_branch(h_summary)
                .inspect_err(|e| loge!("Fetch: daily summary degraded: {}", e))
                .ok();
            Ok::<_, ApiError>((report, summary))
        })?;

        let table = table::daily_reports(&report.teacher_summaries);
        Ok(PageData::Daily(DailyData { report, summary, table }))
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let mut new_date: Option<NaiveDate> = None;
        let today = Local::now().date_naive();
        let date = app.state.gui.report_date;

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                if let Some(d) = date.checked_sub_days(Days::new(1)) {
                    new_date = Some(d);
                }
            }
            ui.label(RichText::new(date.to_string()).strong());
            if ui.add_enabled(date < today, Button::new("▶")).clicked() {
                if let Some(d) = date.checked_add_days(Days::new(1)) {
                    new_date = Some(d.min(today));
                }
            }
            if date != today && ui.button("오늘").clicked() {
                new_date = Some(today);
            }
        });
        ui.separator();

        {
            let Some(PageData::Daily(data)) = app.data.get(&PageKind::DailyReports) else {
                ui.label(RichText::new("불러오는 중...").weak());
                if let Some(d) = new_date {
                    app.state.gui.report_date = d;
                    app.request_refresh(PageKind::DailyReports);
                }
                return;
            };

            if let Some(s) = &data.summary {
                super::stat_card_row(ui, &[
                    ("총 언급", cell!(s.total_mentions), Color32::from_rgb(0x19, 0x76, 0xd2), Some((s.mention_change, "전일 대비"))),
                    ("긍정", cell!(s.total_positive), Color32::from_rgb(0x2e, 0x7d, 0x32), None),
                    ("부정", cell!(s.total_negative), Color32::from_rgb(0xc6, 0x28, 0x28), None),
                    ("추천", cell!(s.total_recommendations), Color32::from_rgb(0xef, 0x6c, 0x00), None),
                ]);
                ui.add_space(8.0);
            }

            ui.label(
                RichText::new(format!(
                    "강사 {}명 · 언급 {}건",
                    data.report.total_teachers, data.report.total_mentions
                ))
                .weak()
                .small(),
            );
            data_table::draw_with(
                ui,
                "daily_reports",
                &data.table,
                &[2, 3, 4, 5, 7, 8],
                &|_, _| None,
            );
        }

        if let Some(d) = new_date {
            app.state.gui.report_date = d;
            app.request_refresh(PageKind::DailyReports);
        }
    }
}

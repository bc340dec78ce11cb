// src/gui/pages/teacher_detail.rs
//
// Drill-down from the teacher list. Profile header, today's numbers,
// recent mentions, and a 7-day history table.

use std::thread;

use chrono::Local;
use eframe::egui::{self, Color32, Frame, RichText};

use crate::{
    api::{self, ApiClient, ApiError},
    config::{
        consts::{HISTORY_DAYS, RECENT_MENTIONS_LIMIT},
        options::PageKind,
        state::AppState,
    },
    fetch::{join_branch, or_default},
    gui::{
        app::App,
        components::{data_table, sentiment as sentiment_ui},
    },
    model::{DailyReport, Mention, Teacher},
    sentiment::{self, Sentiment},
    table::{self, DataSet},
};

use super::{Page, PageData};

pub static PAGE: TeacherDetail = TeacherDetail;

pub struct TeacherDetail;

pub struct TeacherDetailData {
    pub teacher: Teacher,
    pub today: Option<DailyReport>,
    pub mentions: Vec<Mention>,
    pub history_table: DataSet,
}

impl Page for TeacherDetail {
    fn title(&self) -> &'static str { "강사 상세" }
    fn kind(&self) -> PageKind { PageKind::TeacherDetail }
    fn error_message(&self) -> &'static str { "강사 정보를 불러오는데 실패했습니다." }

    fn fetch(&self, api: &ApiClient, state: &AppState) -> Result<PageData, ApiError> {
        let Some(id) = state.gui.selected_teacher else {
            loge!("Fetch: teacher detail requested without a selection");
            return Err(ApiError::Worker);
        };

        let (teacher, today_reports, mentions, history) = thread::scope(|s| {
            let h_teacher = s.spawn(|| api::teachers::by_id(api, id));
            let h_today = s.spawn(|| api::analysis::teacher_reports(api, id, 1));
            let h_mentions = s.spawn(|| api::teachers::mentions(api, id, RECENT_MENTIONS_LIMIT));
            let h_history = s.spawn(|| api::teachers::reports(api, id, HISTORY_DAYS));

            let teacher = join_branch(h_teacher)?;
            let today_reports = or_default("teacher today report", join_branch(h_today));
            let mentions = or_default("teacher mentions", join_branch(h_mentions));
            let history = or_default("teacher report history", join_branch(h_history));
            Ok::<_, ApiError>((teacher, today_reports, mentions, history))
        })?;

        let today_date = Local::now().date_naive();
        let today = today_reports
            .into_iter()
            .find(|r| r.report_date == Some(today_date))
            // fall back to the 7-day history when the dedicated
            // request degraded
            .or_else(|| {
                history
                    .iter()
                    .find(|r| r.report_date == Some(today_date))
                    .cloned()
            });
        let history_table = table::report_history(&history);

        Ok(PageData::TeacherDetail(TeacherDetailData {
            teacher,
            today,
            mentions,
            history_table,
        }))
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let mut close = false;

        {
            if ui.button("← 목록으로").clicked() {
                close = true;
            }
            ui.add_space(4.0);

            let Some(PageData::TeacherDetail(data)) = app.data.get(&PageKind::TeacherDetail)
            else {
                ui.label(RichText::new("불러오는 중...").weak());
                if close {
                    app.close_teacher();
                }
                return;
            };

            let t = &data.teacher;
            ui.horizontal(|ui| {
                ui.heading(&t.name);
                if !t.is_active {
                    ui.label(RichText::new("비활성").weak().small());
                }
            });
            let mut line = t.academy_name.clone().unwrap_or_else(|| s!("-"));
            if let Some(subject) = &t.subject_name {
                line.push_str(" · ");
                line.push_str(subject);
            }
            ui.label(RichText::new(line).weak());
            if !t.aliases.is_empty() {
                ui.label(RichText::new(format!("별명: {}", t.aliases.join(", "))).small().weak());
            }

            ui.separator();
            ui.label(RichText::new("오늘").strong());
            match &data.today {
                Some(r) => {
                    super::stat_card_row(ui, &[
                        ("언급", cell!(r.mention_count), Color32::from_rgb(0x19, 0x76, 0xd2), None),
                        ("긍정", cell!(r.positive_count), Color32::from_rgb(0x2e, 0x7d, 0x32), None),
                        ("부정", cell!(r.negative_count), Color32::from_rgb(0xc6, 0x28, 0x28), None),
                        ("추천", cell!(r.recommendation_count), Color32::from_rgb(0xef, 0x6c, 0x00), None),
                    ]);
                    if r.mention_change != 0 {
                        ui.label(
                            RichText::new(format!("언급 전일 대비 {:+}", r.mention_change))
                                .small()
                                .weak(),
                        );
                    }
                    sentiment_ui::split_bar(ui, r.positive_count, r.neutral_count, r.negative_count);
                    if let Some(verdict) = sentiment::difficulty_verdict(
                        r.difficulty_easy_count,
                        r.difficulty_medium_count,
                        r.difficulty_hard_count,
                    ) {
                        ui.label(format!("체감 난이도: {verdict}"));
                    }
                    if let Some(summary) = &r.summary {
                        Frame::group(ui.style()).inner_margin(8.0).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new("AI 요약").small().weak());
                            ui.label(summary);
                        });
                    }
                }
                None => {
                    ui.label(RichText::new("오늘 리포트가 없습니다.").weak());
                }
            }

            ui.separator();
            ui.label(RichText::new("최근 언급").strong());
            if data.mentions.is_empty() {
                ui.label(RichText::new("수집된 언급이 없습니다.").weak());
            } else {
                for m in &data.mentions {
                    ui.horizontal(|ui| {
                        sentiment_ui::chip(ui, Sentiment::from_tag(&m.sentiment), None);
                        if let Some(kind) = &m.mention_type {
                            ui.label(RichText::new(kind).small().weak());
                        }
                        if m.is_recommended {
                            ui.label(RichText::new("추천").small().color(Color32::from_rgb(0xef, 0x6c, 0x00)));
                        }
                        let context = m.context.as_deref().unwrap_or("-");
                        ui.label(RichText::new(context).small());
                    });
                }
            }

            ui.separator();
            ui.label(RichText::new(format!("최근 {HISTORY_DAYS}일")).strong());
            data_table::draw(ui, "teacher_history", &data.history_table);
        }

        if close {
            app.close_teacher();
        }
    }
}

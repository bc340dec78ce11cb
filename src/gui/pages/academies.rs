// src/gui/pages/academies.rs
//
// Academy overview plus an expandable per-academy roster.

use std::thread;

use eframe::egui::{self, Frame, RichText};

use crate::{
    api::{self, ApiClient, ApiError},
    config::{options::PageKind, state::AppState},
    fetch::{join_branch, or_default},
    gui::{app::App, components::data_table},
    model::{Academy, AcademyStats},
    sentiment,
    table::{self, DataSet},
};

use super::{Page, PageData};

pub static PAGE: Academies = Academies;

pub struct Academies;

pub struct RosterData {
    pub academy_id: u64,
    pub stats: AcademyStats,
    pub table: DataSet,
}

pub struct AcademiesData {
    pub academies: Vec<Academy>,
    pub stats: Vec<AcademyStats>,
    pub stats_table: DataSet,
    pub roster: Option<RosterData>,
}

impl Page for Academies {
    fn title(&self) -> &'static str { "학원" }
    fn kind(&self) -> PageKind { PageKind::Academies }
    fn error_message(&self) -> &'static str { "학원 정보를 불러오는데 실패했습니다." }

    fn fetch(&self, api: &ApiClient, state: &AppState) -> Result<PageData, ApiError> {
        let selected = state.gui.selected_academy;

        let (academies, stats, roster) = thread::scope(|s| {
            let h_acads = s.spawn(|| api::academies::all(api));
            let h_stats = s.spawn(|| api::analysis::academy_stats(api));
            let h_roster = selected.map(|id| {
                (
                    s.spawn(move || api::academies::teachers(api, id)),
                    s.spawn(move || api::academies::stats(api, id, None)),
                )
            });

            let academies = join_branch(h_acads)?;
            let stats = or_default("academy stats", join_branch(h_stats));
            let roster = h_roster.map(|(h_teachers, h_detail)| {
                let teachers = or_default("academy roster", join_branch(h_teachers));
                let detail = or_default("academy detail stats", join_branch(h_detail));
                (teachers, detail)
            });
            Ok::<_, ApiError>((academies, stats, roster))
        })?;

        let stats_table = table::academy_stats(&stats);
        let roster = selected.zip(roster).map(|(academy_id, (teachers, detail))| RosterData {
            academy_id,
            stats: detail,
            table: table::academy_roster(&teachers),
        });

        Ok(PageData::Academies(AcademiesData { academies, stats, stats_table, roster }))
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let mut toggle: Option<u64> = None;

        {
            let Some(PageData::Academies(data)) = app.data.get(&PageKind::Academies) else {
                ui.label(RichText::new("불러오는 중...").weak());
                return;
            };

            ui.label(RichText::new("학원별 현황").strong());
            data_table::draw_with(ui, "academy_stats", &data.stats_table, &[1, 2, 3], &|_, _| None);

            ui.separator();
            ui.label(RichText::new("학원 목록").strong());
            ui.horizontal_wrapped(|ui| {
                for a in &data.academies {
                    let selected = app.state.gui.selected_academy == Some(a.id);
                    let st = data.stats.iter().find(|s| s.academy_id == a.id);
                    Frame::group(ui.style()).inner_margin(8.0).show(ui, |ui| {
                        ui.vertical(|ui| {
                            if ui.selectable_label(selected, RichText::new(&a.name).strong()).clicked() {
                                toggle = Some(a.id);
                            }
                            let line = match st {
                                Some(st) => format!(
                                    "언급 {} · 강사 {}",
                                    st.total_mentions, st.total_teachers_mentioned,
                                ),
                                None => s!("오늘 언급 없음"),
                            };
                            ui.label(RichText::new(line).small().weak());
                            if !a.is_active {
                                ui.label(RichText::new("수집 중지").small().weak());
                            }
                        });
                    });
                }
            });

            if let Some(roster) = &data.roster {
                if let Some(a) = data.academies.iter().find(|a| a.id == roster.academy_id) {
                    ui.separator();
                    ui.heading(&a.name);
                    if let Some(site) = &a.website {
                        ui.label(RichText::new(site).small().weak());
                    }
                    let st = &roster.stats;
                    ui.label(format!(
                        "언급 {} · 강사 {} · 평균 감성 {}",
                        st.total_mentions,
                        st.total_teachers_mentioned,
                        sentiment::percent_label(st.avg_sentiment_score),
                    ));
                    data_table::draw_with(ui, "academy_roster", &roster.table, &[2, 3, 4, 5], &|_, _| None);
                }
            }
        }

        if let Some(id) = toggle {
            if app.state.gui.selected_academy == Some(id) {
                app.state.gui.selected_academy = None;
            } else {
                app.state.gui.selected_academy = Some(id);
            }
            app.request_refresh(PageKind::Academies);
        }
    }
}

// src/gui/pages/teachers.rs
//
// Teacher directory: academy filter (server side), name/alias search and
// pagination (client side), click-through to the detail view.

use std::thread;

use eframe::egui::{self, ComboBox, Frame, RichText};

use crate::{
    api::{self, ApiClient, ApiError},
    config::{consts::TEACHERS_PER_PAGE, options::PageKind, state::AppState},
    fetch::{join_branch, or_default},
    gui::app::App,
    model::{Academy, Teacher},
    search,
    sentiment,
    table::{self, DataSet},
};

use super::{Page, PageData};

pub static PAGE: Teachers = Teachers;

pub struct Teachers;

pub struct TeachersData {
    pub academies: Vec<Academy>,
    pub teachers: Vec<Teacher>,
    pub table: DataSet,
}

impl Page for Teachers {
    fn title(&self) -> &'static str { "강사 목록" }
    fn kind(&self) -> PageKind { PageKind::Teachers }
    fn error_message(&self) -> &'static str { "강사 목록을 불러오는데 실패했습니다." }

    fn fetch(&self, api: &ApiClient, state: &AppState) -> Result<PageData, ApiError> {
        let academy_id = state.gui.academy_filter;
        let (teachers, academies) = thread::scope(|s| {
            let h_teachers = s.spawn(|| api::teachers::all(api, academy_id));
            let h_academies = s.spawn(|| api::academies::all(api));

            let teachers = join_branch(h_teachers)?;
            // Filter dropdown just shrinks to "전체" when this one fails.
            let academies = or_default("academy filter list", join_branch(h_academies));
            Ok::<_, ApiError>((teachers, academies))
        })?;

        let table = table::teachers(&teachers);
        Ok(PageData::Teachers(TeachersData { academies, teachers, table }))
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let mut refresh = false;
        let mut open: Option<u64> = None;

        {
            let Some(PageData::Teachers(data)) = app.data.get(&PageKind::Teachers) else {
                ui.label(RichText::new("불러오는 중...").weak());
                return;
            };

            ui.horizontal(|ui| {
                ui.label("검색:");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut app.state.gui.search_text)
                        .hint_text("강사명 또는 별명")
                        .desired_width(200.0),
                );
                if resp.changed() {
                    app.state.gui.teacher_page = 1;
                }

                let selected_label = app
                    .state
                    .gui
                    .academy_filter
                    .and_then(|id| data.academies.iter().find(|a| a.id == id))
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| s!("전체 학원"));

                ComboBox::from_id_salt("academy_filter")
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        if ui
                            .selectable_label(app.state.gui.academy_filter.is_none(), "전체 학원")
                            .clicked()
                            && app.state.gui.academy_filter.is_some()
                        {
                            app.state.gui.academy_filter = None;
                            app.state.gui.teacher_page = 1;
                            refresh = true;
                        }
                        for a in &data.academies {
                            let selected = app.state.gui.academy_filter == Some(a.id);
                            if ui.selectable_label(selected, &a.name).clicked() && !selected {
                                app.state.gui.academy_filter = Some(a.id);
                                app.state.gui.teacher_page = 1;
                                refresh = true;
                            }
                        }
                    });
            });

            ui.separator();

            let ix = search::filter_indices(&data.teachers, &app.state.gui.search_text);
            let pages = search::page_count(ix.len(), TEACHERS_PER_PAGE);
            let page = app.state.gui.teacher_page.clamp(1, pages);
            app.state.gui.teacher_page = page;

            if ix.is_empty() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("검색 결과가 없습니다.").weak());
                });
            } else {
                egui::ScrollArea::vertical()
                    .id_salt("teachers_scroll")
                    .show(ui, |ui| {
                        for &i in search::page_slice(&ix, page, TEACHERS_PER_PAGE) {
                            let t = &data.teachers[i];
                            if teacher_card(ui, t) {
                                open = Some(t.id);
                            }
                        }
                    });
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.add_enabled(page > 1, egui::Button::new("이전")).clicked() {
                    app.state.gui.teacher_page = page - 1;
                }
                ui.label(format!("{page} / {pages}"));
                if ui.add_enabled(page < pages, egui::Button::new("다음")).clicked() {
                    app.state.gui.teacher_page = page + 1;
                }
                ui.label(RichText::new(format!("총 {}명", ix.len())).weak().small());
            });
        }

        if refresh {
            app.request_refresh(PageKind::Teachers);
        }
        if let Some(id) = open {
            app.open_teacher(id);
        }
    }
}

/// One row card; returns true when clicked.
fn teacher_card(ui: &mut egui::Ui, t: &Teacher) -> bool {
    let mut clicked = false;
    Frame::group(ui.style()).inner_margin(8.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&t.name).strong());
                let mut line = t.academy_name.clone().unwrap_or_else(|| s!("-"));
                if let Some(subject) = &t.subject_name {
                    line.push_str(" · ");
                    line.push_str(subject);
                }
                ui.label(RichText::new(line).small().weak());
                if !t.aliases.is_empty() {
                    ui.label(RichText::new(t.aliases.join(", ")).small().weak());
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("상세").clicked() {
                    clicked = true;
                }
                if let Some(n) = t.mention_count {
                    ui.label(RichText::new(format!("언급 {n}")).small());
                }
                if t.avg_sentiment_score.is_some() {
                    ui.label(
                        RichText::new(format!(
                            "감성 {}",
                            sentiment::percent_label(t.avg_sentiment_score)
                        ))
                        .small(),
                    );
                }
            });
        });
    });
    clicked
}

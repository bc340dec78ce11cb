// src/gui/components/nav_panel.rs
//
// Left navigation: page menu, crawler status strip, manual crawl trigger.

use eframe::egui::{self, Button, Color32, RichText};

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.heading("TeacherHub");
    ui.label(RichText::new("강사 평판 대시보드").small().weak());
    ui.separator();

    let current = app.state.gui.current_page_index;
    for (idx, page) in router::all_pages().iter().enumerate() {
        let selected = idx == current && app.state.gui.selected_teacher.is_none();
        if ui.selectable_label(selected, page.title()).clicked() && idx != current {
            logf!("UI: Page → {:?}", page.kind());
            app.switch_page(idx);
        }
    }

    ui.separator();
    ui.label(RichText::new("크롤러").small().weak());

    let running = app.crawl.as_ref().is_some_and(|c| c.is_running());
    match &app.crawl {
        Some(c) => {
            let (text, color) = if running {
                ("수집 중...", Color32::from_rgb(0x19, 0x76, 0xd2))
            } else if c.status.eq_ignore_ascii_case("failed") {
                ("실패", Color32::from_rgb(0xc6, 0x28, 0x28))
            } else {
                ("대기", Color32::from_gray(150))
            };
            ui.label(RichText::new(text).color(color));
            if running {
                ui.label(RichText::new(format!("언급 {}건 발견", c.mentions_found)).small());
            }
        }
        None => {
            ui.label(RichText::new("상태 확인 중").weak().small());
        }
    }

    if ui
        .add_enabled(!running, Button::new("크롤링 실행"))
        .clicked()
    {
        app.trigger_crawl();
    }

    ui.separator();
    let status = app.status.lock().unwrap().clone();
    ui.label(RichText::new(status).small());
}

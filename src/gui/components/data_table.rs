// src/gui/components/data_table.rs
//
// Generic striped table over a DataSet. Purely a view; pages that need
// colored cells (sentiment columns) pass a cell painter.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::DataSet;

pub fn draw(ui: &mut egui::Ui, salt: &str, ds: &DataSet) {
    draw_with(ui, salt, ds, &[], &|_, _| None);
}

pub fn draw_with(
    ui: &mut egui::Ui,
    salt: &str,
    ds: &DataSet,
    numeric_cols: &[usize],
    cell_color: &dyn Fn(usize, &str) -> Option<Color32>,
) {
    if ds.is_empty() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("데이터가 없습니다.").weak());
        });
        return;
    }

    let cols = ds
        .header_count()
        .max(ds.rows.first().map(|r| r.len()).unwrap_or(0));

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("data_table", salt));
    for _ in 0..cols {
        table = table.column(Column::auto().resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(22.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = ds
                        .headers
                        .as_ref()
                        .and_then(|h| h.get(ci).cloned())
                        .unwrap_or_else(|| format!("Col {}", ci + 1));
                    let strong = RichText::new(label).strong();
                    if numeric_cols.contains(&ci) {
                        ui.centered_and_justified(|ui| { ui.label(strong); });
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.label(strong);
                        });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, ds.rows.len(), |mut row| {
                let ri = row.index();
                for ci in 0..cols {
                    let cell = ds.rows[ri].get(ci).map(|c| c.as_str()).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if let Some(color) = cell_color(ci, cell) {
                            rt = rt.color(color);
                        }
                        if numeric_cols.contains(&ci) {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(rt);
                            });
                        }
                    });
                }
            });
        });
}

// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    csv, file,
    gui::app::App,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.active_kind();

    ui.horizontal(|ui| {
        {
            let export = &mut app.state.options.export;

            let prev_fmt = match export.format {
                ExportFormat::Csv => UiFormat::Csv,
                ExportFormat::Tsv => UiFormat::Tsv,
            };
            let mut fmt = prev_fmt;

            ui.label("형식:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            if fmt != prev_fmt {
                export.format = match fmt {
                    UiFormat::Csv => ExportFormat::Csv,
                    UiFormat::Tsv => ExportFormat::Tsv,
                };
                logf!("UI: Export format → {:?}", export.format);
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }
        }

        let export = &mut app.state.options.export;

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "헤더 포함");
        if export.include_headers != before_headers {
            logf!("UI: include_headers → {}", export.include_headers);
        }

        ui.label("저장 위치:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(260.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        let ds = app.data.get(&kind).and_then(|d| d.primary_table()).cloned();

        // Copy
        if ui.button("복사").clicked() {
            match &ds {
                Some(ds) if !ds.is_empty() => {
                    logf!(
                        "Copy: page={:?}, rows={}, headers={}",
                        kind,
                        ds.row_count(),
                        ds.header_count()
                    );
                    let export = &app.state.options.export;
                    let txt = csv::to_export_string(
                        &ds.headers,
                        &ds.rows,
                        export.include_headers,
                        export.delim(),
                    );
                    ui.ctx().copy_text(txt);
                    app.status("클립보드에 복사됨");
                }
                _ => {
                    app.status("복사할 데이터가 없습니다");
                    logd!("Copy: Clicked, but there's nothing to copy");
                }
            }
        }

        // Export
        if ui.button("내보내기").clicked() {
            match &ds {
                Some(ds) if !ds.is_empty() => {
                    if app.out_path_dirty {
                        app.state.options.export.set_path(&app.out_path_text);
                        logf!(
                            "Export: Out path set → {}",
                            app.state.options.export.out_path().display()
                        );
                        app.out_path_dirty = false;
                    }

                    let export = &app.state.options.export;
                    logf!(
                        "Export: Begin page={:?}, rows={}, headers={}",
                        kind,
                        ds.row_count(),
                        ds.header_count()
                    );

                    match file::write_export(export, ds) {
                        Ok(path) => {
                            logf!("Export: OK → {}", path.display());
                            app.status(format!("저장 완료: {}", path.display()));
                        }
                        Err(e) => {
                            loge!("Export: Error: {}", e);
                            app.status(format!("저장 실패: {e}"));
                        }
                    }
                }
                _ => {
                    app.status("내보낼 데이터가 없습니다");
                    logd!("Export: Clicked, but there's nothing to export");
                }
            }
        }
    });
}

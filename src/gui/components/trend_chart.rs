// src/gui/components/trend_chart.rs
//
// Hand-painted line and bar charts. X-axis labels are shared across
// series; the weekly page feeds ISO week labels into these.

use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, pos2, vec2};

pub struct Series<'a> {
    pub name: &'a str,
    pub color: Color32,
    pub values: Vec<f64>,
}

const AXIS_COLOR: Color32 = Color32::from_gray(90);
const LABEL_COLOR: Color32 = Color32::from_gray(140);

fn frame(ui: &mut egui::Ui, height: f32) -> (Rect, egui::Painter) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_stroke(rect, 2.0, Stroke::new(1.0, AXIS_COLOR), StrokeKind::Inside);
    (rect, painter)
}

fn plot_area(rect: Rect) -> Rect {
    Rect::from_min_max(
        pos2(rect.left() + 8.0, rect.top() + 20.0),
        pos2(rect.right() - 8.0, rect.bottom() - 22.0),
    )
}

fn max_value(series: &[Series]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.values.iter())
        .fold(0.0f64, |m, v| m.max(*v))
        .max(1.0)
}

fn empty_notice(rect: Rect, painter: &egui::Painter) {
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "데이터가 없습니다.",
        FontId::proportional(12.0),
        LABEL_COLOR,
    );
}

fn legend(rect: Rect, painter: &egui::Painter, series: &[Series]) {
    let mut x = rect.left() + 8.0;
    let y = rect.top() + 6.0;
    for s in series {
        let swatch = Rect::from_min_max(pos2(x, y), pos2(x + 8.0, y + 8.0));
        painter.rect_filled(swatch, 1.0, s.color);
        let galley = painter.text(
            pos2(x + 11.0, y + 4.0),
            Align2::LEFT_CENTER,
            s.name,
            FontId::proportional(10.0),
            LABEL_COLOR,
        );
        x = galley.right() + 12.0;
    }
}

fn x_labels(rect: Rect, area: Rect, painter: &egui::Painter, labels: &[String], centered: bool) {
    let n = labels.len();
    for (i, label) in labels.iter().enumerate() {
        let x = if centered {
            area.left() + area.width() / n as f32 * (i as f32 + 0.5)
        } else if n > 1 {
            area.left() + area.width() / (n - 1) as f32 * i as f32
        } else {
            area.center().x
        };
        painter.text(
            pos2(x, rect.bottom() - 4.0),
            Align2::CENTER_BOTTOM,
            label,
            FontId::proportional(9.0),
            LABEL_COLOR,
        );
    }
}

pub fn line_chart(ui: &mut egui::Ui, labels: &[String], series: &[Series], height: f32) {
    let (rect, painter) = frame(ui, height);
    if labels.is_empty() {
        empty_notice(rect, &painter);
        return;
    }

    legend(rect, &painter, series);
    let area = plot_area(rect);
    let max = max_value(series);
    let step = if labels.len() > 1 {
        area.width() / (labels.len() - 1) as f32
    } else {
        0.0
    };

    for s in series {
        let mut prev: Option<egui::Pos2> = None;
        for (i, v) in s.values.iter().enumerate() {
            let x = area.left() + step * i as f32;
            let y = area.bottom() - area.height() * (v / max) as f32;
            let pt = pos2(x, y);
            if let Some(prev) = prev {
                painter.line_segment([prev, pt], Stroke::new(1.5, s.color));
            }
            painter.circle_filled(pt, 2.5, s.color);
            prev = Some(pt);
        }
    }
    x_labels(rect, area, &painter, labels, false);
}

pub fn bar_chart(ui: &mut egui::Ui, labels: &[String], series: &[Series], height: f32) {
    let (rect, painter) = frame(ui, height);
    if labels.is_empty() || series.is_empty() {
        empty_notice(rect, &painter);
        return;
    }

    legend(rect, &painter, series);
    let area = plot_area(rect);
    let max = max_value(series);
    let slot = area.width() / labels.len() as f32;
    let group_w = (slot * 0.7).max(2.0);
    let bar_w = (group_w / series.len() as f32).max(1.0);

    for (si, s) in series.iter().enumerate() {
        for (i, v) in s.values.iter().enumerate() {
            let cx = area.left() + slot * (i as f32 + 0.5);
            let left = cx - group_w / 2.0 + bar_w * si as f32;
            let h = area.height() * (v / max) as f32;
            let bar = Rect::from_min_max(
                pos2(left, area.bottom() - h),
                pos2(left + bar_w, area.bottom()),
            );
            painter.rect_filled(bar, 1.0, s.color);
        }
    }
    x_labels(rect, area, &painter, labels, true);
}

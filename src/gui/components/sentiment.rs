// src/gui/components/sentiment.rs
//
// Small sentiment widgets shared by the dashboard and detail pages.

use eframe::egui::{self, Color32, Frame, RichText, Sense, Stroke, StrokeKind, pos2, vec2};

use crate::sentiment::{self, Sentiment};

pub fn color_for(s: Sentiment) -> Color32 {
    match s {
        Sentiment::Positive => Color32::from_rgb(0x2e, 0x7d, 0x32),
        Sentiment::Neutral => Color32::from_rgb(0x75, 0x75, 0x75),
        Sentiment::Negative => Color32::from_rgb(0xc6, 0x28, 0x28),
    }
}

pub fn label_for(s: Sentiment) -> &'static str {
    match s {
        Sentiment::Positive => "긍정",
        Sentiment::Neutral => "중립",
        Sentiment::Negative => "부정",
    }
}

/// Colored chip like the mention lists use: "긍정 73%".
pub fn chip(ui: &mut egui::Ui, s: Sentiment, score: Option<f64>) {
    let color = color_for(s);
    let text = match score {
        Some(v) => format!("{} {}", label_for(s), sentiment::percent_label(Some(v))),
        None => label_for(s).to_string(),
    };
    Frame::new()
        .fill(color.gamma_multiply(0.15))
        .stroke(Stroke::new(1.0, color))
        .corner_radius(8.0)
        .inner_margin(vec2(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

/// Horizontal positive/neutral/negative split bar with percent captions.
pub fn split_bar(ui: &mut egui::Ui, positive: i64, neutral: i64, negative: i64) {
    let (p, n, g) = sentiment::split_percent(positive, neutral, negative);
    let total = positive + neutral + negative;

    let width = ui.available_width().min(420.0);
    let (rect, _) = ui.allocate_exact_size(vec2(width, 14.0), Sense::hover());
    let painter = ui.painter();

    if total == 0 {
        painter.rect_filled(rect, 4.0, Color32::from_gray(60));
    } else {
        let mut x = rect.left();
        for (frac, s) in [
            (p, Sentiment::Positive),
            (n, Sentiment::Neutral),
            (g, Sentiment::Negative),
        ] {
            let w = rect.width() * frac / 100.0;
            if w > 0.0 {
                let seg = egui::Rect::from_min_max(pos2(x, rect.top()), pos2(x + w, rect.bottom()));
                painter.rect_filled(seg, 0.0, color_for(s));
                x += w;
            }
        }
        painter.rect_stroke(
            rect,
            4.0,
            Stroke::new(1.0, Color32::from_gray(40)),
            StrokeKind::Inside,
        );
    }

    ui.horizontal(|ui| {
        for (frac, count, s) in [
            (p, positive, Sentiment::Positive),
            (n, neutral, Sentiment::Neutral),
            (g, negative, Sentiment::Negative),
        ] {
            ui.label(
                RichText::new(format!("{} {count} ({frac:.0}%)", label_for(s)))
                    .small()
                    .color(color_for(s)),
            );
        }
    });
}

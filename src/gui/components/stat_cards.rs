// src/gui/components/stat_cards.rs

use eframe::egui::{self, Color32, Frame, RichText};

pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    /// Change vs. the previous period, with a caption like "전일 대비".
    pub change: Option<(f64, &'static str)>,
    pub accent: Color32,
}

impl StatCard {
    pub fn new(title: &'static str, value: impl ToString, accent: Color32) -> Self {
        StatCard {
            title,
            value: value.to_string(),
            change: None,
            accent,
        }
    }

    pub fn with_change(mut self, change: f64, caption: &'static str) -> Self {
        self.change = Some((change, caption));
        self
    }
}

pub fn row(ui: &mut egui::Ui, cards: &[StatCard]) {
    ui.columns(cards.len(), |columns| {
        for (col, card) in columns.iter_mut().zip(cards) {
            Frame::group(col.style())
                .inner_margin(10.0)
                .show(col, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(card.title).small().weak());
                    ui.label(RichText::new(&card.value).heading().color(card.accent));
                    if let Some((change, caption)) = card.change {
                        let (sign, color) = if change >= 0.0 {
                            ("+", Color32::from_rgb(0x2e, 0x7d, 0x32))
                        } else {
                            ("", Color32::from_rgb(0xc6, 0x28, 0x28))
                        };
                        ui.label(
                            RichText::new(format!("{sign}{change:.1}% {caption}"))
                                .small()
                                .color(color),
                        );
                    }
                });
        }
    });
}

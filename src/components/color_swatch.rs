use eframe::egui;

use crate::palette;

/// One clickable preset color
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub active: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, active: bool) -> Self {
        Self { color, active }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 11.0, self.color);
            let outline = if self.active {
                egui::Stroke::new(2.5, egui::Color32::from_rgb(33, 150, 243))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(120))
            };
            ui.painter().rect_stroke(rect, 11.0, outline);
        }

        response.on_hover_text(palette::to_hex(self.color))
    }
}

use eframe::egui::{self, Color32, Response, Sense, Ui, Widget};

use crate::tools::ToolMode;

const SIZE: f32 = 30.0;
const ROUNDING: f32 = 6.0;
/// Active erasers get a warm outline so it is obvious the brush is off
const ERASER_ACCENT: Color32 = Color32::from_rgb(229, 115, 115);

/// Icon button for one [`ToolMode`]; pressing reports a click, the caller
/// decides what the press means (erasers toggle back to the brush).
pub struct ToolButton {
    tool: ToolMode,
    selected: bool,
}

impl ToolButton {
    pub fn new(tool: ToolMode, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn hover_text(&self) -> String {
        if self.selected && self.tool.is_eraser() {
            format!("{} (click again for {})", self.tool.name(), ToolMode::Brush.name())
        } else {
            self.tool.name().to_owned()
        }
    }
}

impl Widget for ToolButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(SIZE, SIZE), Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);
            let painter = ui.painter();
            painter.rect(rect, ROUNDING, visuals.weak_bg_fill, visuals.bg_stroke);
            if self.selected && self.tool.is_eraser() {
                let accent = egui::Stroke::new(2.0, ERASER_ACCENT);
                painter.rect_stroke(rect.shrink(1.0), ROUNDING, accent);
            }
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(SIZE * 0.6),
                visuals.text_color(),
            );
        }

        let hover = self.hover_text();
        response.on_hover_text(hover)
    }
}

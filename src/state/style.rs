use egui::Color32;

use crate::config::{DEFAULT_BRUSH_SIZE, DEFAULT_COLOR, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

/// Color and brush width applied to whatever is drawn next.
///
/// Changing the style never touches strokes that are already committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    color: Color32,
    brush_size: u32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl StyleState {
    pub fn new(color: Color32, brush_size: u32) -> Self {
        let mut style = Self::default();
        style.set_color(color);
        style.set_width(brush_size);
        style
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Colors are always opaque RGB
    pub fn set_color(&mut self, color: Color32) {
        self.color = Color32::from_rgb(color.r(), color.g(), color.b());
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn width(&self) -> f32 {
        self.brush_size as f32
    }

    pub fn set_width(&mut self, brush_size: u32) {
        self.brush_size = brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }
}

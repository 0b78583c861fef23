use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::tools::ToolMode;

pub const APP_NAME: &str = "Drawing Board";

/// Board background, also the area-eraser color
pub const BACKGROUND: Color32 = Color32::WHITE;

pub const DEFAULT_COLOR: Color32 = Color32::BLACK;
pub const DEFAULT_BRUSH_SIZE: u32 = 5;
pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 50;

/// Stroke-eraser reach as a multiple of the brush width
pub const ERASE_THRESHOLD_FACTOR: f32 = 2.0;

pub const GRID_SPACING: f32 = 20.0;
pub const GRID_COLOR: Color32 = Color32::from_rgb(220, 220, 220);
pub const GRID_LINE_WIDTH: f32 = 1.0;

pub const MIN_FONT_SIZE: f32 = 12.0;
pub const FONT_SIZE_PER_WIDTH: f32 = 4.0;

pub const EXPORT_FILE_NAME: &str = "drawing.png";

/// Preferences that survive restarts. The drawing itself is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppSettings {
    pub color: [u8; 3],
    pub brush_size: u32,
    pub tool: ToolMode,
    pub grid_visible: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            color: [DEFAULT_COLOR.r(), DEFAULT_COLOR.g(), DEFAULT_COLOR.b()],
            brush_size: DEFAULT_BRUSH_SIZE,
            tool: ToolMode::Brush,
            grid_visible: false,
        }
    }
}

impl AppSettings {
    pub fn color32(&self) -> Color32 {
        let [r, g, b] = self.color;
        Color32::from_rgb(r, g, b)
    }

    /// Clamp values loaded from storage back into the valid ranges
    pub fn sanitized(mut self) -> Self {
        self.brush_size = self.brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        self
    }
}

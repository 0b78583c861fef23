use serde::{Deserialize, Serialize};

use crate::geometry::ShapeKind;

/// How pointer gestures on the board are interpreted. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolMode {
    /// Paint with the current color
    #[default]
    Brush,
    /// Paint with the background color
    AreaEraser,
    /// Remove whole strokes touched by the gesture
    StrokeEraser,
    Shape(ShapeKind),
    Text,
}

impl ToolMode {
    /// Every tool, in toolbar order
    pub const ALL: [ToolMode; 8] = [
        ToolMode::Brush,
        ToolMode::AreaEraser,
        ToolMode::StrokeEraser,
        ToolMode::Shape(ShapeKind::Line),
        ToolMode::Shape(ShapeKind::Rectangle),
        ToolMode::Shape(ShapeKind::Circle),
        ToolMode::Shape(ShapeKind::Arrow),
        ToolMode::Text,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolMode::Brush => "Brush",
            ToolMode::AreaEraser => "Eraser",
            ToolMode::StrokeEraser => "Stroke Eraser",
            ToolMode::Shape(kind) => kind.name(),
            ToolMode::Text => "Text",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolMode::Brush => "🖌",
            ToolMode::AreaEraser => "⌫",
            ToolMode::StrokeEraser => "✂",
            ToolMode::Shape(ShapeKind::Line) => "╱",
            ToolMode::Shape(ShapeKind::Rectangle) => "▭",
            ToolMode::Shape(ShapeKind::Circle) => "○",
            ToolMode::Shape(ShapeKind::Arrow) => "➡",
            ToolMode::Text => "T",
        }
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self, ToolMode::AreaEraser | ToolMode::StrokeEraser)
    }

    /// Whether pointer-down starts recording into the stroke store
    pub fn records_stroke(&self) -> bool {
        matches!(
            self,
            ToolMode::Brush | ToolMode::AreaEraser | ToolMode::StrokeEraser
        )
    }

    /// Tool that results from pressing this tool's button while `current` is active.
    ///
    /// Eraser buttons toggle: pressing the active eraser goes back to the brush.
    pub fn after_button_press(self, current: ToolMode) -> ToolMode {
        if self.is_eraser() && self == current {
            ToolMode::Brush
        } else {
            self
        }
    }
}

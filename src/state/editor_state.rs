use egui::{Color32, Key, Pos2};
use log::{debug, info};

use crate::command::Command;
use crate::config::{
    AppSettings, BACKGROUND, ERASE_THRESHOLD_FACTOR, GRID_COLOR, GRID_LINE_WIDTH, GRID_SPACING,
};
use crate::document::Document;
use crate::error::DrawingResult;
use crate::geometry::{Shape, erase_threshold};
use crate::input::InputEvent;
use crate::stroke::MutableStroke;
use crate::surface::Surface;
use crate::tools::ToolMode;

use super::StyleState;

/// Text waiting for confirmation in the inline field
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraft {
    pub position: Pos2,
    pub text: String,
}

/// Everything the board needs between frames.
///
/// The UI only talks to the board through these methods; gestures end in a
/// [`Command`] that is executed right away.
#[derive(Debug)]
pub struct EditorState {
    pub(crate) document: Document,
    pub(crate) surface: Surface,
    pub(crate) style: StyleState,
    pub(crate) tool: ToolMode,
    pub(crate) grid_visible: bool,
    pub(crate) shape_drag: Option<Shape>,
    pub(crate) text_draft: Option<TextDraft>,
}

impl EditorState {
    /// Blank white board of the given pixel size
    pub fn new(width: u32, height: u32) -> DrawingResult<Self> {
        Self::with_settings(width, height, &AppSettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: &AppSettings) -> DrawingResult<Self> {
        let settings = settings.clone().sanitized();
        let mut editor = Self {
            document: Document::new(),
            surface: Surface::new(width, height, BACKGROUND)?,
            style: StyleState::new(settings.color32(), settings.brush_size),
            tool: settings.tool,
            grid_visible: settings.grid_visible,
            shape_drag: None,
            text_draft: None,
        };
        if editor.grid_visible {
            editor.draw_grid();
        }
        Ok(editor)
    }

    pub fn settings(&self) -> AppSettings {
        let color = self.style.color();
        AppSettings {
            color: [color.r(), color.g(), color.b()],
            brush_size: self.style.brush_size(),
            tool: self.tool,
            grid_visible: self.grid_visible,
        }
    }

    // ------------------------------------------------------------------
    // Accessors

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    /// Shape currently being dragged out, for preview
    pub fn shape_preview(&self) -> Option<&Shape> {
        self.shape_drag.as_ref()
    }

    /// Gesture of an active stroke-eraser drag, for preview
    pub fn eraser_preview(&self) -> Option<&[Pos2]> {
        match self.tool {
            ToolMode::StrokeEraser => self.document.current().map(MutableStroke::points),
            _ => None,
        }
    }

    pub fn text_draft(&self) -> Option<&TextDraft> {
        self.text_draft.as_ref()
    }

    pub fn text_draft_mut(&mut self) -> Option<&mut TextDraft> {
        self.text_draft.as_mut()
    }

    // ------------------------------------------------------------------
    // Style and tool setters

    /// Pick a drawing color. Like the palette, this switches back to the brush.
    pub fn pick_color(&mut self, color: Color32) {
        self.style.set_color(color);
        self.set_tool(ToolMode::Brush);
    }

    pub fn set_brush_size(&mut self, brush_size: u32) {
        self.style.set_width(brush_size);
    }

    /// Activate `tool`, abandoning any unfinished gesture
    pub fn set_tool(&mut self, tool: ToolMode) {
        if tool == self.tool {
            return;
        }
        self.document.take_current();
        self.shape_drag = None;
        self.text_draft = None;
        debug!("Tool {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
    }

    /// Toolbar semantics: eraser buttons toggle back to the brush
    pub fn press_tool_button(&mut self, tool: ToolMode) {
        self.set_tool(tool.after_button_press(self.tool));
    }

    /// Show or hide the grid. Hiding it rebuilds the board from the store.
    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
        if self.grid_visible {
            self.draw_grid();
        } else {
            self.execute(Command::Repaint);
        }
    }

    fn draw_grid(&mut self) {
        self.surface.draw_grid(GRID_SPACING, GRID_COLOR, GRID_LINE_WIDTH);
    }

    // ------------------------------------------------------------------
    // Board operations

    pub fn execute(&mut self, command: Command) {
        command.execute(self);
    }

    pub fn repaint(&mut self) {
        self.execute(Command::Repaint);
    }

    pub fn clear_canvas(&mut self) {
        self.execute(Command::Clear);
    }

    /// Match the board to a new viewport size, keeping the pixels already drawn
    pub fn resize(&mut self, width: u32, height: u32) -> DrawingResult<()> {
        if self.surface.size() == [width, height] {
            return Ok(());
        }
        info!("Resizing board to {width}x{height}");
        self.surface.resize(width, height)?;
        if self.grid_visible {
            self.draw_grid();
        }
        Ok(())
    }

    pub fn export_png(&self) -> DrawingResult<Vec<u8>> {
        self.surface.encode_png()
    }

    // ------------------------------------------------------------------
    // Pointer handling

    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(*position),
            InputEvent::PointerMove { position } => self.pointer_move(*position),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => self.pointer_up(),
            InputEvent::KeyDown { key: Key::Escape } => self.cancel_text(),
            InputEvent::KeyDown { .. } => {}
        }
    }

    /// Color painted by live drawing, if the tool paints while dragging
    fn live_paint_color(&self) -> Option<Color32> {
        match self.tool {
            ToolMode::Brush => Some(self.style.color()),
            ToolMode::AreaEraser => Some(self.surface.background()),
            _ => None,
        }
    }

    pub fn pointer_down(&mut self, position: Pos2) {
        match self.tool {
            tool if tool.records_stroke() => {
                let width = self.style.width();
                let color = self.live_paint_color().unwrap_or(self.style.color());
                self.document.begin(color, width);
                self.document.extend(position);
                if let Some(color) = self.live_paint_color() {
                    self.surface.draw_dot(position, color, width);
                }
            }
            ToolMode::Shape(kind) => {
                self.shape_drag = Some(Shape::new(kind, position, position));
            }
            ToolMode::Text => {
                self.commit_text();
                self.text_draft = Some(TextDraft {
                    position,
                    text: String::new(),
                });
            }
            _ => {}
        }
    }

    /// Ignored unless a gesture is in progress
    pub fn pointer_move(&mut self, position: Pos2) {
        if let Some(shape) = &mut self.shape_drag {
            shape.end = position;
            return;
        }

        // Live segments keep the style the stroke was started with
        let Some((last, color, width)) = self
            .document
            .current()
            .and_then(|stroke| Some((stroke.last_point()?, stroke.color(), stroke.thickness())))
        else {
            return;
        };
        if last == position || !self.document.extend(position) {
            return;
        }
        if self.live_paint_color().is_some() {
            self.surface.draw_segment(last, position, color, width);
        }
    }

    /// Finish the gesture in progress, if any
    pub fn pointer_up(&mut self) {
        if let Some(command) = self.finish_gesture() {
            self.execute(command);
        }
    }

    fn finish_gesture(&mut self) -> Option<Command> {
        if let Some(shape) = self.shape_drag.take() {
            return Some(Command::DrawShape(shape));
        }
        if !self.document.is_recording() {
            return None;
        }
        Some(match self.tool {
            ToolMode::Brush => Command::CommitStroke,
            ToolMode::StrokeEraser => Command::EraseStrokes {
                threshold: erase_threshold(self.style.width(), ERASE_THRESHOLD_FACTOR),
            },
            _ => Command::DiscardStroke,
        })
    }

    // ------------------------------------------------------------------
    // Text

    /// Place the pending text on the board. Empty drafts are dropped.
    pub fn commit_text(&mut self) {
        if let Some(TextDraft { position, text }) = self.text_draft.take() {
            self.execute(Command::PlaceText { position, text });
        }
    }

    pub fn cancel_text(&mut self) {
        if self.text_draft.take().is_some() {
            debug!("Text entry cancelled");
        }
    }
}

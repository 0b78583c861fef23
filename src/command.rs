use egui::Pos2;
use log::{debug, info, warn};

use crate::config::{FONT_SIZE_PER_WIDTH, MIN_FONT_SIZE};
use crate::geometry::Shape;
use crate::renderer::Renderer;
use crate::state::EditorState;

/// Mutations produced by finished gestures and toolbar buttons
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move the recorded brush stroke into the store
    CommitStroke,
    /// Drop the recorded stroke; its pixels are already on the board
    DiscardStroke,
    /// Use the recorded stroke as an erase query, then repaint
    EraseStrokes { threshold: f32 },
    /// Rasterize a finished shape
    DrawShape(Shape),
    /// Rasterize confirmed text
    PlaceText { position: Pos2, text: String },
    /// Rebuild the board from the store
    Repaint,
    /// Empty the store and the board
    Clear,
}

impl Command {
    pub fn execute(self, editor: &mut EditorState) {
        match self {
            Command::CommitStroke => {
                if let Some(stroke) = editor.document.commit() {
                    debug!(
                        "Committed stroke with {} points, {:?} at width {}",
                        stroke.len(),
                        stroke.color(),
                        stroke.thickness()
                    );
                }
            }
            Command::DiscardStroke => {
                editor.document.take_current();
            }
            Command::EraseStrokes { threshold } => {
                let Some(query) = editor.document.take_current() else {
                    return;
                };
                let removed = editor.document.remove_intersecting(query.points(), threshold);
                if removed > 0 {
                    info!("Stroke eraser removed {removed} strokes");
                }
                Command::Repaint.execute(editor);
            }
            Command::DrawShape(shape) => {
                let (color, width) = (editor.style.color(), editor.style.width());
                editor.surface.draw_shape(&shape, color, width);
            }
            Command::PlaceText { position, text } => {
                if text.trim().is_empty() {
                    return;
                }
                let size = (editor.style.width() * FONT_SIZE_PER_WIDTH).max(MIN_FONT_SIZE);
                if let Err(err) = editor
                    .surface
                    .draw_text(&text, position, editor.style.color(), size)
                {
                    warn!("Could not place text: {err}");
                }
            }
            Command::Repaint => {
                Renderer::repaint(
                    &mut editor.surface,
                    &editor.document,
                    &editor.style,
                    editor.grid_visible,
                );
            }
            Command::Clear => {
                editor.document.clear();
                editor.shape_drag = None;
                editor.text_draft = None;
                Command::Repaint.execute(editor);
                info!("Board cleared");
            }
        }
    }
}

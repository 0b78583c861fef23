use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke, TextureHandle, TextureOptions};
use log::{debug, trace};

use crate::config::{GRID_COLOR, GRID_LINE_WIDTH, GRID_SPACING};
use crate::document::Document;
use crate::geometry::{Shape, ShapeKind};
use crate::state::StyleState;
use crate::surface::Surface;

/// Translucent color for the stroke-eraser gesture preview
const ERASER_PREVIEW: Color32 = Color32::from_rgba_premultiplied(60, 60, 60, 60);

/// Rebuilds the raster from the stroke store and shows it on screen.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_version: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear `surface` and replay every committed stroke in order.
    ///
    /// Strokes are drawn with the *current* style, not the style they were
    /// recorded with. The grid goes on top when visible. Running this twice
    /// without touching the document produces identical pixels.
    pub fn repaint(
        surface: &mut Surface,
        document: &Document,
        style: &StyleState,
        grid_visible: bool,
    ) {
        surface.clear();
        for stroke in document.strokes() {
            surface.draw_polyline(stroke.points(), style.color(), style.width());
        }
        if grid_visible {
            surface.draw_grid(GRID_SPACING, GRID_COLOR, GRID_LINE_WIDTH);
        }
        debug!("Repainted {} strokes", document.len());
    }

    /// Upload the surface if it changed since the last frame and draw it into `rect`
    pub fn show(&mut self, ctx: &egui::Context, painter: &Painter, rect: Rect, surface: &Surface) {
        if self.uploaded_version != Some(surface.version()) {
            let image = surface.to_color_image();
            if let Some(texture) = &mut self.texture {
                texture.set(image, TextureOptions::NEAREST);
            } else {
                self.texture =
                    Some(ctx.load_texture("drawing_board", image, TextureOptions::NEAREST));
            }
            trace!("Uploaded surface version {}", surface.version());
            self.uploaded_version = Some(surface.version());
        }

        if let Some(texture) = &self.texture {
            let size = egui::vec2(surface.width() as f32, surface.height() as f32);
            painter.image(
                texture.id(),
                Rect::from_min_size(rect.min, size),
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }

    /// Outline of a shape being dragged; board coordinates offset by `origin`
    pub fn paint_shape_preview(
        painter: &Painter,
        origin: Pos2,
        shape: &Shape,
        color: Color32,
        width: f32,
    ) {
        if shape.is_degenerate() {
            return;
        }
        let offset = origin.to_vec2();
        let stroke = EguiStroke::new(width, color);
        let (start, end) = (shape.start + offset, shape.end + offset);

        match shape.kind {
            ShapeKind::Line => {
                painter.line_segment([start, end], stroke);
            }
            ShapeKind::Rectangle => {
                painter.rect_stroke(shape.rect().translate(offset), 0.0, stroke);
            }
            ShapeKind::Circle => {
                painter.circle_stroke(start, shape.radius(), stroke);
            }
            ShapeKind::Arrow => {
                let [left, right] = shape.arrow_head(width);
                painter.line_segment([start, end], stroke);
                painter.line_segment([left + offset, end], stroke);
                painter.line_segment([right + offset, end], stroke);
            }
        }
    }

    /// Trail of an in-progress stroke-eraser gesture
    pub fn paint_eraser_preview(painter: &Painter, origin: Pos2, points: &[Pos2], width: f32) {
        let offset = origin.to_vec2();
        let points: Vec<Pos2> = points.iter().map(|p| *p + offset).collect();
        match points.as_slice() {
            [] => {}
            [only] => {
                painter.circle_filled(*only, width / 2.0, ERASER_PREVIEW);
            }
            _ => {
                painter.add(egui::Shape::line(points, EguiStroke::new(width, ERASER_PREVIEW)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_repaint_uses_current_style() {
        let mut doc = Document::new();
        doc.begin(Color32::RED, 2.0);
        doc.extend(pos2(10.0, 20.0));
        doc.extend(pos2(50.0, 20.0));
        doc.commit();

        let mut surface = Surface::new(64, 40, Color32::WHITE).unwrap();
        let mut style = StyleState::default();
        style.set_color(Color32::BLUE);
        style.set_width(6);

        Renderer::repaint(&mut surface, &doc, &style, false);
        assert_eq!(surface.pixel(30, 20), Some(Color32::BLUE));
        // Wider than the recorded 2px
        assert_eq!(surface.pixel(30, 22), Some(Color32::BLUE));
    }

    #[test]
    fn test_repaint_draws_grid_last() {
        let mut doc = Document::new();
        doc.begin(Color32::BLACK, 5.0);
        doc.extend(pos2(0.0, 20.5));
        doc.extend(pos2(63.0, 20.5));
        doc.commit();

        let mut surface = Surface::new(64, 40, Color32::WHITE).unwrap();
        let style = StyleState::default();
        Renderer::repaint(&mut surface, &doc, &style, true);
        assert_eq!(surface.pixel(GRID_SPACING as u32, 20), Some(GRID_COLOR));
        assert_eq!(surface.pixel(GRID_SPACING as u32, 30), Some(GRID_COLOR));

        Renderer::repaint(&mut surface, &doc, &style, false);
        assert_eq!(surface.pixel(GRID_SPACING as u32, 30), Some(Color32::WHITE));
    }
}

use ab_glyph::{Font, FontRef, PxScale, ScaleFont, point};
use egui::Pos2;

use crate::error::{DrawingError, DrawingResult};

/// egui's bundled proportional face, so board text matches the UI
pub(crate) fn default_font() -> DrawingResult<FontRef<'static>> {
    FontRef::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT)
        .map_err(|err| DrawingError::Font(err.to_string()))
}

/// Lay out `text` with its top-left corner at `origin` and report glyph
/// coverage for every touched pixel as `(x, y, coverage)`.
pub(crate) fn rasterize<F: Font>(
    font: &F,
    text: &str,
    origin: Pos2,
    size: f32,
    mut plot: impl FnMut(i32, i32, f32),
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let line_height = scaled.height() + scaled.line_gap();

    let mut caret = point(origin.x, origin.y + scaled.ascent());
    let mut previous = None;

    for c in text.chars() {
        if c == '\n' {
            caret.x = origin.x;
            caret.y += line_height;
            previous = None;
            continue;
        }
        if c.is_control() {
            continue;
        }

        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret.x += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, caret);
        caret.x += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
            outlined.draw(|x, y, coverage| plot(left + x as i32, top + y as i32, coverage));
        }
    }
}

//! CPU raster surface that backs the visible board.
//!
//! The pixmap is what the user sees and what gets exported. Live tools paint
//! straight into it; a full repaint rebuilds it from the stroke store.

use egui::{Color32, ColorImage, Pos2};
use log::warn;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8,
    Rect, Stroke as SkiaStroke, Transform,
};

use crate::error::{DrawingError, DrawingResult};
use crate::geometry::{Shape, ShapeKind};

mod text;

pub struct Surface {
    pixmap: Pixmap,
    background: Color32,
    /// Bumped on every pixel change so the UI knows when to re-upload
    version: u64,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("background", &self.background)
            .field("version", &self.version)
            .finish()
    }
}

fn allocate(width: u32, height: u32) -> DrawingResult<Pixmap> {
    Pixmap::new(width, height).ok_or(DrawingError::InvalidSurfaceSize { width, height })
}

fn paint_for(color: Color32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r(), color.g(), color.b(), color.a());
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f32) -> SkiaStroke {
    SkiaStroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

fn skia_color(color: Color32) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r(), color.g(), color.b(), color.a())
}

impl Surface {
    /// Allocate a surface filled with `background`
    pub fn new(width: u32, height: u32, background: Color32) -> DrawingResult<Self> {
        let mut surface = Self {
            pixmap: allocate(width, height)?,
            background,
            version: 0,
        };
        surface.clear();
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Fill everything with the background color
    pub fn clear(&mut self) {
        self.pixmap.fill(skia_color(self.background));
        self.touch();
    }

    /// Reallocate at a new size, keeping existing pixels anchored top-left.
    ///
    /// Newly exposed area is background; pixels outside the new bounds are lost.
    pub fn resize(&mut self, width: u32, height: u32) -> DrawingResult<()> {
        if self.size() == [width, height] {
            return Ok(());
        }

        let mut resized = allocate(width, height)?;
        resized.fill(skia_color(self.background));
        resized.draw_pixmap(
            0,
            0,
            self.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        self.pixmap = resized;
        self.touch();
        Ok(())
    }

    /// Round dot of diameter `width`
    pub fn draw_dot(&mut self, center: Pos2, color: Color32, width: f32) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, (width / 2.0).max(0.5)) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        self.touch();
    }

    /// Round-capped segment, as painted while dragging
    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        if from == to {
            self.draw_dot(to, color, width);
            return;
        }
        self.draw_polyline(&[from, to], color, width);
    }

    /// Connected round-joined polyline. A single point renders as a dot.
    pub fn draw_polyline(&mut self, points: &[Pos2], color: Color32, width: f32) {
        let (first, rest) = match points {
            [] => return,
            [only] => {
                self.draw_dot(*only, color, width);
                return;
            }
            [first, rest @ ..] => (first, rest),
        };

        if rest.iter().all(|p| p == first) {
            self.draw_dot(*first, color, width);
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint_for(color),
                &round_stroke(width),
                Transform::identity(),
                None,
            );
            self.touch();
        }
    }

    /// Outline a finished shape. Degenerate shapes are skipped.
    pub fn draw_shape(&mut self, shape: &Shape, color: Color32, width: f32) {
        if shape.is_degenerate() {
            return;
        }

        let path = match shape.kind {
            ShapeKind::Line => {
                let mut pb = PathBuilder::new();
                pb.move_to(shape.start.x, shape.start.y);
                pb.line_to(shape.end.x, shape.end.y);
                pb.finish()
            }
            ShapeKind::Rectangle => {
                let r = shape.rect();
                Rect::from_ltrb(r.min.x, r.min.y, r.max.x, r.max.y).map(PathBuilder::from_rect)
            }
            ShapeKind::Circle => {
                PathBuilder::from_circle(shape.start.x, shape.start.y, shape.radius())
            }
            ShapeKind::Arrow => {
                let [left, right] = shape.arrow_head(width);
                let mut pb = PathBuilder::new();
                pb.move_to(shape.start.x, shape.start.y);
                pb.line_to(shape.end.x, shape.end.y);
                pb.move_to(left.x, left.y);
                pb.line_to(shape.end.x, shape.end.y);
                pb.line_to(right.x, right.y);
                pb.finish()
            }
        };

        if let Some(path) = path {
            self.pixmap.stroke_path(
                &path,
                &paint_for(color),
                &round_stroke(width),
                Transform::identity(),
                None,
            );
            self.touch();
        }
    }

    /// Axis-aligned grid of hairlines every `spacing` pixels
    pub fn draw_grid(&mut self, spacing: f32, color: Color32, line_width: f32) {
        if spacing <= 0.0 {
            return;
        }

        let mut paint = paint_for(color);
        paint.anti_alias = false;
        let (w, h) = (self.width() as f32, self.height() as f32);

        let mut x = spacing;
        while x < w {
            if let Some(rect) = Rect::from_xywh(x, 0.0, line_width, h) {
                self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
            x += spacing;
        }
        let mut y = spacing;
        while y < h {
            if let Some(rect) = Rect::from_xywh(0.0, y, w, line_width) {
                self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
            y += spacing;
        }
        self.touch();
    }

    /// Render `text` with its top-left corner at `origin`
    pub fn draw_text(
        &mut self,
        text: &str,
        origin: Pos2,
        color: Color32,
        size: f32,
    ) -> DrawingResult<()> {
        let font = text::default_font()?;
        let (w, h) = (self.width() as i32, self.height() as i32);
        let pixels = self.pixmap.pixels_mut();

        text::rasterize(&font, text, origin, size, |x, y, coverage| {
            if x < 0 || y < 0 || x >= w || y >= h || coverage <= 0.0 {
                return;
            }
            let idx = (y * w + x) as usize;
            pixels[idx] = blend_over(pixels[idx], color, coverage.min(1.0));
        });
        self.touch();
        Ok(())
    }

    /// Straight-alpha pixel, for inspection
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color32::from_rgba_unmultiplied(
            c.red(),
            c.green(),
            c.blue(),
            c.alpha(),
        ))
    }

    /// Raw premultiplied RGBA bytes
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha RGBA bytes, row major
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Snapshot for upload as an egui texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_premultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixmap.data(),
        )
    }

    /// Encode the whole surface as PNG
    pub fn encode_png(&self) -> DrawingResult<Vec<u8>> {
        let image = image::RgbaImage::from_raw(self.width(), self.height(), self.to_rgba())
            .ok_or_else(|| {
                DrawingError::Export("pixel buffer does not match surface size".into())
            })?;

        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}

fn blend_over(dst: PremultipliedColorU8, color: Color32, coverage: f32) -> PremultipliedColorU8 {
    let src_alpha = coverage * color.a() as f32 / 255.0;
    let mix = |src: u8, dst: u8| -> u8 {
        (src as f32 * src_alpha + dst as f32 * (1.0 - src_alpha)).round() as u8
    };
    let alpha = (255.0 * src_alpha + dst.alpha() as f32 * (1.0 - src_alpha)).round() as u8;

    // `color` is opaque or premultiplied, so its channels already carry alpha
    PremultipliedColorU8::from_rgba(
        mix(color.r(), dst.red()),
        mix(color.g(), dst.green()),
        mix(color.b(), dst.blue()),
        alpha,
    )
    .unwrap_or_else(|| {
        warn!("Dropped out-of-range text pixel");
        dst
    })
}

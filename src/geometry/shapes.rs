use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Half-angle between the arrow shaft and each head stroke
const ARROW_HEAD_ANGLE: f32 = std::f32::consts::PI / 6.0;
const MIN_ARROW_HEAD: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Arrow,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Arrow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Arrow => "Arrow",
        }
    }
}

/// A shape defined by the drag that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub start: Pos2,
    pub end: Pos2,
}

impl Shape {
    pub fn new(kind: ShapeKind, start: Pos2, end: Pos2) -> Self {
        Self { kind, start, end }
    }

    /// A drag that never left its starting point produces nothing
    pub fn is_degenerate(&self) -> bool {
        match self.kind {
            ShapeKind::Rectangle => {
                let rect = self.rect();
                rect.width() <= 0.0 || rect.height() <= 0.0
            }
            _ => self.start == self.end,
        }
    }

    /// Rectangle spanned by the drag corners
    pub fn rect(&self) -> Rect {
        Rect::from_two_pos(self.start, self.end)
    }

    /// Circle radius: the drag starts at the center
    pub fn radius(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// End points of the two head strokes of an arrow
    ///
    /// Head length grows with the stroke width so thick arrows stay readable.
    pub fn arrow_head(&self, width: f32) -> [Pos2; 2] {
        let head_len = (width * 3.0).max(MIN_ARROW_HEAD);
        let shaft = self.end - self.start;
        let angle = shaft.y.atan2(shaft.x);

        let wing = |offset: f32| {
            let a = angle + std::f32::consts::PI + offset;
            self.end + Vec2::angled(a) * head_len
        };
        [wing(-ARROW_HEAD_ANGLE), wing(ARROW_HEAD_ANGLE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_degenerate_shapes() {
        let p = pos2(5.0, 5.0);
        for kind in ShapeKind::ALL {
            assert!(Shape::new(kind, p, p).is_degenerate(), "{}", kind.name());
        }
        // A flat rectangle has no area even though the points differ
        assert!(Shape::new(ShapeKind::Rectangle, p, pos2(50.0, 5.0)).is_degenerate());
        assert!(!Shape::new(ShapeKind::Line, p, pos2(50.0, 5.0)).is_degenerate());
    }

    #[test]
    fn test_rect_is_normalized() {
        let shape = Shape::new(ShapeKind::Rectangle, pos2(40.0, 30.0), pos2(10.0, 5.0));
        let rect = shape.rect();
        assert_eq!(rect.min, pos2(10.0, 5.0));
        assert_eq!(rect.max, pos2(40.0, 30.0));
    }

    #[test]
    fn test_arrow_head_points_back_along_shaft() {
        let shape = Shape::new(ShapeKind::Arrow, pos2(0.0, 0.0), pos2(100.0, 0.0));
        let [left, right] = shape.arrow_head(2.0);

        // Both wings sit behind the tip, mirrored across the shaft
        assert!(left.x < 100.0 && right.x < 100.0);
        assert!((left.y + right.y).abs() < 1e-3);
        assert!((left.distance(shape.end) - MIN_ARROW_HEAD).abs() < 1e-3);

        let [thick, _] = shape.arrow_head(10.0);
        assert!((thick.distance(shape.end) - 30.0).abs() < 1e-3);
    }
}

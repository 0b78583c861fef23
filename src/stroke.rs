use egui::{Color32, Pos2};

// Committed stroke, owned by the document
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

// Stroke still being recorded
#[derive(Clone, Debug)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn new(color: Color32, thickness: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Color that was active while the stroke was recorded
    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Width that was active while the stroke was recorded
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl MutableStroke {
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn last_point(&self) -> Option<Pos2> {
        self.points.last().copied()
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Freeze into a committed stroke. Empty strokes yield `None`.
    pub fn into_stroke(self) -> Option<Stroke> {
        if self.points.is_empty() {
            return None;
        }
        Some(Stroke::new(self.color, self.thickness, self.points))
    }
}

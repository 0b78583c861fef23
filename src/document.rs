use egui::{Color32, Pos2};
use log::debug;

use crate::geometry::strokes_intersect;
use crate::stroke::{MutableStroke, Stroke};

/// Ordered collection of committed strokes plus the stroke being recorded.
///
/// Insertion order is z-order: the renderer replays `strokes()` front to back,
/// so the most recently committed stroke ends up on top.
#[derive(Debug, Default, Clone)]
pub struct Document {
    strokes: Vec<Stroke>,
    current: Option<MutableStroke>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording a new stroke, replacing any unfinished one.
    pub fn begin(&mut self, color: Color32, thickness: f32) {
        self.current = Some(MutableStroke::new(color, thickness));
    }

    /// Append a point to the stroke being recorded.
    ///
    /// Returns false (and does nothing) when no stroke is in progress.
    pub fn extend(&mut self, point: Pos2) -> bool {
        match &mut self.current {
            Some(stroke) => {
                stroke.add_point(point);
                true
            }
            None => false,
        }
    }

    /// Move the current stroke to the end of the committed list.
    ///
    /// Empty strokes are dropped. Returns the committed stroke.
    pub fn commit(&mut self) -> Option<&Stroke> {
        let stroke = self.current.take()?.into_stroke()?;
        self.strokes.push(stroke);
        self.strokes.last()
    }

    /// Stop recording and hand the current stroke back without committing it.
    pub fn take_current(&mut self) -> Option<MutableStroke> {
        self.current.take()
    }

    /// Remove every committed stroke that comes within `threshold` of `query`.
    ///
    /// Survivors keep their relative order. Returns how many were removed.
    pub fn remove_intersecting(&mut self, query: &[Pos2], threshold: f32) -> usize {
        let before = self.strokes.len();
        self.strokes
            .retain(|stroke| !strokes_intersect(query, stroke.points(), threshold));
        let removed = before - self.strokes.len();
        debug!(
            "Erase query of {} points removed {} of {} strokes",
            query.len(),
            removed,
            before
        );
        removed
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current = None;
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn current(&self) -> Option<&MutableStroke> {
        self.current.as_ref()
    }

    pub fn is_recording(&self) -> bool {
        self.current.is_some()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn commit_stroke(doc: &mut Document, points: &[Pos2]) {
        doc.begin(Color32::BLACK, 5.0);
        for p in points {
            doc.extend(*p);
        }
        doc.commit();
    }

    #[test]
    fn test_extend_without_begin_is_noop() {
        let mut doc = Document::new();
        assert!(!doc.extend(pos2(1.0, 1.0)));
        assert!(doc.current().is_none());
        assert!(doc.commit().is_none());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_current_not_committed_until_commit() {
        let mut doc = Document::new();
        doc.begin(Color32::RED, 3.0);
        doc.extend(pos2(1.0, 2.0));
        assert!(doc.is_recording());
        assert!(doc.is_empty());

        let committed = doc.commit().cloned();
        assert_eq!(committed.map(|s| s.points().to_vec()), Some(vec![pos2(1.0, 2.0)]));
        assert!(!doc.is_recording());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_empty_stroke_is_rejected() {
        let mut doc = Document::new();
        doc.begin(Color32::RED, 3.0);
        assert!(doc.commit().is_none());
        assert!(doc.is_empty());
        assert!(!doc.is_recording());
    }

    #[test]
    fn test_commit_appends_on_top() {
        let mut doc = Document::new();
        commit_stroke(&mut doc, &[pos2(0.0, 0.0)]);
        commit_stroke(&mut doc, &[pos2(9.0, 9.0)]);
        assert_eq!(doc.strokes()[1].points(), &[pos2(9.0, 9.0)]);
    }

    #[test]
    fn test_remove_keeps_survivor_order() {
        let mut doc = Document::new();
        commit_stroke(&mut doc, &[pos2(0.0, 0.0)]);
        commit_stroke(&mut doc, &[pos2(100.0, 0.0)]);
        commit_stroke(&mut doc, &[pos2(200.0, 0.0)]);
        commit_stroke(&mut doc, &[pos2(100.0, 3.0)]);

        let removed = doc.remove_intersecting(&[pos2(100.0, 1.0)], 5.0);
        assert_eq!(removed, 2);
        let remaining: Vec<_> = doc.strokes().iter().map(|s| s.points()[0]).collect();
        assert_eq!(remaining, vec![pos2(0.0, 0.0), pos2(200.0, 0.0)]);
    }

    #[test]
    fn test_take_current_discards() {
        let mut doc = Document::new();
        doc.begin(Color32::RED, 3.0);
        doc.extend(pos2(4.0, 4.0));
        let taken = doc.take_current();
        assert_eq!(taken.map(|s| s.points().len()), Some(1));
        assert!(doc.is_empty());
        assert!(!doc.is_recording());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut doc = Document::new();
        commit_stroke(&mut doc, &[pos2(0.0, 0.0), pos2(1.0, 1.0)]);
        doc.begin(Color32::RED, 3.0);
        doc.extend(pos2(4.0, 4.0));
        doc.clear();
        assert!(doc.is_empty());
        assert!(!doc.is_recording());
    }
}

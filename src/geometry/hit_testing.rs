use egui::Pos2;

/// Returns true when some point of `a` lies strictly closer than `threshold`
/// to some point of `b`.
///
/// Plain all-pairs scan over both point lists. Strokes are interactive length
/// (tens to a few hundred points), so no spatial index is used. Comparison is
/// done on squared distances; the inequality stays strict so points exactly
/// `threshold` apart do not count.
pub fn strokes_intersect(a: &[Pos2], b: &[Pos2], threshold: f32) -> bool {
    if a.is_empty() || b.is_empty() || threshold <= 0.0 {
        return false;
    }

    let threshold_sq = threshold * threshold;
    a.iter()
        .any(|p| b.iter().any(|q| p.distance_sq(*q) < threshold_sq))
}

/// Distance below which an erase gesture catches a stroke
pub fn erase_threshold(brush_width: f32, factor: f32) -> f32 {
    brush_width * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_exact_threshold_does_not_match() {
        let stored = [pos2(10.0, 10.0), pos2(20.0, 10.0)];
        let query = [pos2(15.0, 10.0)];
        assert!(!strokes_intersect(&query, &stored, 5.0));
        assert!(strokes_intersect(&query, &stored, 5.01));
    }

    #[test]
    fn test_stroke_intersects_itself() {
        let stroke = [pos2(3.0, 4.0), pos2(30.0, 40.0), pos2(-2.0, 8.0)];
        assert!(strokes_intersect(&stroke, &stroke, 0.5));

        let dot = [pos2(100.0, 100.0)];
        assert!(strokes_intersect(&dot, &dot, f32::MIN_POSITIVE));
    }

    #[test]
    fn test_empty_never_intersects() {
        let stroke = [pos2(0.0, 0.0)];
        assert!(!strokes_intersect(&[], &stroke, 100.0));
        assert!(!strokes_intersect(&stroke, &[], 100.0));
        assert!(!strokes_intersect(&[], &[], 100.0));
    }

    #[test]
    fn test_far_apart_strokes() {
        let a = [pos2(0.0, 0.0), pos2(50.0, 50.0), pos2(100.0, 0.0)];
        let b: Vec<_> = a.iter().map(|p| pos2(p.x + 1000.0, p.y)).collect();
        for threshold in [1.0, 10.0, 50.0, 100.0] {
            assert!(!strokes_intersect(&a, &b, threshold));
        }
    }

    #[test]
    fn test_crossing_is_found_anywhere_in_stroke() {
        // Self-crossing loop whose only near point is the last one
        let a = [
            pos2(0.0, 0.0),
            pos2(40.0, 40.0),
            pos2(0.0, 40.0),
            pos2(40.0, 0.0),
            pos2(200.0, 200.0),
        ];
        let b = [pos2(500.0, 500.0), pos2(203.0, 201.0)];
        assert!(strokes_intersect(&a, &b, 4.0));
        assert!(!strokes_intersect(&a, &b, 3.0));
    }

    #[test]
    fn test_erase_threshold_scales_with_width() {
        assert_eq!(erase_threshold(5.0, 2.0), 10.0);
        assert_eq!(erase_threshold(1.0, 2.0), 2.0);
    }
}

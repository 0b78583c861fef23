use drawing_board::Document;
use drawing_board::geometry::strokes_intersect;
use egui::{Color32, Pos2, pos2};

fn record(doc: &mut Document, points: &[Pos2]) {
    doc.begin(Color32::BLACK, 5.0);
    for p in points {
        doc.extend(*p);
    }
    doc.commit();
}

#[test]
fn test_begin_extend_commit_scenario() {
    let mut doc = Document::new();
    doc.begin(Color32::BLACK, 5.0);
    doc.extend(pos2(10.0, 10.0));
    doc.extend(pos2(20.0, 10.0));
    doc.commit();

    assert_eq!(doc.len(), 1);
    assert_eq!(doc.strokes()[0].points(), &[pos2(10.0, 10.0), pos2(20.0, 10.0)]);

    // (15,10) is exactly 5 away from both points: the threshold is strict
    let query = [pos2(15.0, 10.0)];
    assert!(!strokes_intersect(&query, doc.strokes()[0].points(), 5.0));
    assert_eq!(doc.remove_intersecting(&query, 5.0), 0);
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_clear_then_commit_adds_nothing() {
    let mut doc = Document::new();
    record(&mut doc, &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    doc.clear();
    assert!(doc.commit().is_none());
    assert!(doc.is_empty());
}

#[test]
fn test_remove_never_touches_distant_strokes() {
    let mut doc = Document::new();
    let strokes: Vec<Vec<Pos2>> = (0..10)
        .map(|i| {
            let y = i as f32 * 50.0;
            (0..20).map(|x| pos2(x as f32 * 10.0, y)).collect()
        })
        .collect();
    for s in &strokes {
        record(&mut doc, s);
    }

    // Horizontal gesture along y = 200 hits only stroke 4
    let query: Vec<Pos2> = (0..5).map(|x| pos2(x as f32 * 7.0, 201.0)).collect();
    let threshold = 10.0;
    let expected_survivors: Vec<&[Pos2]> = strokes
        .iter()
        .map(Vec::as_slice)
        .filter(|s| !strokes_intersect(&query, s, threshold))
        .collect();

    let removed = doc.remove_intersecting(&query, threshold);
    assert_eq!(removed, 1);

    let survivors: Vec<&[Pos2]> = doc.strokes().iter().map(|s| s.points()).collect();
    assert_eq!(survivors, expected_survivors);
}

#[test]
fn test_disjoint_strokes_far_apart() {
    let a = [pos2(0.0, 0.0), pos2(10.0, 10.0), pos2(20.0, 0.0)];
    let b = [pos2(1000.0, 0.0), pos2(1010.0, 10.0), pos2(1020.0, 0.0)];
    for threshold in [0.5, 25.0, 100.0] {
        assert!(!strokes_intersect(&a, &b, threshold));
        assert!(!strokes_intersect(&b, &a, threshold));
    }
}

#[test]
fn test_recorded_style_is_kept_on_stroke() {
    let mut doc = Document::new();
    doc.begin(Color32::RED, 12.0);
    doc.extend(pos2(0.0, 0.0));
    let stroke = doc.commit().cloned().unwrap();
    assert_eq!(stroke.color(), Color32::RED);
    assert_eq!(stroke.thickness(), 12.0);
}

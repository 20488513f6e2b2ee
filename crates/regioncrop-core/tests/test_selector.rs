use regioncrop_core::geometry::{DisplayRect, Point};
use regioncrop_core::selection::{CropMode, OverlayShape, RegionSelector, Selection};

fn drag(s: &mut RegionSelector, from: (f64, f64), to: (f64, f64)) -> Option<DisplayRect> {
    s.pointer_down(Point::new(from.0, from.1));
    s.pointer_move(Point::new(to.0, to.1));
    s.pointer_up(Point::new(to.0, to.1))
}

#[test]
fn test_rect_normalized_for_reverse_drag() {
    let mut s = RegionSelector::new(CropMode::Rectangle);
    let rect = drag(&mut s, (50.0, 80.0), (10.0, 20.0)).unwrap();
    assert_eq!(
        rect,
        DisplayRect {
            x: 10.0,
            y: 20.0,
            width: 40.0,
            height: 60.0
        }
    );
}

#[test]
fn test_rect_same_for_every_drag_direction() {
    let corners = [
        ((10.0, 20.0), (50.0, 80.0)),
        ((50.0, 80.0), (10.0, 20.0)),
        ((10.0, 80.0), (50.0, 20.0)),
        ((50.0, 20.0), (10.0, 80.0)),
    ];
    for (from, to) in corners {
        let mut s = RegionSelector::new(CropMode::Rectangle);
        let rect = drag(&mut s, from, to).unwrap();
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (10.0, 20.0, 40.0, 60.0));
    }
}

#[test]
fn test_move_redraws_single_rect() {
    let mut s = RegionSelector::new(CropMode::Rectangle);
    s.pointer_down(Point::new(0.0, 0.0));
    s.pointer_move(Point::new(5.0, 5.0));
    s.pointer_move(Point::new(8.0, 3.0));
    assert!(s.is_dragging());
    assert_eq!(
        s.overlay(),
        &[OverlayShape::Rect(DisplayRect {
            x: 0.0,
            y: 0.0,
            width: 8.0,
            height: 3.0
        })]
    );
    // Not committed until release.
    assert!(s.selection().is_none());
}

#[test]
fn test_release_outside_surface_still_commits() {
    let mut s = RegionSelector::new(CropMode::Rectangle);
    let rect = drag(&mut s, (90.0, 90.0), (150.0, -10.0)).unwrap();
    assert!(!s.is_dragging());
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (90.0, -10.0, 60.0, 100.0));
    assert_eq!(s.selection(), Some(Selection::Rectangle(rect)));
}

#[test]
fn test_zero_area_rect_is_committed() {
    let mut s = RegionSelector::new(CropMode::Rectangle);
    s.pointer_down(Point::new(7.0, 7.0));
    let rect = s.pointer_up(Point::new(7.0, 7.0)).unwrap();
    assert!(rect.is_empty());
    assert_eq!(s.selection(), Some(Selection::Rectangle(rect)));
}

#[test]
fn test_new_drag_replaces_committed_rect() {
    let mut s = RegionSelector::new(CropMode::Rectangle);
    drag(&mut s, (0.0, 0.0), (10.0, 10.0));
    let second = drag(&mut s, (20.0, 20.0), (30.0, 25.0)).unwrap();
    assert_eq!(s.selection(), Some(Selection::Rectangle(second)));
    assert_eq!(s.overlay().len(), 1);
}

#[test]
fn test_single_polygon_point_draws_nothing() {
    let mut s = RegionSelector::new(CropMode::Polygon);
    s.pointer_down(Point::new(3.0, 4.0));
    assert!(s.overlay().is_empty());
    assert_eq!(
        s.selection(),
        Some(Selection::Polygon(vec![Point::new(3.0, 4.0)]))
    );
}

#[test]
fn test_polygon_draws_closed_path_from_two_points() {
    let mut s = RegionSelector::new(CropMode::Polygon);
    let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
    s.pointer_down(pts[0]);
    s.pointer_down(pts[1]);
    assert_eq!(s.overlay(), &[OverlayShape::ClosedPath(pts[..2].to_vec())]);
    s.pointer_down(pts[2]);
    assert_eq!(s.overlay(), &[OverlayShape::ClosedPath(pts.to_vec())]);
}

#[test]
fn test_mode_switch_clears_points_and_overlay() {
    let mut s = RegionSelector::new(CropMode::Polygon);
    s.pointer_down(Point::new(0.0, 0.0));
    s.pointer_down(Point::new(5.0, 5.0));
    assert!(!s.overlay().is_empty());

    s.set_mode(CropMode::Rectangle);
    assert!(s.points().is_empty());
    assert!(s.overlay().is_empty());
    assert!(s.selection().is_none());

    s.set_mode(CropMode::Polygon);
    assert!(s.points().is_empty());
    assert!(s.selection().is_none());
}

#[test]
fn test_mode_switch_mid_drag_cancels_drag() {
    let mut s = RegionSelector::new(CropMode::Rectangle);
    s.pointer_down(Point::new(0.0, 0.0));
    s.pointer_move(Point::new(4.0, 4.0));
    s.set_mode(CropMode::Rectangle);
    assert!(!s.is_dragging());
    assert!(s.overlay().is_empty());
    assert!(s.pointer_up(Point::new(9.0, 9.0)).is_none());
}

#[test]
fn test_empty_polygon_has_no_selection() {
    let s = RegionSelector::new(CropMode::Polygon);
    assert!(s.selection().is_none());
}

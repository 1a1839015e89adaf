use super::*;

#[test]
fn box_constructor_clamps_negative_and_non_finite_extents() {
    let b = BoxPx::new(f64::NAN, 4.0, -10.0, f64::INFINITY);
    assert_eq!(b, BoxPx::new(0.0, 4.0, 0.0, 0.0));
    assert!(b.is_empty());
}

#[test]
fn union_covers_both_boxes() {
    let a = BoxPx::new(10.0, 10.0, 20.0, 20.0);
    let b = BoxPx::new(50.0, 0.0, 10.0, 5.0);
    let u = a.union(b);
    assert_eq!(u, BoxPx::new(10.0, 0.0, 50.0, 30.0));
    assert!(u.contains_box(a, 0.0));
    assert!(u.contains_box(b, 0.0));
}

#[test]
fn contains_box_respects_tolerance() {
    let outer = BoxPx::new(20.0, 20.0, 1000.0, 1000.0);
    assert!(outer.contains_box(BoxPx::new(19.8, 20.0, 10.0, 10.0), 0.5));
    assert!(!outer.contains_box(BoxPx::new(0.0, 0.0, 400.0, 400.0), 0.5));
}

#[test]
fn edges_along_and_set_along_are_symmetric() {
    let mut e = Edges::default();
    e.set_along(Axis::Vertical, 3.0, 4.0);
    e.set_along(Axis::Horizontal, 1.0, 2.0);
    assert_eq!(e.along(Axis::Horizontal), (1.0, 2.0));
    assert_eq!(e.along(Axis::Vertical), (3.0, 4.0));
    assert_eq!(e.horizontal(), 3.0);
    assert_eq!(e.vertical(), 7.0);
}

#[test]
fn sanitize_target_clamps_degenerate_sizes() {
    assert_eq!(
        sanitize_target(Size::new(0.0, f64::NAN)),
        Size::new(1.0, 1.0)
    );
    assert_eq!(
        sanitize_target(Size::new(1080.0, 1920.0)),
        Size::new(1080.0, 1920.0)
    );
}

#[test]
fn box_json_uses_plain_field_names() {
    let b: BoxPx = serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#).unwrap();
    assert_eq!(b, BoxPx::new(1.0, 2.0, 3.0, 4.0));
}

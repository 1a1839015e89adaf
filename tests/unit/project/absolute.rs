use super::*;

fn child(id: &str, x: f64, y: f64, w: f64, h: f64) -> FreeformChild {
    FreeformChild {
        id: id.to_string(),
        bbox: BoxPx::new(x, y, w, h),
    }
}

fn position(p: &Projection, id: &str) -> Point {
    p.children
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.position)
        .unwrap()
}

#[test]
fn contained_content_passes_through() {
    let children = vec![
        child("a", 0.0, 0.0, 200.0, 100.0),
        child("b", 100.004, 250.0, 300.0, 150.0),
    ];
    let bounds = measure_bounds(&children).unwrap();
    assert_eq!((bounds.x, bounds.y, bounds.height), (0.0, 0.0, 400.0));

    let p = project_absolute(
        &children,
        BoxPx::new(0.0, 0.0, 400.0, 400.0),
        BoxPx::new(20.0, 20.0, 1000.0, 1000.0),
        LayoutProfile::Square,
    );
    assert_eq!(p.mode, ProjectionMode::PassThrough);
    assert_eq!(position(&p, "a"), Point::new(0.0, 0.0));
    assert_eq!(position(&p, "b"), Point::new(100.0, 250.0));
}

#[test]
fn pass_through_is_idempotent() {
    let children = vec![child("a", 10.123, 20.456, 50.0, 50.0)];
    let safe = BoxPx::new(0.0, 0.0, 500.0, 500.0);
    let once = project_absolute(
        &children,
        measure_bounds(&children).unwrap(),
        safe,
        LayoutProfile::Square,
    );
    let again_children: Vec<FreeformChild> = once
        .children
        .iter()
        .map(|c| child(&c.id, c.position.x, c.position.y, 50.0, 50.0))
        .collect();
    let twice = project_absolute(
        &again_children,
        measure_bounds(&again_children).unwrap(),
        safe,
        LayoutProfile::Square,
    );
    assert_eq!(once, twice);
}

#[test]
fn oversized_content_maps_centers_into_safe_bounds() {
    let children = vec![
        child("left", 0.0, 0.0, 100.0, 100.0),
        child("right", 1100.0, 0.0, 100.0, 100.0),
    ];
    let content = measure_bounds(&children).unwrap();
    let safe = BoxPx::new(50.0, 50.0, 900.0, 900.0);
    let p = project_absolute(&children, content, safe, LayoutProfile::Square);
    assert_eq!(p.mode, ProjectionMode::Mapped);
    // Both centers land near the edges and clamp; the shared vertical center maps to the middle.
    assert_eq!(position(&p, "left"), Point::new(50.0, 450.0));
    assert_eq!(position(&p, "right"), Point::new(850.0, 450.0));
    for c in &p.children {
        assert!(c.position.x >= safe.x && c.position.x + 100.0 <= safe.right());
        assert!(c.position.y >= safe.y && c.position.y + 100.0 <= safe.bottom());
    }
}

#[test]
fn wide_content_restacks_on_vertical_targets() {
    let children = vec![
        child("second", 600.0, 0.0, 500.0, 300.0),
        child("first", 0.0, 50.0, 500.0, 300.0),
    ];
    let content = measure_bounds(&children).unwrap();
    let safe = BoxPx::new(40.0, 40.0, 520.0, 1000.0);
    let p = project_absolute(&children, content, safe, LayoutProfile::Vertical);
    assert_eq!(p.mode, ProjectionMode::Restacked);
    // Input order is preserved in the output.
    assert_eq!(p.children[0].id, "second");
    assert_eq!(position(&p, "first"), Point::new(50.0, 40.0));
    // Leftover 1000 - 600 = 400 goes into the single gap.
    assert_eq!(position(&p, "second"), Point::new(50.0, 740.0));
}

#[test]
fn children_larger_than_safe_range_are_centered() {
    let children = vec![child("huge", 0.0, 0.0, 2000.0, 100.0)];
    let content = measure_bounds(&children).unwrap();
    let safe = BoxPx::new(0.0, 0.0, 1000.0, 1000.0);
    let p = project_absolute(&children, content, safe, LayoutProfile::Square);
    assert_eq!(position(&p, "huge").x, -500.0);
}

#[test]
fn fit_compares_extents_only() {
    assert!(content_fits(
        BoxPx::new(0.0, 0.0, 400.0, 400.0),
        BoxPx::new(20.0, 20.0, 1000.0, 1000.0)
    ));
    assert!(!content_fits(
        BoxPx::new(0.0, 0.0, 1001.0, 400.0),
        BoxPx::new(20.0, 20.0, 1000.0, 1000.0)
    ));
}

#[test]
fn restack_taller_than_safe_range_uses_zero_gap() {
    let children = vec![
        child("a", 0.0, 0.0, 600.0, 400.0),
        child("b", 700.0, 0.0, 600.0, 400.0),
    ];
    let content = measure_bounds(&children).unwrap();
    let safe = BoxPx::new(0.0, 0.0, 700.0, 600.0);
    let p = project_absolute(&children, content, safe, LayoutProfile::Vertical);
    assert_eq!(p.mode, ProjectionMode::Restacked);
    assert_eq!(position(&p, "a"), Point::new(50.0, 0.0));
    // 800 px of children in a 600 px range: no gap, the second child overflows the bottom.
    assert_eq!(position(&p, "b"), Point::new(50.0, 400.0));
}

#[test]
fn anchors_resolve_against_safe_bounds() {
    let safe = BoxPx::new(40.0, 60.0, 920.0, 880.0);
    assert_eq!(
        anchored_position(Anchor::BottomRight, Vec2::new(-10.0, -10.0), 300.0, 200.0, safe),
        Point::new(650.0, 730.0)
    );
    assert_eq!(
        anchored_position(Anchor::TopLeft, Vec2::ZERO, 300.0, 200.0, safe),
        Point::new(40.0, 60.0)
    );
    assert_eq!(
        anchored_position(Anchor::Center, Vec2::new(0.0, 24.0), 300.0, 200.0, safe),
        Point::new(350.0, 424.0)
    );
}

#[test]
fn placement_hints_override_projected_positions() {
    let children = vec![
        child("a", 100.0, 100.0, 300.0, 300.0),
        child("b", 600.0, 600.0, 300.0, 300.0),
        child("c", 500.0, 100.0, 100.0, 100.0),
    ];
    let safe = BoxPx::new(0.0, 0.0, 1000.0, 1000.0);
    let mut p = project_absolute(
        &children,
        measure_bounds(&children).unwrap(),
        safe,
        LayoutProfile::Square,
    );
    let hints = AdvisoryHints::from_json_lenient(
        r#"{"nodes": {
            "a": {"anchor": "bottom-right", "offset": {"x": -10, "y": -10}},
            "c": {"offset": {"x": 5, "y": -5}}
        }}"#,
    )
    .unwrap();
    apply_placement_hints(&mut p, &children, &hints, safe);

    assert_eq!(position(&p, "a"), Point::new(690.0, 690.0));
    assert_eq!(position(&p, "b"), Point::new(600.0, 600.0));
    assert_eq!(position(&p, "c"), Point::new(505.0, 95.0));
    assert_eq!(p.hinted, ["a", "c"]);
    assert_eq!(p.mode, ProjectionMode::PassThrough);
}

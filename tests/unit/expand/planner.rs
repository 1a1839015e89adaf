use super::*;
use proptest::prelude::*;

fn base(total_extra: f64, start: f64, end: f64, flow_child_count: usize) -> AxisExpansionInput {
    AxisExpansionInput {
        total_extra,
        requested_inset: AxisInsets::new(start, end),
        gaps: AxisInsets::default(),
        flow_child_count,
        base_item_spacing: 24.0,
        allow_interior_expansion: true,
        focal_ratio: None,
    }
}

#[test]
fn zero_extra_keeps_requested_insets_exactly() {
    let p = plan_axis(base(0.0, 50.0, 30.0, 4));
    assert_eq!((p.start, p.end, p.interior), (50.0, 30.0, 0.0));
}

#[test]
fn single_flow_child_gets_floor_only() {
    let p = plan_axis(base(200.0, 40.0, 40.0, 1));
    assert_eq!(p.interior, 0.0);
    assert_eq!(p.edge_budget, 80.0);
    assert_eq!((p.start, p.end), (40.0, 40.0));
    assert_eq!(p.grow_remainder, 120.0);
}

#[test]
fn multiple_children_split_leftover_between_gaps_and_edges() {
    let p = plan_axis(base(400.0, 50.0, 50.0, 3));
    // Two gaps: weight min(0.55 + 0.24, 0.9) = 0.79 on a 300px leftover.
    assert!((p.interior - 300.0 * 0.79).abs() < 1e-9);
    assert!((p.start + p.end + p.interior - 400.0).abs() < 1e-9);
    assert!((p.start - p.end).abs() < 1e-9);
    assert!((p.interior_per_gap(3) - p.interior / 2.0).abs() < 1e-12);
}

#[test]
fn interior_growth_disabled_sends_everything_to_edges() {
    let mut i = base(300.0, 20.0, 20.0, 4);
    i.allow_interior_expansion = false;
    let p = plan_axis(i);
    assert_eq!(p.interior, 0.0);
    assert_eq!(p.start + p.end, 300.0);
}

#[test]
fn weight_grows_with_gaps_and_caps() {
    let sym = AxisInsets::default();
    assert!(interior_weight(1, sym, 24.0) < interior_weight(3, sym, 24.0));
    assert_eq!(interior_weight(4, sym, 24.0), INTERIOR_WEIGHT_CAP);
    assert_eq!(interior_weight(9, sym, 24.0), INTERIOR_WEIGHT_CAP_LONG_RUN);
    assert_eq!(interior_weight(0, sym, 24.0), 0.0);
}

#[test]
fn asymmetry_and_tight_spacing_shrink_weight() {
    let sym = AxisInsets::new(20.0, 20.0);
    let skewed = AxisInsets::new(30.0, 10.0);
    let w = interior_weight(2, sym, 24.0);
    assert!((interior_weight(2, skewed, 24.0) - w * 0.7).abs() < 1e-12);
    assert!((interior_weight(2, sym, 4.0) - w * TIGHT_SPACING_FACTOR).abs() < 1e-12);
}

#[test]
fn focal_ratio_moves_edge_space() {
    let mut i = base(300.0, 20.0, 20.0, 0);
    i.focal_ratio = Some(0.0);
    let p = plan_axis(i);
    assert!(p.end > p.start);
    assert!(p.start >= 20.0);
}

#[test]
fn non_finite_extra_is_treated_as_zero() {
    let p = plan_axis(base(f64::NAN, 12.0, 8.0, 3));
    assert_eq!((p.start, p.end, p.interior), (12.0, 8.0, 0.0));
}

proptest! {
    #[test]
    fn floors_always_hold(
        total_extra in -100.0f64..4000.0,
        start in 0.0f64..300.0,
        end in 0.0f64..300.0,
        gap_start in 0.0f64..500.0,
        gap_end in 0.0f64..500.0,
        flow_child_count in 0usize..12,
        spacing in 0.0f64..64.0,
        allow in any::<bool>(),
        focal in proptest::option::of(0.0f64..=1.0),
    ) {
        let p = plan_axis(AxisExpansionInput {
            total_extra,
            requested_inset: AxisInsets::new(start, end),
            gaps: AxisInsets::new(gap_start, gap_end),
            flow_child_count,
            base_item_spacing: spacing,
            allow_interior_expansion: allow,
            focal_ratio: focal,
        });
        prop_assert!(p.start >= start);
        prop_assert!(p.end >= end);
        prop_assert!(p.interior >= 0.0);
        if total_extra <= 0.0 {
            prop_assert_eq!(p.interior, 0.0);
        }
    }
}

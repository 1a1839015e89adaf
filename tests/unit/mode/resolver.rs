use super::*;
use crate::advisory::hints::{AdvisoryHints, FocalPoint, NodeHint};
use crate::foundation::core::Edges;
use proptest::prelude::*;

fn input(source_mode: FlowMode, child_count: usize, target_aspect: f64) -> ModeInput {
    ModeInput {
        source_mode,
        child_count,
        text_children: 0,
        image_children: 0,
        source_aspect: 0.5625,
        target_aspect,
        profile: LayoutProfile::for_aspect(target_aspect),
    }
}

#[test]
fn row_converts_to_column_on_tall_targets() {
    let d = resolve_mode(&input(FlowMode::StackedHorizontal, 3, 16.0 / 9.0), AdvisoryInput::Absent);
    assert_eq!(d.orientation, FlowMode::StackedVertical);
    assert_eq!(d.tier, DecisionTier::Heuristic);
    assert_eq!(d.reason, ModeReason::TallTargetConversion);
    assert!(d.converts_from(FlowMode::StackedHorizontal));
}

#[test]
fn text_heavy_rows_convert_more_eagerly_than_image_rows() {
    let mut text = input(FlowMode::StackedHorizontal, 2, 1.4);
    text.text_children = 2;
    assert_eq!(heuristic_mode(&text).orientation, FlowMode::StackedVertical);

    let mut images = input(FlowMode::StackedHorizontal, 2, 1.9);
    images.image_children = 2;
    assert_eq!(heuristic_mode(&images).orientation, FlowMode::StackedHorizontal);

    images.target_aspect = 2.4;
    assert_eq!(heuristic_mode(&images).orientation, FlowMode::StackedVertical);
}

#[test]
fn column_converts_to_row_on_wide_targets() {
    let d = heuristic_mode(&input(FlowMode::StackedVertical, 4, 9.0 / 16.0));
    assert_eq!(d.orientation, FlowMode::StackedHorizontal);
    assert_eq!(d.reason, ModeReason::WideTargetConversion);

    let d = heuristic_mode(&input(FlowMode::StackedVertical, 4, 0.8));
    assert_eq!(d.orientation, FlowMode::StackedVertical);
    assert_eq!(d.reason, ModeReason::Preserved);
}

#[test]
fn single_children_never_convert() {
    let d = heuristic_mode(&input(FlowMode::StackedHorizontal, 1, 4.0));
    assert_eq!(d.orientation, FlowMode::StackedHorizontal);
    assert_eq!(d.reason, ModeReason::SingleChild);
}

#[test]
fn freeform_stacks_only_after_large_aspect_shift() {
    // 16:9 source into 9:16 target is a ~3.2x shift.
    let d = heuristic_mode(&input(FlowMode::Freeform, 3, 16.0 / 9.0));
    assert_eq!(d.orientation, FlowMode::StackedVertical);
    assert_eq!(d.reason, ModeReason::FreeformAspectShift);

    let mut small = input(FlowMode::Freeform, 3, 0.5);
    small.source_aspect = 0.5625;
    assert_eq!(heuristic_mode(&small).orientation, FlowMode::Freeform);

    let mut square = input(FlowMode::Freeform, 3, 1.0);
    square.source_aspect = 0.25;
    assert_eq!(heuristic_mode(&square).orientation, FlowMode::Freeform);
}

#[test]
fn hint_without_orientation_preserves_source_flow() {
    let mut hints = AdvisoryHints::default();
    hints.nodes.insert("a".into(), NodeHint::default());
    let d = resolve_mode(
        &input(FlowMode::StackedHorizontal, 3, 3.0),
        AdvisoryInput::Present(&hints),
    );
    assert_eq!(d.orientation, FlowMode::StackedHorizontal);
    assert_eq!(d.tier, DecisionTier::AdvisoryPreserve);
}

#[test]
fn focal_or_insets_only_hints_preserve_source_flow() {
    let focal = AdvisoryHints {
        focal: Some(FocalPoint { x: 0.5, y: 0.3 }),
        ..AdvisoryHints::default()
    };
    let d = resolve_mode(
        &input(FlowMode::StackedHorizontal, 2, 16.0 / 9.0),
        AdvisoryInput::Present(&focal),
    );
    assert_eq!(d.orientation, FlowMode::StackedHorizontal);
    assert_eq!(d.tier, DecisionTier::AdvisoryPreserve);
    assert_eq!(d.reason, ModeReason::HintedPreserve);

    let insets = AdvisoryHints {
        insets: Some(Edges::uniform(24.0)),
        ..AdvisoryHints::default()
    };
    let d = resolve_mode(
        &input(FlowMode::Freeform, 3, 16.0 / 9.0),
        AdvisoryInput::Present(&insets),
    );
    assert_eq!(d.orientation, FlowMode::Freeform);
    assert_eq!(d.tier, DecisionTier::AdvisoryPreserve);
}

#[test]
fn rejected_orientation_falls_through_to_heuristics() {
    let mut hints = AdvisoryHints {
        rejected_orientation: Some("\"diagonal\"".into()),
        ..AdvisoryHints::default()
    };
    hints.nodes.insert("a".into(), NodeHint::default());
    let d = resolve_mode(
        &input(FlowMode::StackedHorizontal, 3, 3.0),
        AdvisoryInput::Present(&hints),
    );
    assert_eq!(d.tier, DecisionTier::Heuristic);
    assert_eq!(d.orientation, FlowMode::StackedVertical);
}

#[test]
fn non_finite_aspects_do_not_panic() {
    let mut i = input(FlowMode::Freeform, 3, f64::NAN);
    i.source_aspect = f64::INFINITY;
    let d = heuristic_mode(&i);
    assert_eq!(d.tier, DecisionTier::Heuristic);
}

fn flow_mode() -> impl Strategy<Value = FlowMode> {
    prop_oneof![
        Just(FlowMode::StackedHorizontal),
        Just(FlowMode::StackedVertical),
        Just(FlowMode::Freeform),
    ]
}

proptest! {
    #[test]
    fn explicit_hint_always_wins(
        hinted in flow_mode(),
        source_mode in flow_mode(),
        child_count in 0usize..40,
        text_children in 0usize..40,
        image_children in 0usize..40,
        source_aspect in 0.01f64..100.0,
        target_aspect in 0.01f64..100.0,
    ) {
        let hints = AdvisoryHints {
            orientation: Some(hinted),
            ..AdvisoryHints::default()
        };
        let i = ModeInput {
            source_mode,
            child_count,
            text_children,
            image_children,
            source_aspect,
            target_aspect,
            profile: LayoutProfile::for_aspect(target_aspect),
        };
        let d = resolve_mode(&i, AdvisoryInput::Present(&hints));
        prop_assert_eq!(d.orientation, hinted);
        prop_assert_eq!(d.tier, DecisionTier::AdvisoryOrientation);
    }
}

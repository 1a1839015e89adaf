use crate::adapt::plan::{AdaptationPlan, ChildAlign, ChildOverride, SizingMode};
use crate::advisory::hints::{AdvisoryInput, SizeMode};
use crate::analyze::profile::{LayoutProfile, target_aspect};
use crate::atomic::classifier::AtomicGroupSet;
use crate::content::arena::{NodeArena, NodeIdx};
use crate::content::model::{ContentNode, CounterAlign, FlowMode, PrimaryAlign};
use crate::expand::planner::AxisExpansionPlan;
use crate::foundation::core::{Axis, Size, sanitize_target};
use crate::foundation::math::{finite_or, round2};
use std::collections::BTreeMap;

/// Target `height / width` at or above which the target counts as extremely tall.
pub const EXTREME_TALL_ASPECT: f64 = 2.0;
/// Target `height / width` at or below which the target counts as extremely wide.
pub const EXTREME_WIDE_ASPECT: f64 = 0.5;
/// Child count up to which runs are spread with space-between.
pub const SPACE_BETWEEN_MAX_CHILDREN: usize = 3;
/// Child count above which horizontal runs may wrap.
pub const WRAP_MIN_EXCLUSIVE_CHILDREN: usize = 4;
/// Target width (px) from which horizontal runs may wrap.
pub const WRAP_MIN_TARGET_WIDTH: f64 = 1200.0;
/// Share of the available width text may take after a column conversion.
pub const TEXT_MAX_WIDTH_RATIO: f64 = 0.9;
/// Share of its scaled width a child keeps as minimum after a row conversion.
pub const ROW_MIN_WIDTH_RATIO: f64 = 0.5;
/// Primary-axis growth allowed for edge children on extreme targets.
pub const EDGE_CHILD_MAX_RATIO: f64 = 1.25;
/// Run length from which edge children are capped on extreme targets.
pub const EDGE_CHILD_MIN_RUN: usize = 3;

/// Everything the adapter needs for one target.
#[derive(Clone, Copy, Debug)]
pub struct AdaptInput<'a> {
    /// Source container; its visible direct children are the flow children.
    pub source: &'a ContentNode,
    /// Resolved orientation.
    pub orientation: FlowMode,
    /// Target profile.
    pub profile: LayoutProfile,
    /// Target canvas size.
    pub target: Size,
    /// Chosen uniform scale.
    pub scale: f64,
    /// Unscaled spacing between source children.
    pub base_item_spacing: f64,
    /// Plan along the orientation axis (default for freeform).
    pub primary: AxisExpansionPlan,
    /// Plan across the orientation axis (default for freeform).
    pub counter: AxisExpansionPlan,
    /// Atomic groups of the source.
    pub atomic: &'a AtomicGroupSet,
    /// Advisory data for this target.
    pub advisory: AdvisoryInput<'a>,
}

/// Return `true` for extremely tall or extremely wide targets.
pub fn is_extreme_aspect(target: Size) -> bool {
    let aspect = target_aspect(target);
    aspect >= EXTREME_TALL_ASPECT || aspect <= EXTREME_WIDE_ASPECT
}

/// `(primary, counter)` sizing modes.
pub fn sizing_for(
    orientation: FlowMode,
    profile: LayoutProfile,
    extreme: bool,
) -> (SizingMode, SizingMode) {
    let Some(axis) = orientation.axis() else {
        return (SizingMode::Fixed, SizingMode::Fixed);
    };
    if extreme {
        return (SizingMode::Fixed, SizingMode::Fixed);
    }
    let primary = if profile.dominant_axis() == Some(axis) {
        SizingMode::Fixed
    } else {
        SizingMode::Auto
    };
    (primary, SizingMode::Fixed)
}

/// Default alignment for a run of `child_count` children.
pub fn alignment_for(child_count: usize) -> (PrimaryAlign, CounterAlign) {
    if child_count <= SPACE_BETWEEN_MAX_CHILDREN {
        (PrimaryAlign::SpaceBetween, CounterAlign::Center)
    } else {
        (PrimaryAlign::Min, CounterAlign::Center)
    }
}

/// Whether a run wraps.
pub fn wraps(orientation: FlowMode, child_count: usize, target_width: f64) -> bool {
    orientation == FlowMode::StackedHorizontal
        && child_count > WRAP_MIN_EXCLUSIVE_CHILDREN
        && target_width >= WRAP_MIN_TARGET_WIDTH
}

/// Atomic roots move as one rigid unit: no stretch, no growth.
fn pin_rigid(ov: &mut ChildOverride) {
    if ov.align == Some(ChildAlign::Stretch) {
        ov.align = None;
    }
    if ov.grow.is_some_and(|g| g > 0.0) {
        ov.grow = Some(0.0);
    }
}

fn cap_nested_text(
    arena: &NodeArena<'_>,
    wrapper: NodeIdx,
    atomic: &AtomicGroupSet,
    cap: f64,
    overrides: &mut BTreeMap<String, ChildOverride>,
) {
    for &c in &arena.entry(wrapper).children {
        let e = arena.entry(c);
        if !e.visible || atomic.contains(&e.node.id) {
            continue;
        }
        if e.node.has_text {
            overrides.entry(e.node.id.clone()).or_default().max_width = Some(cap);
        }
        if e.node.flow_mode().is_stacked() {
            cap_nested_text(arena, c, atomic, cap, overrides);
        }
    }
}

/// Build the final layout settings for one target.
pub fn adapt(input: &AdaptInput<'_>) -> AdaptationPlan {
    let target = sanitize_target(input.target);
    let scale = finite_or(input.scale, 1.0).max(0.0);
    let orientation = input.orientation;
    let source_mode = input.source.flow_mode();
    let extreme = is_extreme_aspect(target);

    let arena = NodeArena::build(input.source);
    let children: Vec<NodeIdx> = arena.visible_root_children().collect();
    let n = children.len();

    let (primary_sizing, counter_sizing) = sizing_for(orientation, input.profile, extreme);
    let (primary_align, counter_align) = alignment_for(n);

    let item_spacing = finite_or(input.base_item_spacing * scale, 0.0).max(0.0)
        + input.primary.interior_per_gap(n);

    let primary_axis = orientation.axis().unwrap_or(Axis::Horizontal);
    let mut padding = input
        .source
        .flow
        .map(|f| f.padding)
        .unwrap_or_default()
        .sanitized()
        .scaled(scale);
    for (axis, plan) in [
        (primary_axis, input.primary),
        (primary_axis.cross(), input.counter),
    ] {
        let (start, end) = padding.along(axis);
        padding.set_along(axis, start.max(plan.start), end.max(plan.end));
    }

    let converting = orientation.is_stacked() && orientation != source_mode;
    let to_vertical = converting && orientation == FlowMode::StackedVertical;
    let to_horizontal = converting && orientation == FlowMode::StackedHorizontal;
    let text_cap = round2((target.width - padding.horizontal()).max(0.0) * TEXT_MAX_WIDTH_RATIO);

    let mut overrides: BTreeMap<String, ChildOverride> = BTreeMap::new();
    for (i, &idx) in children.iter().enumerate() {
        let entry = arena.entry(idx);
        let atomic_root = input.atomic.is_root(&entry.node.id);
        let scaled = entry.node.bbox.normalized().scaled(scale);
        let mut ov = ChildOverride::default();

        if to_vertical {
            ov.align = Some(ChildAlign::Stretch);
            ov.grow = Some(0.0);
            if entry.subtree_has_text && !atomic_root {
                ov.max_width = Some(text_cap);
            }
        }
        if to_horizontal {
            ov.grow = Some(1.0);
            ov.min_width = Some(round2(scaled.width * ROW_MIN_WIDTH_RATIO));
        }
        if n == 1 && orientation.is_stacked() && input.primary.grow_remainder > 0.0 {
            ov.grow = Some(1.0);
        }
        if let Some(axis) = orientation.axis()
            && extreme
            && n >= EDGE_CHILD_MIN_RUN
            && (i == 0 || i == n - 1)
        {
            ov.grow = Some(0.0);
            let cap = round2(scaled.len(axis) * EDGE_CHILD_MAX_RATIO);
            match axis {
                Axis::Horizontal => ov.max_width = Some(cap),
                Axis::Vertical => ov.max_height = Some(cap),
            }
        }
        if atomic_root {
            pin_rigid(&mut ov);
        }
        overrides.insert(entry.node.id.clone(), ov);

        if to_vertical
            && !input.atomic.contains(&entry.node.id)
            && entry.node.flow_mode().is_stacked()
        {
            cap_nested_text(&arena, idx, input.atomic, text_cap, &mut overrides);
        }
    }

    if let Some(hints) = input.advisory.hints() {
        for entry in arena.entries.iter().skip(1) {
            let id = &entry.node.id;
            let Some(hint) = hints.node(id) else {
                continue;
            };
            if input.atomic.is_absorbed(id) {
                continue;
            }
            let ov = overrides.entry(id.clone()).or_default();
            if let Some(visible) = hint.visible {
                ov.visible = Some(visible);
            }
            match hint.size_mode {
                Some(SizeMode::Fill) => ov.grow = Some(1.0),
                Some(SizeMode::Fixed | SizeMode::Hug) => ov.grow = Some(0.0),
                None => {}
            }
            if let Some(text_sizing) = hint.text_sizing {
                ov.text_sizing = Some(text_sizing);
            }
            if input.atomic.is_root(id) {
                pin_rigid(ov);
            }
        }
    }

    overrides.retain(|_, ov| !ov.is_empty());

    AdaptationPlan {
        orientation,
        primary_sizing,
        counter_sizing,
        primary_align,
        counter_align,
        wrap: wraps(orientation, n, target.width),
        item_spacing: round2(item_spacing),
        padding,
        child_overrides: overrides,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapt/adapter.rs"]
mod tests;

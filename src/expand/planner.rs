use crate::expand::padding::{AxisInsets, distribute_padding};
use crate::foundation::math::finite_or;
use serde::{Deserialize, Serialize};

/// Interior weight with a single gap before the per-gap increment.
pub const INTERIOR_WEIGHT_BASE: f64 = 0.55;
/// Interior weight added per gap.
pub const INTERIOR_WEIGHT_PER_GAP: f64 = 0.12;
/// Interior weight ceiling for short runs.
pub const INTERIOR_WEIGHT_CAP: f64 = 0.9;
/// Interior weight ceiling once a run has [`LONG_RUN_GAPS`] gaps.
pub const INTERIOR_WEIGHT_CAP_LONG_RUN: f64 = 0.98;
/// Gap count from which the long-run ceiling applies.
pub const LONG_RUN_GAPS: usize = 5;
/// How strongly asymmetric source margins suppress interior growth.
pub const ASYMMETRY_PENALTY: f64 = 0.6;
/// Spacing (px) below which the source spacing counts as tight.
pub const TIGHT_SPACING_PX: f64 = 8.0;
/// Interior weight multiplier for tight spacing.
pub const TIGHT_SPACING_FACTOR: f64 = 0.7;

/// Inputs of [`plan_axis`] for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisExpansionInput {
    /// Axis length minus scaled content minus advisory insets.
    pub total_extra: f64,
    /// Safe-area minimum on each edge. Never reduced.
    pub requested_inset: AxisInsets,
    /// Existing margins of the source content on this axis.
    pub gaps: AxisInsets,
    /// Flow children laid out along this axis (0 for a cross axis).
    pub flow_child_count: usize,
    /// Spacing between children after scaling.
    pub base_item_spacing: f64,
    /// Whether gaps between children may grow.
    pub allow_interior_expansion: bool,
    /// Preferred start-edge share of edge space, in `[0, 1]`.
    pub focal_ratio: Option<f64>,
}

/// How the free space of one axis is spent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisExpansionPlan {
    /// Leading padding, `>= requested_inset.start`.
    pub start: f64,
    /// Trailing padding, `>= requested_inset.end`.
    pub end: f64,
    /// Total growth spread over the gaps between flow children.
    pub interior: f64,
    /// Space reserved for edge padding before the floor check.
    pub edge_budget: f64,
    /// Space left for the flow child itself to grow into.
    pub grow_remainder: f64,
}

impl AxisExpansionPlan {
    /// Growth added to each individual gap.
    pub fn interior_per_gap(&self, flow_child_count: usize) -> f64 {
        if flow_child_count < 2 {
            return 0.0;
        }
        self.interior / (flow_child_count - 1) as f64
    }
}

/// Share of the leftover that goes into interior gaps.
pub fn interior_weight(gap_count: usize, gaps: AxisInsets, base_item_spacing: f64) -> f64 {
    if gap_count == 0 {
        return 0.0;
    }
    let cap = if gap_count >= LONG_RUN_GAPS {
        INTERIOR_WEIGHT_CAP_LONG_RUN
    } else {
        INTERIOR_WEIGHT_CAP
    };
    let mut weight = (INTERIOR_WEIGHT_BASE + INTERIOR_WEIGHT_PER_GAP * gap_count as f64).min(cap);
    weight *= 1.0 - gaps.sanitized().asymmetry() * ASYMMETRY_PENALTY;
    if finite_or(base_item_spacing, 0.0) < TIGHT_SPACING_PX {
        weight *= TIGHT_SPACING_FACTOR;
    }
    weight.clamp(0.0, cap)
}

/// Split one axis's free space into edge padding, interior growth and child growth.
pub fn plan_axis(input: AxisExpansionInput) -> AxisExpansionPlan {
    let floor = input.requested_inset.sanitized();
    let total_extra = finite_or(input.total_extra, 0.0).max(0.0);
    if total_extra <= 0.0 {
        return AxisExpansionPlan {
            start: floor.start,
            end: floor.end,
            interior: 0.0,
            edge_budget: floor.total(),
            grow_remainder: 0.0,
        };
    }

    let leftover = (total_extra - floor.total()).max(0.0);

    // Heuristic exception: a lone flow child padded with all the leftover looks stranded, so the
    // edges keep only their floor and the child grows into the rest.
    if input.flow_child_count == 1 {
        return AxisExpansionPlan {
            start: floor.start,
            end: floor.end,
            interior: 0.0,
            edge_budget: floor.total(),
            grow_remainder: leftover,
        };
    }

    let reflow_eligible = input.flow_child_count >= 2 && input.allow_interior_expansion;
    let weight = if reflow_eligible {
        interior_weight(
            input.flow_child_count - 1,
            input.gaps,
            input.base_item_spacing,
        )
    } else {
        0.0
    };
    let interior = leftover * weight;
    let edge_budget = floor.total() + (leftover - interior);
    let edges = distribute_padding(edge_budget, floor, input.gaps, input.focal_ratio);

    AxisExpansionPlan {
        start: edges.start.max(floor.start),
        end: edges.end.max(floor.end),
        interior,
        edge_budget,
        grow_remainder: 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expand/planner.rs"]
mod tests;

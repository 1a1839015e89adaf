use crate::foundation::math::{finite_or, lerp, safe_div};
use serde::{Deserialize, Serialize};

/// Weight of the focal ratio against the proportional split.
pub const FOCAL_WEIGHT: f64 = 0.5;

/// A `(start, end)` pair of lengths along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisInsets {
    /// Leading edge (left or top).
    pub start: f64,
    /// Trailing edge (right or bottom).
    pub end: f64,
}

impl AxisInsets {
    /// Build a pair.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Both sides replaced with finite, non-negative values.
    pub fn sanitized(self) -> Self {
        Self {
            start: finite_or(self.start, 0.0).max(0.0),
            end: finite_or(self.end, 0.0).max(0.0),
        }
    }

    /// `start + end`.
    pub fn total(self) -> f64 {
        self.start + self.end
    }

    /// `|start - end| / (start + end)`, zero when both are zero.
    pub fn asymmetry(self) -> f64 {
        safe_div((self.start - self.end).abs(), self.total(), 0.0).clamp(0.0, 1.0)
    }
}

/// Split `budget` between the two edges of an axis.
///
/// The split follows the proportions of the existing `gaps` (even when there are none), leans
/// toward `focal_ratio` (the start edge's preferred share) when given, and finally lifts each edge
/// back to its `floor`. The result can exceed `budget` only when the floors demand it.
pub fn distribute_padding(
    budget: f64,
    floor: AxisInsets,
    gaps: AxisInsets,
    focal_ratio: Option<f64>,
) -> AxisInsets {
    let floor = floor.sanitized();
    let gaps = gaps.sanitized();
    let budget = finite_or(budget, 0.0).max(0.0);

    let mut start_share = safe_div(gaps.start, gaps.total(), 0.5);
    if let Some(f) = focal_ratio.filter(|f| f.is_finite()) {
        start_share = lerp(start_share, f.clamp(0.0, 1.0), FOCAL_WEIGHT);
    }

    let start = budget * start_share;
    let end = budget - start;
    if start < floor.start {
        let start = floor.start;
        return AxisInsets::new(start, (budget - start).max(floor.end));
    }
    if end < floor.end {
        let end = floor.end;
        return AxisInsets::new((budget - end).max(floor.start), end);
    }
    AxisInsets::new(start, end)
}

#[cfg(test)]
#[path = "../../tests/unit/expand/padding.rs"]
mod tests;

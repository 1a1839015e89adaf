use crate::adapt::plan::{AdaptationPlan, ChildAlign, ChildOverride};
use crate::content::model::{CounterAlign, PrimaryAlign};
use crate::foundation::core::{Axis, BoxPx, Edges, Size, Vec2, sanitize_target};
use crate::foundation::math::round2;
use serde::{Deserialize, Serialize};

/// Overflow (px) tolerated before a box counts as outside the safe area.
pub const SAFE_AREA_TOLERANCE_PX: f64 = 0.5;
/// Centroid offset (px) tolerated on each axis.
pub const CENTROID_TOLERANCE_PX: f64 = 12.0;

/// A node box in the target frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedBox {
    /// Node id.
    pub id: String,
    /// Box in the target frame.
    pub bbox: BoxPx,
}

/// Layout problem found in the predicted target geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QaWarning {
    /// Content crosses into the safe-area margin.
    OutsideSafeArea {
        /// Offending node, `None` for the content block as a whole.
        node_id: Option<String>,
        /// Overflow past each safe edge (px).
        overflow: Edges,
    },
    /// Content centroid drifts from the safe-area center.
    CentroidMisaligned {
        /// Centroid minus safe-area center (px).
        offset: Vec2,
    },
}

/// Safe bounds of a target in its own frame.
pub fn safe_bounds(target: Size, insets: Edges) -> BoxPx {
    let t = sanitize_target(target);
    let i = insets.sanitized();
    BoxPx::new(i.left, i.top, t.width - i.horizontal(), t.height - i.vertical())
}

/// How far `b` crosses each edge of `safe`. Edges within tolerance read zero.
pub fn overflow(b: BoxPx, safe: BoxPx) -> Edges {
    let past = |v: f64| if v > SAFE_AREA_TOLERANCE_PX { round2(v) } else { 0.0 };
    Edges {
        top: past(safe.y - b.y),
        right: past(b.right() - safe.right()),
        bottom: past(b.bottom() - safe.bottom()),
        left: past(safe.x - b.x),
    }
}

/// One warning per box that leaves the safe bounds.
pub fn check_safe_area(boxes: &[PlacedBox], safe: BoxPx) -> Vec<QaWarning> {
    boxes
        .iter()
        .filter_map(|p| {
            let o = overflow(p.bbox, safe);
            o.any_positive().then(|| QaWarning::OutsideSafeArea {
                node_id: Some(p.id.clone()),
                overflow: o,
            })
        })
        .collect()
}

/// Compare the center of the boxes' union with the safe-area center.
pub fn check_centroid(boxes: &[PlacedBox], safe: BoxPx) -> Option<QaWarning> {
    let content = boxes.iter().map(|p| p.bbox).reduce(BoxPx::union)?;
    let offset = content.center() - safe.center();
    (offset.x.abs() > CENTROID_TOLERANCE_PX || offset.y.abs() > CENTROID_TOLERANCE_PX).then(|| {
        QaWarning::CentroidMisaligned {
            offset: Vec2::new(round2(offset.x), round2(offset.y)),
        }
    })
}

/// All warnings for one target.
pub fn collect_warnings(boxes: &[PlacedBox], safe: BoxPx) -> Vec<QaWarning> {
    let mut out = check_safe_area(boxes, safe);
    out.extend(check_centroid(boxes, safe));
    out
}

fn clamp_len(len: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let len = max.map_or(len, |m| len.min(m));
    min.map_or(len, |m| len.max(m))
}

/// Predict where a stacked plan puts `children` (scaled sizes, paint order).
///
/// Growth is not simulated: children keep their scaled lengths clamped to their overrides.
/// Freeform plans return the boxes unchanged.
pub fn predict_run(children: &[PlacedBox], plan: &AdaptationPlan, target: Size) -> Vec<PlacedBox> {
    let Some(axis) = plan.orientation.axis() else {
        return children.to_vec();
    };
    let t = sanitize_target(target);
    let inner = safe_bounds(t, plan.padding);
    let cross = axis.cross();

    let sized: Vec<(&PlacedBox, ChildOverride, f64, f64)> = children
        .iter()
        .filter_map(|p| {
            let ov = plan.child(&p.id).copied().unwrap_or_default();
            if ov.visible == Some(false) {
                return None;
            }
            let w = clamp_len(p.bbox.width, ov.min_width, ov.max_width);
            let h = clamp_len(p.bbox.height, ov.min_height, ov.max_height);
            let (main, across) = match axis {
                Axis::Horizontal => (w, h),
                Axis::Vertical => (h, w),
            };
            Some((p, ov, main, across))
        })
        .collect();

    let n = sized.len();
    let lengths: f64 = sized.iter().map(|s| s.2).sum();
    let room = inner.len(axis);
    let (mut cursor, gap) = match plan.primary_align {
        PrimaryAlign::SpaceBetween if n >= 2 => {
            (inner.start(axis), ((room - lengths) / (n - 1) as f64).max(0.0))
        }
        align => {
            let run = lengths + plan.item_spacing * n.saturating_sub(1) as f64;
            let start = match align {
                PrimaryAlign::Center => inner.start(axis) + (room - run) * 0.5,
                PrimaryAlign::Max => inner.start(axis) + room - run,
                _ => inner.start(axis),
            };
            (start, plan.item_spacing)
        }
    };

    let cross_room = inner.len(cross);
    sized
        .into_iter()
        .map(|(p, ov, main, across)| {
            let (across, cross_start) = if ov.align == Some(ChildAlign::Stretch) {
                (cross_room, inner.start(cross))
            } else {
                let align = match ov.align {
                    Some(ChildAlign::Min) => CounterAlign::Min,
                    Some(ChildAlign::Max) => CounterAlign::Max,
                    Some(ChildAlign::Center) => CounterAlign::Center,
                    _ => plan.counter_align,
                };
                let start = match align {
                    CounterAlign::Min => inner.start(cross),
                    CounterAlign::Max => inner.start(cross) + cross_room - across,
                    CounterAlign::Center | CounterAlign::Baseline => {
                        inner.start(cross) + (cross_room - across) * 0.5
                    }
                };
                (across, start)
            };
            let bbox = match axis {
                Axis::Horizontal => BoxPx::new(cursor, cross_start, main, across),
                Axis::Vertical => BoxPx::new(cross_start, cursor, across, main),
            };
            cursor += main + gap;
            PlacedBox {
                id: p.id.clone(),
                bbox,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/qa/warnings.rs"]
mod tests;

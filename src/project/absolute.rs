use crate::advisory::hints::{AdvisoryHints, Anchor};
use crate::analyze::profile::LayoutProfile;
use crate::foundation::core::{Axis, BoxPx, Point, Vec2};
use crate::foundation::math::{finite_or, round2, safe_div};
use serde::{Deserialize, Serialize};

/// Width-over-height predominance required before a vertical target re-stacks children.
pub const RESTACK_WIDTH_PREDOMINANCE: f64 = 1.1;
/// Tolerance (px) of the fit test.
pub const FIT_EPS: f64 = 0.01;

/// A freeform child to place: id plus its scaled box in the container frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreeformChild {
    /// Node id.
    pub id: String,
    /// Scaled box.
    pub bbox: BoxPx,
}

/// Projected top-left of one child.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedChild {
    /// Node id.
    pub id: String,
    /// New top-left, rounded to two decimals.
    pub position: Point,
}

/// Branch the projector took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionMode {
    /// Content already fit; positions unchanged.
    PassThrough,
    /// Centers mapped linearly into the safe bounds.
    Mapped,
    /// Children re-stacked top to bottom.
    Restacked,
}

/// Output of [`project_absolute`], in input order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Branch taken.
    pub mode: ProjectionMode,
    /// One entry per input child, same order as the input.
    pub children: Vec<ProjectedChild>,
    /// Children placed by an advisory anchor or offset instead of the branch above.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hinted: Vec<String>,
}

/// Union of the children's boxes, `None` for no children.
pub fn measure_bounds(children: &[FreeformChild]) -> Option<BoxPx> {
    children
        .iter()
        .map(|c| c.bbox.normalized())
        .reduce(BoxPx::union)
}

fn placed(id: &str, x: f64, y: f64) -> ProjectedChild {
    ProjectedChild {
        id: id.to_string(),
        position: Point::new(round2(x), round2(y)),
    }
}

/// Map `center` from the source range to the target range and clamp the resulting box.
fn map_axis(child: BoxPx, content: BoxPx, safe: BoxPx, axis: Axis) -> f64 {
    let len = child.len(axis);
    let (src_start, src_len) = (content.start(axis), content.len(axis));
    let (dst_start, dst_len) = (safe.start(axis), safe.len(axis));
    let center = child.start(axis) + len * 0.5;

    let t = safe_div(center - src_start, src_len, 0.5);
    let mapped_center = dst_start + t * dst_len;
    if len >= dst_len {
        return dst_start + (dst_len - len) * 0.5;
    }
    (mapped_center - len * 0.5).clamp(dst_start, dst_start + dst_len - len)
}

/// Stack children top to bottom in left-to-right order, spreading the leftover height evenly.
///
/// When the children are taller than the safe range the gap is zero; the overflow is left for
/// the QA warnings to report.
fn restack(children: &[FreeformChild], safe: BoxPx) -> Vec<ProjectedChild> {
    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by(|&a, &b| {
        let (ba, bb) = (children[a].bbox, children[b].bbox);
        ba.x.total_cmp(&bb.x).then(ba.y.total_cmp(&bb.y))
    });

    let total_h: f64 = children.iter().map(|c| c.bbox.height).sum();
    let gaps = children.len().saturating_sub(1).max(1) as f64;
    let gap = ((safe.height - total_h) / gaps).max(0.0);

    let mut out = vec![None; children.len()];
    let mut y = safe.y;
    for i in order {
        let c = &children[i];
        let x = safe.x + (safe.width - c.bbox.width) * 0.5;
        out[i] = Some(placed(&c.id, x, y));
        y += c.bbox.height + gap;
    }
    out.into_iter().flatten().collect()
}

/// Return `true` when the content's extent fits the safe extent on both axes.
///
/// Only extents are compared: content that fits keeps its authored offsets even when those sit
/// partly inside the safe margin, which the QA warnings then report.
pub fn content_fits(content: BoxPx, safe: BoxPx) -> bool {
    content.width <= safe.width + FIT_EPS && content.height <= safe.height + FIT_EPS
}

/// Place freeform children inside the target safe bounds.
///
/// Children and bounds share the container frame; sizes are already scaled. Nothing is shrunk
/// to fit: a re-stack taller than the safe range, or a child longer than it, overflows and is
/// left for the QA warnings.
pub fn project_absolute(
    children: &[FreeformChild],
    content_bounds: BoxPx,
    target_safe: BoxPx,
    profile: LayoutProfile,
) -> Projection {
    let content = content_bounds.normalized();
    let safe = target_safe.normalized();

    if content_fits(content, safe) {
        return Projection {
            mode: ProjectionMode::PassThrough,
            children: children
                .iter()
                .map(|c| placed(&c.id, c.bbox.x, c.bbox.y))
                .collect(),
            hinted: Vec::new(),
        };
    }

    if profile == LayoutProfile::Vertical
        && children.len() >= 2
        && content.width > content.height * RESTACK_WIDTH_PREDOMINANCE
    {
        return Projection {
            mode: ProjectionMode::Restacked,
            children: restack(children, safe),
            hinted: Vec::new(),
        };
    }

    Projection {
        mode: ProjectionMode::Mapped,
        children: children
            .iter()
            .map(|c| {
                let b = c.bbox.normalized();
                placed(
                    &c.id,
                    map_axis(b, content, safe, Axis::Horizontal),
                    map_axis(b, content, safe, Axis::Vertical),
                )
            })
            .collect(),
        hinted: Vec::new(),
    }
}

/// Top-left that puts a `width` x `height` box at `anchor` inside `safe`, moved by `offset`.
pub fn anchored_position(
    anchor: Anchor,
    offset: Vec2,
    width: f64,
    height: f64,
    safe: BoxPx,
) -> Point {
    let safe = safe.normalized();
    let (fx, fy) = anchor.fractions();
    let x = safe.x + (safe.width - width) * fx + finite_or(offset.x, 0.0);
    let y = safe.y + (safe.height - height) * fy + finite_or(offset.y, 0.0);
    Point::new(round2(x), round2(y))
}

/// Override projected positions with advisory anchors and offsets.
///
/// `children` must be the slice the projection was built from. An anchor places the child
/// against `safe`; an offset alone nudges the projected position. Advisory placement is not
/// clamped, so hinted children may leave the safe bounds.
pub fn apply_placement_hints(
    projection: &mut Projection,
    children: &[FreeformChild],
    hints: &AdvisoryHints,
    safe: BoxPx,
) {
    for (pc, c) in projection.children.iter_mut().zip(children) {
        let Some(hint) = hints.node(&c.id) else {
            continue;
        };
        let offset = hint.offset.unwrap_or(Vec2::ZERO);
        let position = match hint.anchor {
            Some(anchor) => anchored_position(anchor, offset, c.bbox.width, c.bbox.height, safe),
            None if hint.offset.is_some() => Point::new(
                round2(pc.position.x + finite_or(offset.x, 0.0)),
                round2(pc.position.y + finite_or(offset.y, 0.0)),
            ),
            None => continue,
        };
        pc.position = position;
        projection.hinted.push(pc.id.clone());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/absolute.rs"]
mod tests;

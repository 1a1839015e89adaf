use crate::foundation::math::finite_or;
use serde::{Deserialize, Serialize};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Axis-aligned box in pixels.
///
/// Child boxes are expressed in their parent container's frame. Width and height are never
/// negative: constructors clamp negative and non-finite extents to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxPx {
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    /// Horizontal extent, `>= 0`.
    #[serde(default)]
    pub width: f64,
    /// Vertical extent, `>= 0`.
    #[serde(default)]
    pub height: f64,
}

impl BoxPx {
    /// Create a normalized box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: finite_or(x, 0.0),
            y: finite_or(y, 0.0),
            width: finite_or(width, 0.0).max(0.0),
            height: finite_or(height, 0.0).max(0.0),
        }
    }

    /// Box anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Return the same box with normalized fields.
    pub fn normalized(self) -> Self {
        Self::new(self.x, self.y, self.width, self.height)
    }

    /// Right edge.
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Geometric center.
    pub fn center(self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Extent along `axis`.
    pub fn len(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Leading coordinate along `axis`.
    pub fn start(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Return `true` when the box covers no area.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shift by `delta`.
    pub fn translate(self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Scale position and extent about the frame origin.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }

    /// Smallest box covering both boxes.
    pub fn union(self, other: Self) -> Self {
        Self::from_rect(self.to_rect().union(other.to_rect()))
    }

    /// Return `true` when `other` lies entirely inside `self` (within `eps` pixels).
    pub fn contains_box(self, other: Self, eps: f64) -> bool {
        other.x >= self.x - eps
            && other.y >= self.y - eps
            && other.right() <= self.right() + eps
            && other.bottom() <= self.bottom() + eps
    }

    /// Convert to a `kurbo` rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.right(), self.bottom())
    }

    /// Convert from a `kurbo` rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        let r = rect.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

/// Per-edge lengths (padding, insets, overflow).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    /// Top edge.
    #[serde(default)]
    pub top: f64,
    /// Right edge.
    #[serde(default)]
    pub right: f64,
    /// Bottom edge.
    #[serde(default)]
    pub bottom: f64,
    /// Left edge.
    #[serde(default)]
    pub left: f64,
}

impl Edges {
    /// Same value on every edge.
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// `(start, end)` pair along `axis`.
    pub fn along(self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Horizontal => (self.left, self.right),
            Axis::Vertical => (self.top, self.bottom),
        }
    }

    /// Overwrite the `(start, end)` pair along `axis`.
    pub fn set_along(&mut self, axis: Axis, start: f64, end: f64) {
        match axis {
            Axis::Horizontal => {
                self.left = start;
                self.right = end;
            }
            Axis::Vertical => {
                self.top = start;
                self.bottom = end;
            }
        }
    }

    /// Multiply every edge by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            top: self.top * factor,
            right: self.right * factor,
            bottom: self.bottom * factor,
            left: self.left * factor,
        }
    }

    /// Edge-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self {
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
        }
    }

    /// Replace non-finite or negative edges with zero.
    pub fn sanitized(self) -> Self {
        let f = |v: f64| finite_or(v, 0.0).max(0.0);
        Self {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }

    /// Sum of the horizontal edges.
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// Sum of the vertical edges.
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    /// Return `true` when any edge is positive.
    pub fn any_positive(self) -> bool {
        self.top > 0.0 || self.right > 0.0 || self.bottom > 0.0 || self.left > 0.0
    }
}

/// Layout axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Component of `size` along this axis.
    pub fn of_size(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

/// Target canvas dimensions with degenerate values clamped to one pixel.
pub fn sanitize_target(size: Size) -> Size {
    let f = |v: f64| {
        let v = finite_or(v, 1.0);
        if v <= 0.0 { 1.0 } else { v }
    };
    Size::new(f(size.width), f(size.height))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

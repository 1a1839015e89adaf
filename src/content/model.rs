use crate::foundation::core::{Axis, BoxPx, Edges};
use crate::foundation::error::{RetargetError, RetargetResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Structural kind of a content node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Node without children (text, shape, image).
    #[default]
    Leaf,
    /// Node that owns children (frame, group, component).
    Container,
}

/// Vector or primitive shape flavor of a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveKind {
    /// Rectangle.
    Rectangle,
    /// Ellipse or circle.
    Ellipse,
    /// Regular polygon.
    Polygon,
    /// Star.
    Star,
    /// Straight line.
    Line,
    /// Free vector path.
    Vector,
    /// Boolean combination of shapes.
    BooleanOp,
}

/// Flow (auto-layout) direction of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowMode {
    /// Children stacked left to right.
    StackedHorizontal,
    /// Children stacked top to bottom.
    StackedVertical,
    /// Children positioned absolutely.
    #[default]
    #[serde(rename = "none")]
    Freeform,
}

impl FlowMode {
    /// Main axis of a stacked mode, `None` for freeform.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::StackedHorizontal => Some(Axis::Horizontal),
            Self::StackedVertical => Some(Axis::Vertical),
            Self::Freeform => None,
        }
    }

    /// Stacked mode for `axis`.
    pub fn stacked(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::StackedHorizontal,
            Axis::Vertical => Self::StackedVertical,
        }
    }

    /// Return `true` for the two stacked modes.
    pub fn is_stacked(self) -> bool {
        self != Self::Freeform
    }
}

/// Main-axis distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAlign {
    /// Pack at the start.
    #[default]
    Min,
    /// Center the run.
    Center,
    /// Pack at the end.
    Max,
    /// Spread children, first and last touching the padding.
    SpaceBetween,
}

/// Cross-axis alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAlign {
    /// Align to the start.
    #[default]
    Min,
    /// Center.
    Center,
    /// Align to the end.
    Max,
    /// Text baseline.
    Baseline,
}

/// Flow-layout descriptor of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDescriptor {
    /// Stacking direction.
    #[serde(default)]
    pub mode: FlowMode,
    /// Gap between consecutive children.
    #[serde(default)]
    pub item_spacing: f64,
    /// Inner padding.
    #[serde(default)]
    pub padding: Edges,
    /// Main-axis distribution.
    #[serde(default)]
    pub primary_align: PrimaryAlign,
    /// Cross-axis alignment.
    #[serde(default)]
    pub counter_align: CounterAlign,
    /// Whether children wrap onto new rows.
    #[serde(default)]
    pub wrap: bool,
}

fn default_true() -> bool {
    true
}

/// One node of the captured source tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    /// Stable identifier, unique within the tree.
    pub id: String,
    /// Layer name as authored.
    #[serde(default)]
    pub name: String,
    /// Leaf or container.
    #[serde(default)]
    pub kind: NodeKind,
    /// Box in the parent's frame.
    #[serde(rename = "box", default)]
    pub bbox: BoxPx,
    /// Authored visibility.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Text layer with non-empty characters.
    #[serde(default)]
    pub has_text: bool,
    /// Carries an image fill.
    #[serde(default)]
    pub has_image_fill: bool,
    /// Carries a video fill.
    #[serde(default)]
    pub has_video_fill: bool,
    /// Has a visible solid or gradient fill of its own.
    #[serde(default)]
    pub has_fill: bool,
    /// Has a visible stroke of its own.
    #[serde(default)]
    pub has_stroke: bool,
    /// Vector or primitive shape flavor, if any.
    #[serde(default)]
    pub primitive: Option<PrimitiveKind>,
    /// Instance of a reusable component.
    #[serde(default)]
    pub component_instance: bool,
    /// Artifact drawn by a QA overlay; never part of the composition.
    #[serde(default)]
    pub qa_overlay: bool,
    /// Flow-layout descriptor.
    #[serde(default)]
    pub flow: Option<FlowDescriptor>,
    /// Children in paint order.
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Empty leaf with the given id and box.
    pub fn leaf(id: impl Into<String>, bbox: BoxPx) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Leaf,
            bbox,
            visible: true,
            ..Self::default()
        }
    }

    /// Container with the given id, box and children.
    pub fn container(id: impl Into<String>, bbox: BoxPx, children: Vec<ContentNode>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Container,
            bbox,
            visible: true,
            children,
            ..Self::default()
        }
    }

    /// Set the layer name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark as a non-empty text layer.
    pub fn with_text(mut self) -> Self {
        self.has_text = true;
        self
    }

    /// Mark as carrying an image fill.
    pub fn with_image(mut self) -> Self {
        self.has_image_fill = true;
        self
    }

    /// Mark as carrying an own solid fill.
    pub fn with_fill(mut self) -> Self {
        self.has_fill = true;
        self
    }

    /// Mark as a primitive/vector shape.
    pub fn with_primitive(mut self, kind: PrimitiveKind) -> Self {
        self.primitive = Some(kind);
        self
    }

    /// Mark as a component instance.
    pub fn as_instance(mut self) -> Self {
        self.component_instance = true;
        self
    }

    /// Attach a flow descriptor.
    pub fn with_flow(mut self, flow: FlowDescriptor) -> Self {
        self.flow = Some(flow);
        self
    }

    /// Set authored visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Effective flow mode (`Freeform` without a descriptor).
    pub fn flow_mode(&self) -> FlowMode {
        self.flow.map(|f| f.mode).unwrap_or_default()
    }

    /// Return `true` for containers.
    pub fn is_container(&self) -> bool {
        self.kind == NodeKind::Container || !self.children.is_empty()
    }

    /// Return `true` when the node paints something of its own.
    pub fn has_visible_paint(&self) -> bool {
        self.has_fill
            || self.has_stroke
            || self.has_text
            || self.has_image_fill
            || self.has_video_fill
            || self.primitive.is_some()
    }

    /// Return `true` when the node carries image or video content.
    pub fn has_media(&self) -> bool {
        self.has_image_fill || self.has_video_fill
    }

    /// Strict structural validation for callers that want to reject bad captures up front.
    ///
    /// Planning never requires this; it normalizes degenerate values instead.
    pub fn validate(&self) -> RetargetResult<()> {
        let mut seen = BTreeSet::<&str>::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.id.trim().is_empty() {
                return Err(RetargetError::validation("content node id must be non-empty"));
            }
            if !seen.insert(node.id.as_str()) {
                return Err(RetargetError::validation(format!(
                    "duplicate content node id '{}'",
                    node.id
                )));
            }
            let b = node.bbox;
            if ![b.x, b.y, b.width, b.height].iter().all(|v| v.is_finite()) {
                return Err(RetargetError::validation(format!(
                    "node '{}' has non-finite geometry",
                    node.id
                )));
            }
            if b.width < 0.0 || b.height < 0.0 {
                return Err(RetargetError::validation(format!(
                    "node '{}' has negative size",
                    node.id
                )));
            }
            if let Some(flow) = node.flow
                && (!flow.item_spacing.is_finite() || flow.padding.sanitized() != flow.padding)
            {
                return Err(RetargetError::validation(format!(
                    "node '{}' has invalid flow spacing or padding",
                    node.id
                )));
            }
            stack.extend(node.children.iter());
        }
        Ok(())
    }

    /// Parse a tree from JSON.
    pub fn from_json_str(s: &str) -> RetargetResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;

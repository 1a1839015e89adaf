use crate::content::model::FlowMode;
use crate::foundation::core::{Edges, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether advisory data may override the deterministic heuristics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisoryMode {
    /// Use hints when they are present.
    #[default]
    Enabled,
    /// Ignore hints entirely.
    Disabled,
}

/// Anchor of a node inside its target frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Top-left corner.
    TopLeft,
    /// Top edge center.
    Top,
    /// Top-right corner.
    TopRight,
    /// Left edge center.
    Left,
    /// Center.
    Center,
    /// Right edge center.
    Right,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge center.
    Bottom,
    /// Bottom-right corner.
    BottomRight,
}

impl Anchor {
    /// Horizontal and vertical position of the anchor as fractions of the frame (0 = start).
    pub fn fractions(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::Top => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::Left => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::Right => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::Bottom => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }
}

/// Suggested sizing behavior of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeMode {
    /// Keep the scaled size.
    Fixed,
    /// Shrink to content.
    Hug,
    /// Grow into free space.
    Fill,
}

/// Suggested text sizing behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSizing {
    /// Box grows with the text on both axes.
    AutoWidth,
    /// Fixed width, height follows the text.
    AutoHeight,
    /// Fixed box.
    Fixed,
}

/// Per-node placement suggestion. Every field is optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeHint {
    /// Show or hide the node in this target.
    #[serde(default)]
    pub visible: Option<bool>,
    /// Anchor inside the target safe bounds (freeform placement).
    #[serde(default)]
    pub anchor: Option<Anchor>,
    /// Offset from the anchor in pixels; without an anchor, from the projected position.
    #[serde(default)]
    pub offset: Option<Vec2>,
    /// Sizing behavior.
    #[serde(default)]
    pub size_mode: Option<SizeMode>,
    /// Text sizing behavior.
    #[serde(default)]
    pub text_sizing: Option<TextSizing>,
}

/// Normalized `[0, 1]` focal point of the composition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
    /// Horizontal position, 0 = left.
    pub x: f64,
    /// Vertical position, 0 = top.
    pub y: f64,
}

/// Advisory data for one target, produced by an external (possibly imperfect) predictor.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryHints {
    /// Explicit orientation for the target's root, if the predictor committed to one.
    pub orientation: Option<FlowMode>,
    /// Per-node placement map keyed by source node id.
    pub nodes: BTreeMap<String, NodeHint>,
    /// Focal point biasing edge padding.
    pub focal: Option<FocalPoint>,
    /// Extra margins to reserve on top of the safe area.
    pub insets: Option<Edges>,
    /// Orientation value that was supplied but could not be understood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_orientation: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdvisoryHintsRepr {
    #[serde(default)]
    orientation: Option<serde_json::Value>,
    #[serde(default)]
    nodes: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    focal: Option<serde_json::Value>,
    #[serde(default)]
    insets: Option<serde_json::Value>,
}

/// Accepts the spellings predictors actually emit for an orientation.
pub fn parse_orientation(raw: &str) -> Option<FlowMode> {
    match raw.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
        "horizontal" | "stacked-horizontal" | "row" => Some(FlowMode::StackedHorizontal),
        "vertical" | "stacked-vertical" | "column" => Some(FlowMode::StackedVertical),
        "none" | "freeform" | "absolute" => Some(FlowMode::Freeform),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for AdvisoryHints {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Unusable fields degrade to "absent" instead of failing the whole hint set.
        let repr = AdvisoryHintsRepr::deserialize(deserializer)?;
        let (orientation, rejected_orientation) = match repr.orientation {
            None | Some(serde_json::Value::Null) => (None, None),
            Some(v) => match v.as_str().and_then(parse_orientation) {
                Some(mode) => (Some(mode), None),
                None => (None, Some(v.to_string())),
            },
        };
        let nodes = repr
            .nodes
            .into_iter()
            .filter_map(|(id, v)| serde_json::from_value::<NodeHint>(v).ok().map(|h| (id, h)))
            .collect();
        let focal = repr
            .focal
            .and_then(|v| serde_json::from_value::<FocalPoint>(v).ok())
            .filter(|f| f.x.is_finite() && f.y.is_finite())
            .map(|f| FocalPoint {
                x: f.x.clamp(0.0, 1.0),
                y: f.y.clamp(0.0, 1.0),
            });
        let insets = repr
            .insets
            .and_then(|v| serde_json::from_value::<Edges>(v).ok())
            .map(Edges::sanitized);
        Ok(Self {
            orientation,
            nodes,
            focal,
            insets,
            rejected_orientation,
        })
    }
}

impl AdvisoryHints {
    /// Parse hints, returning `None` for input that is not a JSON object of hints.
    pub fn from_json_lenient(s: &str) -> Option<Self> {
        serde_json::from_str(s).ok()
    }

    /// Return `true` when the hints carry nothing actionable.
    pub fn is_empty(&self) -> bool {
        self.orientation.is_none()
            && self.nodes.is_empty()
            && self.focal.is_none()
            && self.insets.is_none()
            && self.rejected_orientation.is_none()
    }

    /// Placement suggestion for `id`.
    pub fn node(&self, id: &str) -> Option<&NodeHint> {
        self.nodes.get(id)
    }
}

/// Hints as seen by the planner after applying the advisory mode.
#[derive(Clone, Copy, Debug, Default)]
pub enum AdvisoryInput<'a> {
    /// No usable hints for this target.
    #[default]
    Absent,
    /// Hints are present and enabled.
    Present(&'a AdvisoryHints),
}

impl<'a> AdvisoryInput<'a> {
    /// Combine optional hints with the mode. Disabled mode and empty hints both yield `Absent`.
    pub fn resolve(mode: AdvisoryMode, hints: Option<&'a AdvisoryHints>) -> Self {
        match (mode, hints) {
            (AdvisoryMode::Enabled, Some(h)) if !h.is_empty() => Self::Present(h),
            _ => Self::Absent,
        }
    }

    /// Underlying hints when present.
    pub fn hints(self) -> Option<&'a AdvisoryHints> {
        match self {
            Self::Present(h) => Some(h),
            Self::Absent => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/advisory/hints.rs"]
mod tests;

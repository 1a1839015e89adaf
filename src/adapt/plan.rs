use crate::advisory::hints::TextSizing;
use crate::content::arena::NodeMapping;
use crate::content::model::{CounterAlign, FlowMode, PrimaryAlign};
use crate::foundation::core::Edges;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a container sizes itself along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    /// Length pinned to the target.
    Fixed,
    /// Length follows content.
    Auto,
}

/// Per-child cross-axis alignment override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChildAlign {
    /// Fill the cross axis.
    Stretch,
    /// Cross-axis start.
    Min,
    /// Cross-axis center.
    Center,
    /// Cross-axis end.
    Max,
}

/// Corrections for one child. `None` fields leave the authored value alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildOverride {
    /// Flex grow factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grow: Option<f64>,
    /// Cross-axis alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<ChildAlign>,
    /// Minimum width (px).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Maximum width (px).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    /// Minimum height (px).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    /// Maximum height (px).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    /// Visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Text auto-resize behavior for the node mutator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_sizing: Option<TextSizing>,
}

impl ChildOverride {
    /// Return `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Final layout settings for one target container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptationPlan {
    /// Orientation applied to the container.
    pub orientation: FlowMode,
    /// Sizing along the orientation axis.
    pub primary_sizing: SizingMode,
    /// Sizing across the orientation axis.
    pub counter_sizing: SizingMode,
    /// Main-axis distribution.
    pub primary_align: PrimaryAlign,
    /// Cross-axis alignment.
    pub counter_align: CounterAlign,
    /// Whether children wrap onto new lines.
    pub wrap: bool,
    /// Gap between children (px).
    pub item_spacing: f64,
    /// Container padding (px).
    pub padding: Edges,
    /// Overrides keyed by node id. Never holds an id absorbed by an atomic group.
    pub child_overrides: BTreeMap<String, ChildOverride>,
}

impl AdaptationPlan {
    /// Override for `id`, if any.
    pub fn child(&self, id: &str) -> Option<&ChildOverride> {
        self.child_overrides.get(id)
    }

    /// Copy of the plan with override keys translated through `mapping`.
    ///
    /// Keys without a clone-side counterpart are dropped.
    pub fn remapped(&self, mapping: &NodeMapping) -> Self {
        let child_overrides = self
            .child_overrides
            .iter()
            .filter_map(|(id, ov)| Some((mapping.clone_id_for(id)?.to_string(), *ov)))
            .collect();
        Self {
            child_overrides,
            ..self.clone()
        }
    }
}

impl NodeMapping {
    /// Translate `plan` into clone-side ids for the node mutator.
    pub fn remap_plan(&self, plan: &AdaptationPlan) -> AdaptationPlan {
        plan.remapped(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapt/plan.rs"]
mod tests;

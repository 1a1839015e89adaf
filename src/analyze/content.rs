use crate::content::arena::NodeArena;
use crate::content::model::{ContentNode, FlowMode};
use crate::foundation::core::BoxPx;
use serde::{Deserialize, Serialize};

/// Direct-child count at or below which content is sparse.
pub const SPARSE_MAX_CHILDREN: usize = 2;
/// Direct-child count above which content is dense.
pub const DENSE_MIN_CHILDREN: usize = 10;
/// Text-only content with an effective `width / height` below this reflows.
pub const REFLOW_MIN_ASPECT: f64 = 0.5;
/// Text-only content with an effective `width / height` above this reflows.
pub const REFLOW_MAX_ASPECT: f64 = 2.0;

/// How crowded the top level of the composition is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentDensity {
    /// Two or fewer visible children.
    Sparse,
    /// Between sparse and dense.
    Normal,
    /// More than ten visible children.
    Dense,
}

/// Scaling strategy recommended for the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleStrategy {
    /// Cover the target, trading some crop risk for presence.
    Fill,
    /// Fit entirely inside the target.
    Fit,
    /// Profile-aware blend of both axes.
    Adaptive,
    /// Favor the long axis for re-flowable text.
    Reflow,
    /// Favor the profile's dominant axis for imagery.
    Stretch,
}

/// Summary of the source composition used by every later planning step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// Union of painted descendants in the root frame, `None` when nothing paints.
    pub actual_content_box: Option<BoxPx>,
    /// The root runs a flow layout.
    pub has_auto_layout: bool,
    /// The root's flow mode.
    pub layout_direction: FlowMode,
    /// Visible direct children of the root.
    pub child_count: usize,
    /// Some visible descendant is non-empty text.
    pub has_text: bool,
    /// Some visible descendant carries an image or video fill.
    pub has_images: bool,
    /// Density band of the top level.
    pub content_density: ContentDensity,
    /// Strategy chosen by the decision table.
    pub recommended_strategy: ScaleStrategy,
    /// Width used for scaling, `>= 1`.
    pub effective_width: f64,
    /// Height used for scaling, `>= 1`.
    pub effective_height: f64,
}

impl ContentAnalysis {
    /// Box used for scaling: the painted content, or the root box when nothing paints.
    pub fn effective_box(&self) -> BoxPx {
        self.actual_content_box
            .unwrap_or_else(|| BoxPx::from_size(self.effective_width, self.effective_height))
    }
}

/// Inputs of the strategy decision table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrategySignals {
    /// Density band.
    pub density: ContentDensity,
    /// The root runs a flow layout.
    pub has_auto_layout: bool,
    /// Text is present.
    pub has_text: bool,
    /// Images are present.
    pub has_images: bool,
    /// Effective `width / height`.
    pub aspect: f64,
}

/// Density band from the number of visible direct children.
pub fn density_for(child_count: usize) -> ContentDensity {
    if child_count <= SPARSE_MAX_CHILDREN {
        ContentDensity::Sparse
    } else if child_count > DENSE_MIN_CHILDREN {
        ContentDensity::Dense
    } else {
        ContentDensity::Normal
    }
}

/// The strategy table. First matching row wins.
pub fn choose_strategy(s: StrategySignals) -> ScaleStrategy {
    match s {
        StrategySignals {
            density: ContentDensity::Sparse,
            ..
        } => ScaleStrategy::Fill,
        StrategySignals {
            density: ContentDensity::Dense,
            has_auto_layout: true,
            ..
        } => ScaleStrategy::Adaptive,
        StrategySignals {
            has_text: true,
            has_images: false,
            aspect,
            ..
        } => {
            if (REFLOW_MIN_ASPECT..=REFLOW_MAX_ASPECT).contains(&aspect) {
                ScaleStrategy::Adaptive
            } else {
                ScaleStrategy::Reflow
            }
        }
        StrategySignals {
            has_text: false,
            has_images: true,
            ..
        } => ScaleStrategy::Stretch,
        _ => ScaleStrategy::Adaptive,
    }
}

/// Analyze a source tree.
pub fn analyze_content(root: &ContentNode) -> ContentAnalysis {
    analyze_arena(&NodeArena::build(root))
}

pub(crate) fn analyze_arena(arena: &NodeArena<'_>) -> ContentAnalysis {
    let root = arena.root();
    let mut bounds: Option<BoxPx> = None;
    let mut has_text = false;
    let mut has_images = false;

    for entry in arena.entries.iter().skip(1) {
        if !entry.visible || !entry.node.has_visible_paint() {
            continue;
        }
        has_text |= entry.node.has_text;
        has_images |= entry.node.has_media();
        let b = entry.absolute_box();
        if b.is_empty() {
            continue;
        }
        bounds = Some(match bounds {
            Some(acc) => acc.union(b),
            None => b,
        });
    }

    let root_box = root.node.bbox.normalized();
    let (effective_width, effective_height) = match bounds {
        Some(b) => (b.width.max(1.0), b.height.max(1.0)),
        None => (root_box.width.max(1.0), root_box.height.max(1.0)),
    };

    let child_count = arena.visible_root_children().count();
    let layout_direction = root.node.flow_mode();
    let has_auto_layout = layout_direction.is_stacked();
    let content_density = density_for(child_count);
    let recommended_strategy = choose_strategy(StrategySignals {
        density: content_density,
        has_auto_layout,
        has_text,
        has_images,
        aspect: effective_width / effective_height,
    });

    ContentAnalysis {
        actual_content_box: bounds,
        has_auto_layout,
        layout_direction,
        child_count,
        has_text,
        has_images,
        content_density,
        recommended_strategy,
        effective_width,
        effective_height,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analyze/content.rs"]
mod tests;

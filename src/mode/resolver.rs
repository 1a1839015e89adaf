use crate::advisory::hints::AdvisoryInput;
use crate::analyze::profile::LayoutProfile;
use crate::content::model::FlowMode;
use crate::foundation::math::{finite_or, safe_div};
use serde::{Deserialize, Serialize};

/// Target aspect (`h / w`) at which text-heavy rows convert to columns.
pub const EAGER_CONVERT_ASPECT: f64 = 1.3;
/// Target aspect at which ordinary rows convert to columns.
pub const DEFAULT_CONVERT_ASPECT: f64 = 1.6;
/// Target aspect at which image-dominant few-child rows convert to columns.
pub const RELUCTANT_CONVERT_ASPECT: f64 = 2.2;
/// Aspect change (as a ratio, either direction) that makes freeform content stack.
pub const FREEFORM_CONVERT_RATIO: f64 = 1.8;
/// Child count at or below which image-dominant content counts as "few-child".
pub const FEW_CHILDREN: usize = 3;

/// Inputs of the deterministic tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeInput {
    /// Flow mode of the source root.
    pub source_mode: FlowMode,
    /// Visible direct children.
    pub child_count: usize,
    /// Direct children whose subtree holds text.
    pub text_children: usize,
    /// Direct children whose subtree holds images or video.
    pub image_children: usize,
    /// Source `height / width`.
    pub source_aspect: f64,
    /// Target `height / width`.
    pub target_aspect: f64,
    /// Target profile.
    pub profile: LayoutProfile,
}

/// Which tier produced the decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionTier {
    /// Explicit advisory orientation.
    AdvisoryOrientation,
    /// Advisory placement data without orientation; source flow kept.
    AdvisoryPreserve,
    /// Deterministic heuristics.
    Heuristic,
}

/// Why the heuristic tier chose what it chose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeReason {
    /// Taken from the advisory hint.
    Hinted,
    /// Source flow kept because advisory positioning handles the rest.
    HintedPreserve,
    /// Row became a column on a tall target.
    TallTargetConversion,
    /// Column became a row on a wide target.
    WideTargetConversion,
    /// Freeform content stacked after a large aspect change.
    FreeformAspectShift,
    /// Nothing crossed a threshold.
    Preserved,
    /// Too few children for a conversion to matter.
    SingleChild,
}

/// Resolved orientation for one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeDecision {
    /// Orientation to apply.
    pub orientation: FlowMode,
    /// Tier that decided.
    pub tier: DecisionTier,
    /// Detail of the decision.
    pub reason: ModeReason,
}

impl ModeDecision {
    /// Return `true` when the orientation differs from `source`.
    pub fn converts_from(&self, source: FlowMode) -> bool {
        self.orientation != source
    }
}

/// Content mix, used to pick how eagerly a stack converts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContentMix {
    TextHeavy,
    ImageDominantFew,
    Balanced,
}

fn content_mix(input: &ModeInput) -> ContentMix {
    let n = input.child_count;
    if n >= 2 && input.text_children * 2 >= n {
        ContentMix::TextHeavy
    } else if n <= FEW_CHILDREN && input.image_children * 2 > n {
        ContentMix::ImageDominantFew
    } else {
        ContentMix::Balanced
    }
}

/// Target aspect at or above which a row converts to a column for this content mix.
fn convert_threshold(mix: ContentMix) -> f64 {
    match mix {
        ContentMix::TextHeavy => EAGER_CONVERT_ASPECT,
        ContentMix::ImageDominantFew => RELUCTANT_CONVERT_ASPECT,
        ContentMix::Balanced => DEFAULT_CONVERT_ASPECT,
    }
}

/// The deterministic tier on its own.
pub fn heuristic_mode(input: &ModeInput) -> ModeDecision {
    let decided = |orientation, reason| ModeDecision {
        orientation,
        tier: DecisionTier::Heuristic,
        reason,
    };
    let target = finite_or(input.target_aspect, 1.0).max(f64::MIN_POSITIVE);
    let source = finite_or(input.source_aspect, 1.0).max(f64::MIN_POSITIVE);

    if input.child_count < 2 {
        return decided(input.source_mode, ModeReason::SingleChild);
    }

    let threshold = convert_threshold(content_mix(input));
    match input.source_mode {
        FlowMode::StackedHorizontal if target >= threshold => {
            decided(FlowMode::StackedVertical, ModeReason::TallTargetConversion)
        }
        FlowMode::StackedVertical if target <= 1.0 / threshold => {
            decided(FlowMode::StackedHorizontal, ModeReason::WideTargetConversion)
        }
        FlowMode::Freeform => {
            let shift = safe_div(target, source, 1.0).max(safe_div(source, target, 1.0));
            match input.profile.dominant_axis() {
                Some(axis) if shift >= FREEFORM_CONVERT_RATIO => {
                    decided(FlowMode::stacked(axis), ModeReason::FreeformAspectShift)
                }
                _ => decided(FlowMode::Freeform, ModeReason::Preserved),
            }
        }
        mode => decided(mode, ModeReason::Preserved),
    }
}

/// Resolve the target orientation. Advisory data wins; heuristics are the safety net.
///
/// Present hints without an orientation (node map, focal point or insets only) keep the source
/// flow. An orientation that was supplied but could not be parsed falls through to heuristics.
pub fn resolve_mode(input: &ModeInput, advisory: AdvisoryInput<'_>) -> ModeDecision {
    if let Some(hints) = advisory.hints() {
        if let Some(orientation) = hints.orientation {
            return ModeDecision {
                orientation,
                tier: DecisionTier::AdvisoryOrientation,
                reason: ModeReason::Hinted,
            };
        }
        if hints.rejected_orientation.is_none() {
            return ModeDecision {
                orientation: input.source_mode,
                tier: DecisionTier::AdvisoryPreserve,
                reason: ModeReason::HintedPreserve,
            };
        }
    }
    heuristic_mode(input)
}

#[cfg(test)]
#[path = "../../tests/unit/mode/resolver.rs"]
mod tests;

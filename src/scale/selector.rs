//! Uniform scale selection.
//!
//! The per-strategy factors below were tuned by eye against real variant sets. They are kept
//! as named constants so a design review can revisit them in one place.

use crate::analyze::content::{ContentAnalysis, ScaleStrategy};
use crate::analyze::profile::LayoutProfile;
use crate::foundation::core::{Edges, Size, sanitize_target};
use crate::foundation::math::{finite_or, lerp, safe_div};
use serde::{Deserialize, Serialize};

/// Headroom factor applied to the larger axis scale by `fill`.
pub const FILL_FACTOR: f64 = 0.95;
/// Headroom factor applied to the smaller axis scale by `fit`.
pub const FIT_FACTOR: f64 = 0.98;
/// Headroom factor applied to the dominant-axis scale by `stretch`.
pub const STRETCH_FACTOR: f64 = 0.9;
/// Weight of the profile's long axis in `reflow`.
pub const REFLOW_PRIMARY_WEIGHT: f64 = 0.7;
/// Headroom factor applied to the preferred axis by `adaptive`.
pub const ADAPTIVE_FACTOR: f64 = 0.95;
/// Relative overshoot of the preferred axis tolerated by `adaptive` before blending.
pub const ADAPTIVE_OVERSHOOT_TOLERANCE: f64 = 0.05;
/// How far `adaptive` moves from the limiting axis toward the preferred one once blending.
pub const ADAPTIVE_OVERSHOOT_BLEND: f64 = 0.3;
/// Weight of the smaller axis scale in the square-profile blend.
pub const SQUARE_MIN_WEIGHT: f64 = 0.6;
/// Weight of the mean axis scale in the square-profile blend.
pub const SQUARE_MEAN_WEIGHT: f64 = 0.4;

/// Lower bound of every scale.
pub const MIN_SCALE: f64 = 0.3;
/// Upper bound for content with raster media.
pub const MAX_SCALE_WITH_IMAGES: f64 = 12.0;
/// Upper bound for vector-only content.
pub const MAX_SCALE_VECTOR: f64 = 60.0;
/// Overshoot allowed past the containing scale; safe-area padding absorbs it.
pub const OVERSHOOT_ALLOWANCE: f64 = 1.10;

/// Inputs of [`select_scale`].
#[derive(Clone, Copy, Debug)]
pub struct ScaleInput<'a> {
    /// Analysis of the source content.
    pub analysis: &'a ContentAnalysis,
    /// Target canvas size.
    pub target: Size,
    /// Safe-area insets of the target.
    pub insets: Edges,
    /// Target profile.
    pub profile: LayoutProfile,
}

/// The chosen uniform scale and the intermediate values it came from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleDecision {
    /// Final scale factor.
    pub scale: f64,
    /// `availableWidth / effectiveWidth`.
    pub width_scale: f64,
    /// `availableHeight / effectiveHeight`.
    pub height_scale: f64,
    /// Strategy that produced the candidate.
    pub strategy: ScaleStrategy,
    /// Candidate before capping and clamping.
    pub candidate: f64,
}

impl ScaleDecision {
    /// The scale at which the content exactly fits the available area.
    pub fn containing_scale(&self) -> f64 {
        self.width_scale.min(self.height_scale)
    }
}

/// Upper clamp bound for `has_images`.
pub fn max_scale(has_images: bool) -> f64 {
    if has_images {
        MAX_SCALE_WITH_IMAGES
    } else {
        MAX_SCALE_VECTOR
    }
}

/// Raw candidate for a strategy before any capping.
pub fn strategy_candidate(
    strategy: ScaleStrategy,
    profile: LayoutProfile,
    width_scale: f64,
    height_scale: f64,
) -> f64 {
    let (ws, hs) = (width_scale, height_scale);
    let min = ws.min(hs);
    let mean = (ws + hs) * 0.5;
    match strategy {
        ScaleStrategy::Fill => ws.max(hs) * FILL_FACTOR,
        ScaleStrategy::Fit => min * FIT_FACTOR,
        ScaleStrategy::Stretch => {
            let dominant = match profile {
                LayoutProfile::Vertical => hs,
                LayoutProfile::Horizontal => ws,
                LayoutProfile::Square => mean,
            };
            dominant * STRETCH_FACTOR
        }
        ScaleStrategy::Reflow => {
            let (primary, secondary) = match profile {
                LayoutProfile::Vertical => (hs, ws),
                LayoutProfile::Horizontal | LayoutProfile::Square => (ws, hs),
            };
            lerp(secondary, primary, REFLOW_PRIMARY_WEIGHT).min(secondary)
        }
        ScaleStrategy::Adaptive => match profile {
            LayoutProfile::Vertical => adaptive_toward(hs, ws),
            LayoutProfile::Horizontal => adaptive_toward(ws, hs),
            LayoutProfile::Square => SQUARE_MIN_WEIGHT * min + SQUARE_MEAN_WEIGHT * mean,
        },
    }
}

/// Prefer `preferred` unless it overshoots `limiting` past the tolerance, then blend.
fn adaptive_toward(preferred: f64, limiting: f64) -> f64 {
    if preferred <= limiting * (1.0 + ADAPTIVE_OVERSHOOT_TOLERANCE) {
        preferred * ADAPTIVE_FACTOR
    } else {
        lerp(limiting, preferred, ADAPTIVE_OVERSHOOT_BLEND)
    }
}

/// Pick the uniform scale for one target.
pub fn select_scale(input: ScaleInput<'_>) -> ScaleDecision {
    let target = sanitize_target(input.target);
    let insets = input.insets.sanitized();
    let available_w = (target.width - insets.horizontal()).max(1.0);
    let available_h = (target.height - insets.vertical()).max(1.0);

    let width_scale = safe_div(available_w, input.analysis.effective_width.max(1.0), MIN_SCALE);
    let height_scale = safe_div(available_h, input.analysis.effective_height.max(1.0), MIN_SCALE);
    let strategy = input.analysis.recommended_strategy;

    let candidate = finite_or(
        strategy_candidate(strategy, input.profile, width_scale, height_scale),
        MIN_SCALE,
    );
    let cap = width_scale.min(height_scale) * OVERSHOOT_ALLOWANCE;
    // The floor wins over the overshoot cap when content is far larger than the target.
    let scale = finite_or(
        candidate
            .min(cap)
            .clamp(MIN_SCALE, max_scale(input.analysis.has_images)),
        MIN_SCALE,
    );

    ScaleDecision {
        scale,
        width_scale,
        height_scale,
        strategy,
        candidate,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/selector.rs"]
mod tests;

use crate::foundation::core::{Axis, Size, sanitize_target};
use serde::{Deserialize, Serialize};

/// `height / width` at or above which a target is vertical.
pub const VERTICAL_MIN_ASPECT: f64 = 1.2;
/// `height / width` at or below which a target is horizontal.
pub const HORIZONTAL_MAX_ASPECT: f64 = 0.8;

const STRONG_VERTICAL_ASPECT: f64 = 2.0;
const STRONG_HORIZONTAL_ASPECT: f64 = 0.5;
const WEAK_BAND: f64 = 0.1;

/// Coarse aspect-ratio category of a target canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutProfile {
    /// Taller than wide.
    Vertical,
    /// Roughly square.
    Square,
    /// Wider than tall.
    Horizontal,
}

impl LayoutProfile {
    /// Classify a target size.
    pub fn for_target(size: Size) -> Self {
        Self::for_aspect(target_aspect(size))
    }

    /// Classify a `height / width` ratio.
    pub fn for_aspect(aspect: f64) -> Self {
        if aspect >= VERTICAL_MIN_ASPECT {
            Self::Vertical
        } else if aspect <= HORIZONTAL_MAX_ASPECT {
            Self::Horizontal
        } else {
            Self::Square
        }
    }

    /// The long axis, `None` for square targets.
    pub fn dominant_axis(self) -> Option<Axis> {
        match self {
            Self::Vertical => Some(Axis::Vertical),
            Self::Horizontal => Some(Axis::Horizontal),
            Self::Square => None,
        }
    }
}

/// How far a reading sits from the classification thresholds.
///
/// Informational only: no decision in the crate branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileConfidence {
    /// Extreme aspect, far from any threshold.
    Strong,
    /// Clearly inside its band.
    Moderate,
    /// Within a small margin of a threshold.
    Weak,
}

/// Profile together with the measured aspect and a confidence band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileReading {
    /// Classified profile.
    pub profile: LayoutProfile,
    /// `height / width` of the sanitized target.
    pub aspect: f64,
    /// Confidence band of the classification.
    pub confidence: ProfileConfidence,
}

/// `height / width` with degenerate dimensions clamped to one pixel.
pub fn target_aspect(size: Size) -> f64 {
    let s = sanitize_target(size);
    s.height / s.width
}

/// Classify a target and report confidence.
pub fn classify_profile(size: Size) -> ProfileReading {
    let aspect = target_aspect(size);
    let profile = LayoutProfile::for_aspect(aspect);
    let near = |threshold: f64| (aspect - threshold).abs() <= WEAK_BAND;
    let confidence = if !(STRONG_HORIZONTAL_ASPECT..STRONG_VERTICAL_ASPECT).contains(&aspect) {
        ProfileConfidence::Strong
    } else if near(VERTICAL_MIN_ASPECT) || near(HORIZONTAL_MAX_ASPECT) {
        ProfileConfidence::Weak
    } else {
        ProfileConfidence::Moderate
    };
    ProfileReading {
        profile,
        aspect,
        confidence,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analyze/profile.rs"]
mod tests;

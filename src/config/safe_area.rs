use crate::foundation::core::{Edges, Size, sanitize_target};
use crate::foundation::error::{RetargetError, RetargetResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default inset as a share of the matching dimension.
pub const DEFAULT_INSET_RATIO: f64 = 0.04;
/// Default hard minimum inset (px).
pub const DEFAULT_INSET_FLOOR: f64 = 16.0;
/// Exclusive upper bound on inset ratios.
pub const MAX_INSET_RATIO: f64 = 0.5;

/// Inset rule for one target: per-edge ratio of the dimension plus a pixel floor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeAreaSpec {
    /// Share of width (left/right) or height (top/bottom).
    pub ratio: Edges,
    /// Hard minimum per edge (px).
    pub floor: Edges,
}

impl Default for SafeAreaSpec {
    fn default() -> Self {
        Self {
            ratio: Edges::uniform(DEFAULT_INSET_RATIO),
            floor: Edges::uniform(DEFAULT_INSET_FLOOR),
        }
    }
}

impl SafeAreaSpec {
    /// Insets for a target: `max(dimension * ratio, floor)` per edge.
    pub fn insets(&self, target: Size) -> Edges {
        let t = sanitize_target(target);
        let r = self.ratio.sanitized();
        let f = self.floor.sanitized();
        Edges {
            top: (t.height * r.top).max(f.top),
            right: (t.width * r.right).max(f.right),
            bottom: (t.height * r.bottom).max(f.bottom),
            left: (t.width * r.left).max(f.left),
        }
    }

    fn validate(&self, label: &str) -> RetargetResult<()> {
        let ratios = [self.ratio.top, self.ratio.right, self.ratio.bottom, self.ratio.left];
        if ratios
            .iter()
            .any(|r| !r.is_finite() || *r < 0.0 || *r >= MAX_INSET_RATIO)
        {
            return Err(RetargetError::config(format!(
                "safe area '{label}': ratios must lie in [0, {MAX_INSET_RATIO})"
            )));
        }
        let floors = [self.floor.top, self.floor.right, self.floor.bottom, self.floor.left];
        if floors.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(RetargetError::config(format!(
                "safe area '{label}': floors must be finite and >= 0"
            )));
        }
        Ok(())
    }
}

/// Safe-area rules: a default plus per-target overrides keyed by target id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeAreaConfig {
    /// Rule for targets without an override.
    pub default: SafeAreaSpec,
    /// Overrides by target id.
    pub targets: BTreeMap<String, SafeAreaSpec>,
}

impl SafeAreaConfig {
    /// Rule that applies to `target_id`.
    pub fn spec_for(&self, target_id: &str) -> &SafeAreaSpec {
        self.targets.get(target_id).unwrap_or(&self.default)
    }

    /// Insets for `target_id` at `size`.
    pub fn insets_for(&self, target_id: &str, size: Size) -> Edges {
        self.spec_for(target_id).insets(size)
    }

    /// Check every rule.
    pub fn validate(&self) -> RetargetResult<()> {
        self.default.validate("default")?;
        for (id, spec) in &self.targets {
            spec.validate(id)?;
        }
        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_json_str(s: &str) -> RetargetResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/safe_area.rs"]
mod tests;

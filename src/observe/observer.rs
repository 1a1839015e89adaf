use crate::analyze::content::{ContentDensity, ScaleStrategy};
use crate::expand::planner::AxisExpansionPlan;
use crate::foundation::core::Axis;
use crate::mode::resolver::ModeDecision;
use crate::project::absolute::ProjectionMode;
use crate::qa::warnings::QaWarning;
use crate::scale::selector::ScaleDecision;
use serde::Serialize;
use std::sync::Mutex;

/// One planning decision, reported as it is made.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum PlanEvent {
    /// Scale strategy recommended by the content analysis.
    Strategy {
        /// Target id.
        target: String,
        /// Chosen strategy.
        strategy: ScaleStrategy,
        /// Density that drove it.
        density: ContentDensity,
    },
    /// Final scale.
    Scale {
        /// Target id.
        target: String,
        /// Decision details.
        decision: ScaleDecision,
    },
    /// Resolved orientation.
    Mode {
        /// Target id.
        target: String,
        /// Decision details.
        decision: ModeDecision,
    },
    /// Free-space plan for one axis.
    Axis {
        /// Target id.
        target: String,
        /// Axis planned.
        axis: Axis,
        /// Plan.
        plan: AxisExpansionPlan,
    },
    /// Freeform projection branch.
    Projection {
        /// Target id.
        target: String,
        /// Branch taken.
        mode: ProjectionMode,
    },
    /// QA warning.
    Warning {
        /// Target id.
        target: String,
        /// Warning.
        warning: QaWarning,
    },
}

/// Receives planning decisions. Shared across worker threads.
pub trait PlanObserver: Send + Sync {
    /// Called once per decision.
    fn on_event(&self, event: &PlanEvent) {
        let _ = event;
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}

/// Forwards events to `tracing`: decisions at debug, warnings at warn.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl PlanObserver for TracingObserver {
    fn on_event(&self, event: &PlanEvent) {
        match event {
            PlanEvent::Strategy {
                target,
                strategy,
                density,
            } => tracing::debug!(target_id = %target, ?strategy, ?density, "scale strategy"),
            PlanEvent::Scale { target, decision } => tracing::debug!(
                target_id = %target,
                scale = decision.scale,
                width_scale = decision.width_scale,
                height_scale = decision.height_scale,
                candidate = decision.candidate,
                "scale selected"
            ),
            PlanEvent::Mode { target, decision } => tracing::debug!(
                target_id = %target,
                orientation = ?decision.orientation,
                tier = ?decision.tier,
                reason = ?decision.reason,
                "layout mode resolved"
            ),
            PlanEvent::Axis { target, axis, plan } => tracing::debug!(
                target_id = %target,
                ?axis,
                start = plan.start,
                end = plan.end,
                interior = plan.interior,
                grow_remainder = plan.grow_remainder,
                "axis expansion planned"
            ),
            PlanEvent::Projection { target, mode } => {
                tracing::debug!(target_id = %target, ?mode, "freeform children projected")
            }
            PlanEvent::Warning { target, warning } => {
                tracing::warn!(target_id = %target, ?warning, "layout qa warning")
            }
        }
    }
}

/// Keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<PlanEvent>>,
}

impl RecordingObserver {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events so far.
    pub fn events(&self) -> Vec<PlanEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Events for one target, in arrival order.
    pub fn events_for(&self, target_id: &str) -> Vec<PlanEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.target() == target_id)
            .collect()
    }
}

impl PlanObserver for RecordingObserver {
    fn on_event(&self, event: &PlanEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}

impl PlanEvent {
    /// Target the event belongs to.
    pub fn target(&self) -> &str {
        match self {
            Self::Strategy { target, .. }
            | Self::Scale { target, .. }
            | Self::Mode { target, .. }
            | Self::Axis { target, .. }
            | Self::Projection { target, .. }
            | Self::Warning { target, .. } => target,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/observe/observer.rs"]
mod tests;

//! Retarget is a deterministic layout retargeting engine.
//!
//! One source composition (a tree of positioned boxes with optional flow-layout semantics) is
//! planned into many target canvases of arbitrary size and aspect ratio. For every target the
//! engine picks a uniform scale, an orientation, a padding/spacing distribution and per-node
//! corrections, using plain geometry only.
//!
//! The public API is session-oriented:
//!
//! - Capture or deserialize a [`ContentNode`] tree
//! - Create a [`Retargeter`] (front-loads analysis and atomic groups)
//! - Plan a single [`TargetRequest`] or fan out many with [`Retargeter::plan_targets`]
//!
//! Every planning component is also exposed on its own for hosts that drive the steps directly.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod adapt;
pub mod advisory;
pub mod analyze;
pub mod atomic;
pub mod config;
pub mod content;
pub mod expand;
pub mod foundation;
pub mod mode;
pub mod observe;
pub mod project;
pub mod qa;
pub mod scale;
pub mod session;

pub use crate::foundation::core::{Axis, BoxPx, Edges, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{RetargetError, RetargetResult};

pub use crate::adapt::adapter::{AdaptInput, adapt};
pub use crate::adapt::plan::{AdaptationPlan, ChildAlign, ChildOverride, SizingMode};
pub use crate::advisory::hints::{AdvisoryHints, AdvisoryInput, AdvisoryMode, NodeHint};
pub use crate::analyze::content::{ContentAnalysis, ContentDensity, ScaleStrategy, analyze_content};
pub use crate::analyze::profile::{LayoutProfile, ProfileReading, classify_profile};
pub use crate::atomic::classifier::{AtomicGroupSet, AtomicReason};
pub use crate::config::safe_area::{SafeAreaConfig, SafeAreaSpec};
pub use crate::content::arena::NodeMapping;
pub use crate::content::model::{ContentNode, FlowDescriptor, FlowMode};
pub use crate::expand::planner::{AxisExpansionInput, AxisExpansionPlan, plan_axis};
pub use crate::mode::resolver::{ModeDecision, ModeInput, resolve_mode};
pub use crate::observe::observer::{
    NoopObserver, PlanEvent, PlanObserver, RecordingObserver, TracingObserver,
};
pub use crate::project::absolute::{Projection, ProjectionMode, project_absolute};
pub use crate::qa::warnings::QaWarning;
pub use crate::scale::selector::{ScaleDecision, ScaleInput, select_scale};
pub use crate::session::retargeter::{RetargetOpts, Retargeter, TargetRequest, VariantPlan};

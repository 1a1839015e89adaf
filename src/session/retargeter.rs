use crate::adapt::adapter::{AdaptInput, adapt};
use crate::adapt::plan::AdaptationPlan;
use crate::advisory::hints::{AdvisoryHints, AdvisoryInput, AdvisoryMode};
use crate::analyze::content::{ContentAnalysis, analyze_arena};
use crate::analyze::profile::{LayoutProfile, ProfileReading, classify_profile};
use crate::atomic::classifier::{AtomicGroupSet, classify_arena};
use crate::config::safe_area::SafeAreaConfig;
use crate::content::arena::NodeArena;
use crate::content::model::{ContentNode, FlowMode};
use crate::expand::padding::AxisInsets;
use crate::expand::planner::{AxisExpansionInput, AxisExpansionPlan, plan_axis};
use crate::foundation::core::{Axis, BoxPx, Edges, Size, sanitize_target};
use crate::foundation::error::{RetargetError, RetargetResult};
use crate::foundation::math::safe_div;
use crate::mode::resolver::{ModeDecision, ModeInput, resolve_mode};
use crate::observe::observer::{PlanEvent, PlanObserver, TracingObserver};
use crate::project::absolute::{
    FreeformChild, Projection, apply_placement_hints, measure_bounds, project_absolute,
};
use crate::qa::warnings::{PlacedBox, QaWarning, collect_warnings, predict_run, safe_bounds};
use crate::scale::selector::{ScaleDecision, ScaleInput, select_scale};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One target canvas to plan for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetRequest {
    /// Target id, also the key for per-target safe-area rules.
    pub id: String,
    /// Canvas size in pixels.
    pub size: Size,
    /// Advisory data for this target.
    #[serde(default)]
    pub advisory: Option<AdvisoryHints>,
}

impl TargetRequest {
    /// Request without advisory data.
    pub fn new(id: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            size,
            advisory: None,
        }
    }

    /// Attach advisory data.
    pub fn with_advisory(mut self, hints: AdvisoryHints) -> Self {
        self.advisory = Some(hints);
        self
    }
}

/// Options controlling [`Retargeter::plan_targets`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetargetOpts {
    /// Plan targets on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Whether advisory hints take part in planning.
    pub advisory: AdvisoryMode,
}

impl Default for RetargetOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            advisory: AdvisoryMode::Enabled,
        }
    }
}

/// Everything planned for one target.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantPlan {
    /// Target id.
    pub target_id: String,
    /// Sanitized target size.
    pub target: Size,
    /// Target profile.
    pub profile: ProfileReading,
    /// Source analysis.
    pub analysis: ContentAnalysis,
    /// Safe-area insets of the target.
    pub safe_insets: Edges,
    /// Scale decision.
    pub scale: ScaleDecision,
    /// Orientation decision.
    pub mode: ModeDecision,
    /// Free-space plan along the orientation axis (stacked orientations only).
    pub primary_axis: Option<AxisExpansionPlan>,
    /// Free-space plan across the orientation axis (stacked orientations only).
    pub counter_axis: Option<AxisExpansionPlan>,
    /// Final container settings.
    pub adaptation: AdaptationPlan,
    /// Child placement (freeform orientation only).
    pub projection: Option<Projection>,
    /// Predicted child boxes in the target frame.
    pub predicted: Vec<PlacedBox>,
    /// QA findings on the predicted geometry.
    pub warnings: Vec<QaWarning>,
}

/// A visible direct child of the source, in the root-local frame.
#[derive(Clone, Debug)]
struct FlowChild {
    id: String,
    bbox: BoxPx,
    has_text: bool,
    has_media: bool,
}

/// Per-target values shared by both axis plans.
struct StackedContext<'a> {
    target_id: &'a str,
    target: Size,
    scale: f64,
    spacing: f64,
    safe_insets: Edges,
    hint_insets: Edges,
    hints: Option<&'a AdvisoryHints>,
}

/// Plans retargeted variants of one source composition.
///
/// Construction front-loads everything that does not depend on the target: the content
/// analysis, the atomic groups and the flow snapshot. Each target is then planned independently.
pub struct Retargeter {
    source: ContentNode,
    safe_area: SafeAreaConfig,
    analysis: ContentAnalysis,
    atomic: AtomicGroupSet,
    children: Vec<FlowChild>,
    observer: Arc<dyn PlanObserver>,
}

impl std::fmt::Debug for Retargeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retargeter")
            .field("source", &self.source.id)
            .field("children", &self.children.len())
            .field("atomic_groups", &self.atomic.len())
            .finish_non_exhaustive()
    }
}

impl Retargeter {
    /// Construct a retargeter over `source`.
    pub fn new(
        source: ContentNode,
        safe_area: SafeAreaConfig,
        observer: Arc<dyn PlanObserver>,
    ) -> RetargetResult<Self> {
        safe_area.validate()?;
        let arena = NodeArena::build(&source);
        if arena.truncated {
            tracing::warn!(source = %source.id, "content tree deeper than the index limit");
        }
        let analysis = analyze_arena(&arena);
        let atomic = classify_arena(&arena);
        let children = arena
            .visible_root_children()
            .map(|idx| {
                let e = arena.entry(idx);
                FlowChild {
                    id: e.node.id.clone(),
                    bbox: e.node.bbox.normalized(),
                    has_text: e.subtree_has_text,
                    has_media: e.subtree_has_media,
                }
            })
            .collect();

        Ok(Self {
            source,
            safe_area,
            analysis,
            atomic,
            children,
            observer,
        })
    }

    /// Retargeter with the default safe area and a [`TracingObserver`].
    pub fn with_defaults(source: ContentNode) -> RetargetResult<Self> {
        Self::new(source, SafeAreaConfig::default(), Arc::new(TracingObserver))
    }

    /// Source composition.
    pub fn source(&self) -> &ContentNode {
        &self.source
    }

    /// Source analysis shared by every target.
    pub fn analysis(&self) -> &ContentAnalysis {
        &self.analysis
    }

    /// Atomic groups of the source.
    pub fn atomic_groups(&self) -> &AtomicGroupSet {
        &self.atomic
    }

    fn emit(&self, event: PlanEvent) {
        self.observer.on_event(&event);
    }

    /// Spacing between source children along `axis`: the authored flow spacing for stacked
    /// sources, the mean positive gap between neighbours otherwise.
    fn base_item_spacing(&self, axis: Axis) -> f64 {
        if let Some(flow) = self.source.flow
            && flow.mode.is_stacked()
        {
            return flow.item_spacing.max(0.0);
        }
        if self.children.len() < 2 {
            return 0.0;
        }
        let mut spans: Vec<(f64, f64)> = self
            .children
            .iter()
            .map(|c| (c.bbox.start(axis), c.bbox.start(axis) + c.bbox.len(axis)))
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));
        let total: f64 = spans
            .windows(2)
            .map(|w| (w[1].0 - w[0].1).max(0.0))
            .sum();
        total / (spans.len() - 1) as f64
    }

    /// Existing margins of the content inside the source root along `axis`.
    fn source_gaps(&self, axis: Axis) -> AxisInsets {
        let root = self.source.bbox.normalized();
        match self.analysis.actual_content_box {
            Some(cb) => AxisInsets::new(
                cb.start(axis),
                root.len(axis) - (cb.start(axis) + cb.len(axis)),
            )
            .sanitized(),
            None => AxisInsets::default(),
        }
    }

    /// Plan one target.
    #[tracing::instrument(skip(self, request), fields(target_id = %request.id))]
    pub fn plan_target(&self, request: &TargetRequest, mode: AdvisoryMode) -> VariantPlan {
        let target = sanitize_target(request.size);
        let profile = classify_profile(target);
        let advisory = AdvisoryInput::resolve(mode, request.advisory.as_ref());
        let hints = advisory.hints();
        let safe_insets = self.safe_area.insets_for(&request.id, target);
        let hint_insets = hints.and_then(|h| h.insets).unwrap_or_default().sanitized();
        let id = request.id.clone();

        self.emit(PlanEvent::Strategy {
            target: id.clone(),
            strategy: self.analysis.recommended_strategy,
            density: self.analysis.content_density,
        });
        let scale = select_scale(ScaleInput {
            analysis: &self.analysis,
            target,
            insets: safe_insets,
            profile: profile.profile,
        });
        self.emit(PlanEvent::Scale {
            target: id.clone(),
            decision: scale,
        });

        let mode_input = ModeInput {
            source_mode: self.source.flow_mode(),
            child_count: self.children.len(),
            text_children: self.children.iter().filter(|c| c.has_text).count(),
            image_children: self.children.iter().filter(|c| c.has_media).count(),
            source_aspect: safe_div(
                self.analysis.effective_height,
                self.analysis.effective_width,
                1.0,
            ),
            target_aspect: profile.aspect,
            profile: profile.profile,
        };
        let decision = resolve_mode(&mode_input, advisory);
        self.emit(PlanEvent::Mode {
            target: id.clone(),
            decision,
        });

        let s = scale.scale;
        let safe = safe_bounds(target, safe_insets);
        let scaled: Vec<PlacedBox> = self
            .children
            .iter()
            .map(|c| PlacedBox {
                id: c.id.clone(),
                bbox: c.bbox.scaled(s),
            })
            .collect();

        let (primary_axis, counter_axis, adaptation, projection, predicted) =
            match decision.orientation.axis() {
                Some(axis) => {
                    let spacing = self.base_item_spacing(axis);
                    let ctx = StackedContext {
                        target_id: &id,
                        target,
                        scale: s,
                        spacing,
                        safe_insets,
                        hint_insets,
                        hints,
                    };
                    let primary = self.plan_stacked_axis(&ctx, axis, true);
                    let counter = self.plan_stacked_axis(&ctx, axis.cross(), false);
                    let adaptation = adapt(&AdaptInput {
                        source: &self.source,
                        orientation: decision.orientation,
                        profile: profile.profile,
                        target,
                        scale: s,
                        base_item_spacing: spacing,
                        primary,
                        counter,
                        atomic: &self.atomic,
                        advisory,
                    });
                    let predicted = predict_run(&scaled, &adaptation, target);
                    (Some(primary), Some(counter), adaptation, None, predicted)
                }
                None => {
                    let adaptation = adapt(&AdaptInput {
                        source: &self.source,
                        orientation: FlowMode::Freeform,
                        profile: profile.profile,
                        target,
                        scale: s,
                        base_item_spacing: 0.0,
                        primary: AxisExpansionPlan::default(),
                        counter: AxisExpansionPlan::default(),
                        atomic: &self.atomic,
                        advisory,
                    });
                    let (projection, predicted) =
                        self.project_freeform(&scaled, safe, profile.profile, &adaptation, hints);
                    self.emit(PlanEvent::Projection {
                        target: id.clone(),
                        mode: projection.mode,
                    });
                    (None, None, adaptation, Some(projection), predicted)
                }
            };

        let warnings = collect_warnings(&predicted, safe);
        for warning in &warnings {
            self.emit(PlanEvent::Warning {
                target: id.clone(),
                warning: warning.clone(),
            });
        }

        VariantPlan {
            target_id: id,
            target,
            profile,
            analysis: self.analysis.clone(),
            safe_insets,
            scale,
            mode: decision,
            primary_axis,
            counter_axis,
            adaptation,
            projection,
            predicted,
            warnings,
        }
    }

    fn plan_stacked_axis(
        &self,
        ctx: &StackedContext<'_>,
        axis: Axis,
        is_primary: bool,
    ) -> AxisExpansionPlan {
        let (scale, spacing) = (ctx.scale, ctx.spacing);
        let n = self.children.len();
        let content_len = if is_primary {
            self.children
                .iter()
                .map(|c| c.bbox.len(axis) * scale)
                .sum::<f64>()
                + spacing * scale * n.saturating_sub(1) as f64
        } else {
            self.children
                .iter()
                .map(|c| c.bbox.len(axis) * scale)
                .fold(0.0, f64::max)
        };
        let (hint_start, hint_end) = ctx.hint_insets.along(axis);
        let (safe_start, safe_end) = ctx.safe_insets.along(axis);
        let focal_ratio = ctx.hints.and_then(|h| h.focal).map(|f| {
            match axis {
                Axis::Horizontal => f.x,
                Axis::Vertical => f.y,
            }
            .clamp(0.0, 1.0)
        });
        let gaps = self.source_gaps(axis);

        let mut plan = plan_axis(AxisExpansionInput {
            total_extra: axis.of_size(ctx.target) - content_len - hint_start - hint_end,
            requested_inset: AxisInsets::new(safe_start, safe_end),
            gaps: AxisInsets::new(gaps.start * scale, gaps.end * scale),
            flow_child_count: if is_primary { n } else { 0 },
            base_item_spacing: spacing * scale,
            allow_interior_expansion: is_primary,
            focal_ratio,
        });
        plan.start += hint_start;
        plan.end += hint_end;

        self.emit(PlanEvent::Axis {
            target: ctx.target_id.to_string(),
            axis,
            plan,
        });
        plan
    }

    /// Center the scaled content block in the safe bounds, hand it to the projector, then let
    /// advisory anchors and offsets override individual positions.
    fn project_freeform(
        &self,
        scaled: &[PlacedBox],
        safe: BoxPx,
        profile: LayoutProfile,
        adaptation: &AdaptationPlan,
        hints: Option<&AdvisoryHints>,
    ) -> (Projection, Vec<PlacedBox>) {
        let visible: Vec<&PlacedBox> = scaled
            .iter()
            .filter(|p| adaptation.child(&p.id).and_then(|o| o.visible) != Some(false))
            .collect();
        let children: Vec<FreeformChild> = visible
            .iter()
            .map(|p| FreeformChild {
                id: p.id.clone(),
                bbox: p.bbox,
            })
            .collect();
        let Some(content) = measure_bounds(&children) else {
            return (project_absolute(&[], safe, safe, profile), Vec::new());
        };
        let shift = safe.center() - content.center();
        let centered: Vec<FreeformChild> = children
            .into_iter()
            .map(|c| FreeformChild {
                id: c.id,
                bbox: c.bbox.translate(shift),
            })
            .collect();

        let mut projection = project_absolute(&centered, content.translate(shift), safe, profile);
        if let Some(hints) = hints {
            apply_placement_hints(&mut projection, &centered, hints, safe);
        }
        let predicted = projection
            .children
            .iter()
            .zip(&visible)
            .map(|(pc, p)| PlacedBox {
                id: pc.id.clone(),
                bbox: BoxPx::new(pc.position.x, pc.position.y, p.bbox.width, p.bbox.height),
            })
            .collect();
        (projection, predicted)
    }

    /// Plan every request, in request order.
    #[tracing::instrument(
        skip(self, requests, opts),
        fields(targets = requests.len(), parallel = opts.parallel)
    )]
    pub fn plan_targets(
        &self,
        requests: &[TargetRequest],
        opts: &RetargetOpts,
    ) -> RetargetResult<Vec<VariantPlan>> {
        if !opts.parallel {
            return Ok(requests
                .iter()
                .map(|r| self.plan_target(r, opts.advisory))
                .collect());
        }
        let pool = build_thread_pool(opts.threads)?;
        Ok(pool.install(|| {
            requests
                .par_iter()
                .map(|r| self.plan_target(r, opts.advisory))
                .collect()
        }))
    }
}

fn build_thread_pool(threads: Option<usize>) -> RetargetResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RetargetError::config(
            "plan_targets 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        RetargetError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/retargeter.rs"]
mod tests;

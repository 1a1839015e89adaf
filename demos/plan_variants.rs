use std::sync::Arc;

use retarget::{
    AdvisoryHints, ContentNode, RetargetOpts, Retargeter, SafeAreaConfig, Size, TargetRequest,
    TracingObserver,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let source = ContentNode::from_json_str(
        r#"{
  "id": "hero",
  "name": "Campaign / Hero",
  "kind": "container",
  "box": { "x": 0, "y": 0, "width": 1600, "height": 900 },
  "flow": { "mode": "stacked-horizontal", "itemSpacing": 48 },
  "children": [
    {
      "id": "copy",
      "kind": "container",
      "box": { "x": 80, "y": 220, "width": 640, "height": 460 },
      "flow": { "mode": "stacked-vertical", "itemSpacing": 24 },
      "children": [
        { "id": "title", "box": { "x": 0, "y": 0, "width": 640, "height": 180 }, "hasText": true },
        { "id": "body", "box": { "x": 0, "y": 204, "width": 640, "height": 256 }, "hasText": true }
      ]
    },
    {
      "id": "device",
      "name": "iPhone Mockup",
      "kind": "container",
      "box": { "x": 768, "y": 60, "width": 752, "height": 780 },
      "children": [
        { "id": "frame", "box": { "x": 0, "y": 0, "width": 752, "height": 780 }, "primitive": "rectangle", "hasFill": true },
        { "id": "screen", "box": { "x": 40, "y": 40, "width": 672, "height": 700 }, "hasImageFill": true }
      ]
    }
  ]
}"#,
    )?;
    source.validate()?;

    let safe_area = SafeAreaConfig::from_json_str(
        r#"{ "targets": { "story": { "ratio": { "top": 0.12, "right": 0.05, "bottom": 0.18, "left": 0.05 } } } }"#,
    )?;
    let retargeter = Retargeter::new(source, safe_area, Arc::new(TracingObserver))?;

    let hints = AdvisoryHints::from_json_lenient(
        r#"{ "orientation": "vertical", "focal": { "x": 0.5, "y": 0.35 } }"#,
    )
    .unwrap_or_default();
    let requests = vec![
        TargetRequest::new("story", Size::new(1080.0, 1920.0)).with_advisory(hints),
        TargetRequest::new("feed", Size::new(1080.0, 1080.0)),
        TargetRequest::new("landscape", Size::new(1920.0, 1080.0)),
        TargetRequest::new("banner", Size::new(970.0, 250.0)),
    ];

    let plans = retargeter.plan_targets(
        &requests,
        &RetargetOpts {
            parallel: true,
            ..RetargetOpts::default()
        },
    )?;
    for plan in &plans {
        eprintln!(
            "{}: {:?} scale={:.3} orientation={:?} warnings={}",
            plan.target_id,
            plan.profile.profile,
            plan.scale.scale,
            plan.mode.orientation,
            plan.warnings.len()
        );
    }
    println!("{}", serde_json::to_string_pretty(&plans)?);
    Ok(())
}

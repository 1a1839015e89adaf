use super::*;
use crate::content::model::ContentNode;
use crate::foundation::core::BoxPx;

fn plan_with(keys: &[&str]) -> AdaptationPlan {
    AdaptationPlan {
        orientation: FlowMode::StackedVertical,
        primary_sizing: SizingMode::Fixed,
        counter_sizing: SizingMode::Fixed,
        primary_align: PrimaryAlign::SpaceBetween,
        counter_align: CounterAlign::Center,
        wrap: false,
        item_spacing: 24.0,
        padding: Edges::uniform(40.0),
        child_overrides: keys
            .iter()
            .map(|k| {
                (
                    k.to_string(),
                    ChildOverride {
                        grow: Some(1.0),
                        ..ChildOverride::default()
                    },
                )
            })
            .collect(),
    }
}

#[test]
fn remap_translates_keys_and_drops_unmatched() {
    let source = ContentNode::container(
        "src",
        BoxPx::from_size(100.0, 100.0),
        vec![
            ContentNode::leaf("a", BoxPx::default()),
            ContentNode::leaf("b", BoxPx::default()),
        ],
    );
    let clone = ContentNode::container(
        "dst",
        BoxPx::from_size(100.0, 100.0),
        vec![ContentNode::leaf("a-copy", BoxPx::default())],
    );
    let mapping = NodeMapping::build(&source, &clone);
    let remapped = mapping.remap_plan(&plan_with(&["a", "b"]));

    assert_eq!(
        remapped.child_overrides.keys().collect::<Vec<_>>(),
        vec!["a-copy"]
    );
    assert_eq!(remapped.item_spacing, 24.0);
    assert_eq!(remapped.child("a-copy").and_then(|o| o.grow), Some(1.0));
}

#[test]
fn empty_override_serializes_as_empty_object() {
    let ov = ChildOverride::default();
    assert!(ov.is_empty());
    assert_eq!(serde_json::to_string(&ov).unwrap(), "{}");

    let ov = ChildOverride {
        max_width: Some(972.0),
        ..ChildOverride::default()
    };
    assert_eq!(serde_json::to_string(&ov).unwrap(), r#"{"maxWidth":972.0}"#);
}

#[test]
fn plan_serializes_enums_in_layout_tool_casing() {
    let json = serde_json::to_value(plan_with(&[])).unwrap();
    assert_eq!(json["orientation"], "stacked-vertical");
    assert_eq!(json["primarySizing"], "FIXED");
    assert_eq!(json["primaryAlign"], "SPACE_BETWEEN");
}

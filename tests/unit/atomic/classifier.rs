use super::*;
use crate::content::model::{FlowDescriptor, FlowMode, PrimitiveKind};
use crate::foundation::core::BoxPx;

fn b() -> BoxPx {
    BoxPx::from_size(10.0, 10.0)
}

fn shape(id: &str) -> ContentNode {
    ContentNode::leaf(id, b()).with_primitive(PrimitiveKind::Vector)
}

fn root_with(children: Vec<ContentNode>) -> ContentNode {
    ContentNode::container("root", BoxPx::from_size(1000.0, 1000.0), children)
}

#[test]
fn component_instances_are_atomic_even_with_text() {
    let card = ContentNode::container(
        "card",
        b(),
        vec![ContentNode::leaf("label", b()).with_text()],
    )
    .as_instance();
    let set = AtomicGroupSet::classify(&root_with(vec![card]));
    assert_eq!(set.reason("card"), Some(AtomicReason::ComponentInstance));
    assert!(set.is_absorbed("label"));
    assert_eq!(set.group_root("label"), Some("card"));
}

#[test]
fn mockup_names_need_text_free_subtrees() {
    let phone = ContentNode::container("p", b(), vec![ContentNode::leaf("bezel", b()).with_fill()])
        .named("iPhone 15 Mockup");
    let phone_with_caption = ContentNode::container(
        "q",
        b(),
        vec![ContentNode::leaf("caption", b()).with_text()],
    )
    .named("Device frame");
    let set = AtomicGroupSet::classify(&root_with(vec![phone, phone_with_caption]));
    assert_eq!(set.reason("p"), Some(AtomicReason::MockupName));
    assert!(!set.contains("q"));
    assert!(!set.contains("caption"));
}

#[test]
fn vector_clusters_need_more_than_seventy_percent() {
    let cluster = ContentNode::container(
        "icons",
        b(),
        vec![shape("a"), shape("b"), shape("c"), shape("d"), ContentNode::leaf("e", b())],
    )
    .named("row");
    let mixed = ContentNode::container(
        "mixed",
        b(),
        vec![shape("f"), shape("g"), ContentNode::leaf("h", b())],
    );
    let set = AtomicGroupSet::classify(&root_with(vec![cluster, mixed]));
    assert_eq!(set.reason("icons"), Some(AtomicReason::VectorCluster));
    assert!(!set.contains("mixed"));
}

#[test]
fn media_anywhere_in_subtree_is_atomic() {
    let frame = ContentNode::container(
        "hero",
        b(),
        vec![ContentNode::container("inner", b(), vec![ContentNode::leaf("img", b()).with_image()])],
    );
    let set = AtomicGroupSet::classify(&root_with(vec![frame]));
    assert_eq!(set.reason("hero"), Some(AtomicReason::Media));
    assert!(set.is_absorbed("inner"));
    assert!(set.is_absorbed("img"));
    assert!(!set.is_root("img"));
}

#[test]
fn paintless_flow_wrappers_are_atomic() {
    let wrapper = ContentNode::container(
        "chips",
        b(),
        vec![
            ContentNode::leaf("x", b()).with_fill(),
            ContentNode::leaf("y", b()).with_fill(),
        ],
    )
    .with_flow(FlowDescriptor {
        mode: FlowMode::StackedHorizontal,
        ..FlowDescriptor::default()
    });
    let mut painted = wrapper.clone().with_fill();
    painted.id = "painted".into();
    for (i, c) in painted.children.iter_mut().enumerate() {
        c.id = format!("p{i}");
    }
    let set = AtomicGroupSet::classify(&root_with(vec![wrapper, painted]));
    assert_eq!(set.reason("chips"), Some(AtomicReason::LayoutWrapper));
    assert!(!set.contains("painted"));
}

#[test]
fn root_is_never_a_group() {
    let root = root_with(vec![]).as_instance();
    let set = AtomicGroupSet::classify(&root);
    assert!(set.is_empty());
}

#[test]
fn nested_structural_containers_are_scanned() {
    let section = ContentNode::container(
        "section",
        b(),
        vec![
            ContentNode::leaf("title", b()).with_text(),
            ContentNode::container("logo-box", b(), vec![shape("s1")]).named("Logo"),
        ],
    );
    let set = AtomicGroupSet::classify(&root_with(vec![section]));
    assert!(!set.contains("section"));
    assert!(set.is_root("logo-box"));
    assert_eq!(set.len(), 1);
    assert_eq!(set.roots().collect::<Vec<_>>(), vec!["logo-box"]);
}

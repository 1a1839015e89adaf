use crate::content::arena::{NodeArena, NodeIdx};
use crate::content::model::ContentNode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Share of vector/primitive direct children above which a container is an illustration.
pub const VECTOR_CHILD_RATIO: f64 = 0.7;

/// Name fragments of device mockups and illustrations (matched case-insensitively).
pub const MOCKUP_VOCABULARY: &[&str] = &[
    "mockup",
    "device",
    "iphone",
    "phone",
    "android",
    "pixel",
    "ipad",
    "tablet",
    "macbook",
    "laptop",
    "monitor",
    "browser",
    "screen",
    "watch",
    "illustration",
    "artwork",
    "icon",
    "logo",
    "badge",
];

/// Why a node was classified as atomic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AtomicReason {
    /// Instance of a reusable component.
    ComponentInstance,
    /// Name matches the mockup/illustration vocabulary.
    MockupName,
    /// Mostly vector or primitive children.
    VectorCluster,
    /// Carries image or video content.
    Media,
    /// Paintless flow wrapper around two or more children.
    LayoutWrapper,
}

/// Subtrees that move and scale as one rigid unit.
///
/// Computed once per source tree and shared read-only by every target planned from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicGroupSet {
    roots: BTreeMap<String, AtomicReason>,
    /// Absorbed descendant id -> group root id.
    members: BTreeMap<String, String>,
}

impl AtomicGroupSet {
    /// Classify every subtree below `root`.
    pub fn classify(root: &ContentNode) -> Self {
        classify_arena(&NodeArena::build(root))
    }

    /// Return `true` when `id` roots a group.
    pub fn is_root(&self, id: &str) -> bool {
        self.roots.contains_key(id)
    }

    /// Return `true` when `id` is a group root or absorbed by one.
    pub fn contains(&self, id: &str) -> bool {
        self.is_root(id) || self.members.contains_key(id)
    }

    /// Return `true` when `id` sits strictly below a group root.
    pub fn is_absorbed(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    /// Group root owning `id` (itself for roots).
    pub fn group_root<'s>(&'s self, id: &'s str) -> Option<&'s str> {
        if self.is_root(id) {
            return Some(id);
        }
        self.members.get(id).map(String::as_str)
    }

    /// Classification reason of a group root.
    pub fn reason(&self, id: &str) -> Option<AtomicReason> {
        self.roots.get(id).copied()
    }

    /// Group root ids in sorted order.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Return `true` when no group was found.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

fn name_matches_vocabulary(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    MOCKUP_VOCABULARY.iter().any(|w| lower.contains(w))
}

/// Decide whether one node is atomic. Returns `None` for structural nodes.
fn classify_node(arena: &NodeArena<'_>, idx: NodeIdx) -> Option<AtomicReason> {
    let entry = arena.entry(idx);
    let node = entry.node;
    if node.component_instance {
        return Some(AtomicReason::ComponentInstance);
    }
    // Text marks a re-flowable structure, never a frozen illustration.
    if entry.subtree_has_text {
        return None;
    }

    let is_container = node.is_container();
    if is_container && name_matches_vocabulary(&node.name) {
        return Some(AtomicReason::MockupName);
    }
    if is_container && !entry.children.is_empty() {
        let vector_children = entry
            .children
            .iter()
            .filter(|&&c| arena.entry(c).node.primitive.is_some())
            .count();
        if vector_children as f64 / entry.children.len() as f64 > VECTOR_CHILD_RATIO {
            return Some(AtomicReason::VectorCluster);
        }
    }
    if entry.subtree_has_media {
        return Some(AtomicReason::Media);
    }
    if is_container
        && !node.has_fill
        && !node.has_stroke
        && entry.children.len() >= 2
        && node.flow_mode().is_stacked()
    {
        return Some(AtomicReason::LayoutWrapper);
    }
    None
}

pub(crate) fn classify_arena(arena: &NodeArena<'_>) -> AtomicGroupSet {
    let mut set = AtomicGroupSet::default();
    let mut group_of: Vec<Option<NodeIdx>> = vec![None; arena.len()];

    // Pre-order: a parent's verdict is always known before its children are visited.
    for i in 1..arena.len() {
        let idx = NodeIdx(i as u32);
        let entry = arena.entry(idx);
        let inherited = entry.parent.and_then(|p| group_of[p.get()]);
        if let Some(root) = inherited {
            group_of[i] = Some(root);
            set.members
                .insert(entry.node.id.clone(), arena.entry(root).node.id.clone());
            continue;
        }
        if let Some(reason) = classify_node(arena, idx) {
            group_of[i] = Some(idx);
            set.roots.insert(entry.node.id.clone(), reason);
        }
    }
    set
}

#[cfg(test)]
#[path = "../../tests/unit/atomic/classifier.rs"]
mod tests;

use crate::content::model::ContentNode;
use crate::foundation::core::{BoxPx, Vec2};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Depth beyond which subtrees are not indexed.
pub(crate) const MAX_TREE_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeIdx(pub(crate) u32);

impl NodeIdx {
    pub(crate) const ROOT: Self = Self(0);

    pub(crate) fn get(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ArenaEntry<'a> {
    pub(crate) node: &'a ContentNode,
    pub(crate) parent: Option<NodeIdx>,
    pub(crate) depth: usize,
    /// Origin of the frame `node.bbox` is expressed in, relative to the root frame.
    pub(crate) frame_origin: Vec2,
    /// Authored visibility combined with every ancestor's.
    pub(crate) visible: bool,
    pub(crate) children: SmallVec<[NodeIdx; 4]>,
    pub(crate) subtree_has_text: bool,
    pub(crate) subtree_has_media: bool,
}

impl ArenaEntry<'_> {
    /// Node box in the root frame.
    pub(crate) fn absolute_box(&self) -> BoxPx {
        self.node.bbox.normalized().translate(self.frame_origin)
    }
}

/// Pre-order index over a content tree.
///
/// Indices are assigned in one traversal and stay stable for the lifetime of the arena.
/// QA-overlay subtrees are never indexed and nothing deeper than [`MAX_TREE_DEPTH`] is visited.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<'a> {
    pub(crate) entries: Vec<ArenaEntry<'a>>,
    pub(crate) truncated: bool,
}

impl<'a> NodeArena<'a> {
    pub(crate) fn build(root: &'a ContentNode) -> Self {
        let mut arena = Self {
            entries: Vec::new(),
            truncated: false,
        };
        arena.push_subtree(root, None, 0, Vec2::ZERO, true);

        // Pre-order puts every child after its parent, so one reverse sweep folds subtree flags.
        for i in (1..arena.entries.len()).rev() {
            let (text, media, parent) = {
                let e = &arena.entries[i];
                (e.subtree_has_text, e.subtree_has_media, e.parent)
            };
            if let Some(p) = parent {
                let pe = &mut arena.entries[p.get()];
                pe.subtree_has_text |= text;
                pe.subtree_has_media |= media;
            }
        }
        arena
    }

    fn push_subtree(
        &mut self,
        node: &'a ContentNode,
        parent: Option<NodeIdx>,
        depth: usize,
        frame_origin: Vec2,
        parent_visible: bool,
    ) -> Option<NodeIdx> {
        if node.qa_overlay {
            return None;
        }
        if depth > MAX_TREE_DEPTH {
            self.truncated = true;
            return None;
        }
        let idx = NodeIdx(self.entries.len() as u32);
        self.entries.push(ArenaEntry {
            node,
            parent,
            depth,
            frame_origin,
            visible: parent_visible && node.visible,
            children: SmallVec::new(),
            subtree_has_text: node.has_text,
            subtree_has_media: node.has_media(),
        });

        // The root's own offset is ignored: its children live in the root-local frame.
        let child_origin = if parent.is_none() {
            Vec2::ZERO
        } else {
            let b = node.bbox.normalized();
            frame_origin + Vec2::new(b.x, b.y)
        };
        let visible = parent_visible && node.visible;
        for child in &node.children {
            if let Some(c) = self.push_subtree(child, Some(idx), depth + 1, child_origin, visible) {
                self.entries[idx.get()].children.push(c);
            }
        }
        Some(idx)
    }

    pub(crate) fn root(&self) -> &ArenaEntry<'a> {
        &self.entries[NodeIdx::ROOT.get()]
    }

    pub(crate) fn entry(&self, idx: NodeIdx) -> &ArenaEntry<'a> {
        &self.entries[idx.get()]
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Visible direct children of the root, in paint order.
    pub(crate) fn visible_root_children(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.root()
            .children
            .iter()
            .copied()
            .filter(|&c| self.entry(c).visible)
    }
}

/// Mapping between a source tree and its clone.
///
/// Both trees are walked in one combined traversal: every `(source, clone)` slot gets a stable
/// index, children are paired by position, and slots where the shapes diverge keep `None` on the
/// missing side instead of desynchronizing the rest of the walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMapping {
    pairs: Vec<(Option<String>, Option<String>)>,
    source_to_slot: BTreeMap<String, usize>,
}

impl NodeMapping {
    /// Pair `source` with `clone`.
    pub fn build(source: &ContentNode, clone: &ContentNode) -> Self {
        let mut mapping = Self::default();
        let mut queue = std::collections::VecDeque::new();
        queue.push_back((Some(source), Some(clone), 0usize));

        while let Some((s, c, depth)) = queue.pop_front() {
            let slot = mapping.pairs.len();
            mapping
                .pairs
                .push((s.map(|n| n.id.clone()), c.map(|n| n.id.clone())));
            if let Some(s) = s {
                mapping.source_to_slot.entry(s.id.clone()).or_insert(slot);
            }
            if depth >= MAX_TREE_DEPTH {
                continue;
            }

            let sc = s.map(|n| n.children.as_slice()).unwrap_or_default();
            let cc = c.map(|n| n.children.as_slice()).unwrap_or_default();
            for i in 0..sc.len().max(cc.len()) {
                queue.push_back((sc.get(i), cc.get(i), depth + 1));
            }
        }
        mapping
    }

    /// Clone-side id paired with `source_id`, if the shapes agree at that slot.
    pub fn clone_id_for(&self, source_id: &str) -> Option<&str> {
        let slot = *self.source_to_slot.get(source_id)?;
        self.pairs.get(slot)?.1.as_deref()
    }

    /// Number of paired slots (including one-sided ones).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Return `true` when no slot was visited.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of slots that exist on only one side.
    pub fn unmatched(&self) -> usize {
        self.pairs
            .iter()
            .filter(|(s, c)| s.is_none() || c.is_none())
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/arena.rs"]
mod tests;

//! Element tree with horizontal-scroll region markers.
//!
//! Stands in for the DOM when the router runs headless: every node has an
//! optional parent, and nodes marked as horizontal-scroll regions carry the
//! scroll state of that region. Lookups walk parent links from the origin,
//! inclusive, to the first marked node.

use smallvec::SmallVec;
use std::rc::Rc;
use swerve_foundation::{HorizontalRegionResolver, Orientation, ScrollableState};

use crate::scroll::ScrollState;

pub type NodeId = usize;

struct RegionNode {
    parent: Option<NodeId>,
    region: Option<ScrollState>,
}

#[derive(Default)]
pub struct RegionTree {
    nodes: Vec<RegionNode>,
}

impl RegionTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a root node.
    pub fn add_root(&mut self) -> NodeId {
        self.push(None, None)
    }

    /// Adds a plain child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        assert!(parent < self.nodes.len(), "unknown parent node {parent}");
        self.push(Some(parent), None)
    }

    /// Adds a child of `parent` marked as a horizontal-scroll region.
    pub fn add_region(&mut self, parent: Option<NodeId>, region: ScrollState) -> NodeId {
        if let Some(parent) = parent {
            assert!(parent < self.nodes.len(), "unknown parent node {parent}");
        }
        if region.orientation() != Orientation::Horizontal {
            log::warn!("region {} registered with vertical scroll state", region.id());
        }
        self.push(parent, Some(region))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    /// Ancestors of `node`, starting with `node` itself.
    pub fn ancestors(&self, node: NodeId) -> SmallVec<[NodeId; 8]> {
        let mut chain = SmallVec::new();
        let mut current = self.nodes.get(node).map(|_| node);
        while let Some(id) = current {
            chain.push(id);
            current = self.nodes[id].parent;
        }
        chain
    }

    /// Nearest horizontal region at or above `node`.
    pub fn closest_region(&self, node: NodeId) -> Option<&ScrollState> {
        self.ancestors(node)
            .into_iter()
            .find_map(|id| self.nodes[id].region.as_ref())
    }

    fn push(&mut self, parent: Option<NodeId>, region: Option<ScrollState>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(RegionNode { parent, region });
        id
    }
}

impl HorizontalRegionResolver for RegionTree {
    type Origin = NodeId;

    fn resolve_horizontal_region(&self, origin: &NodeId) -> Option<Rc<dyn ScrollableState>> {
        self.closest_region(*origin)
            .map(|state| Rc::new(state.clone()) as Rc<dyn ScrollableState>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_nearest_marked_ancestor() {
        let mut tree = RegionTree::new();
        let body = tree.add_root();
        let outer = tree.add_region(Some(body), ScrollState::horizontal(0.0, 100.0));
        let inner = tree.add_region(Some(outer), ScrollState::horizontal(0.0, 100.0));
        let card = tree.add_child(inner);
        let image = tree.add_child(card);

        let found = tree.closest_region(image).map(ScrollState::id);
        assert_eq!(found, tree.closest_region(inner).map(ScrollState::id));
        assert_ne!(found, tree.closest_region(outer).map(ScrollState::id));
        assert!(tree.closest_region(body).is_none());
    }

    #[test]
    fn origin_itself_counts() {
        let mut tree = RegionTree::new();
        let region = tree.add_region(None, ScrollState::horizontal(0.0, 10.0));
        assert!(tree.resolve_horizontal_region(&region).is_some());
    }

    #[test]
    fn unknown_origin_resolves_to_none() {
        let mut tree = RegionTree::new();
        tree.add_region(None, ScrollState::horizontal(0.0, 10.0));
        assert!(tree.resolve_horizontal_region(&42).is_none());
        assert!(tree.ancestors(42).is_empty());
    }

    #[test]
    fn resolved_handle_drives_the_same_region() {
        let mut tree = RegionTree::new();
        let state = ScrollState::horizontal(50.0, 100.0);
        let region = tree.add_region(None, state.clone());
        let child = tree.add_child(region);

        let handle = tree.resolve_horizontal_region(&child).expect("region");
        handle.consume_scroll_delta(-20.0);
        assert_eq!(state.value(), 30.0);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let mut tree = RegionTree::new();
        let root = tree.add_root();
        let a = tree.add_child(root);
        let b = tree.add_child(a);
        assert_eq!(tree.ancestors(b).as_slice(), &[b, a, root]);
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.len(), 3);
    }
}

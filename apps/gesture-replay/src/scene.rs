//! Headless scene built from a script's declarations.

use crate::script::Script;
use std::collections::HashMap;
use swerve_ui::{NodeId, RegionTree, ScrollState};

/// Scroll targets of a replayed modal, plus the nodes gestures start on.
pub struct Scene {
    pub body: ScrollState,
    pub carousels: Vec<(String, ScrollState)>,
    text: NodeId,
    slides: HashMap<String, NodeId>,
}

impl Scene {
    /// Builds the modal content tree: a text block and, per carousel, a
    /// region node with one slide inside it.
    pub fn build(script: &Script) -> (Self, RegionTree) {
        let body = ScrollState::vertical(script.body.offset, script.body.max);
        let mut tree = RegionTree::new();
        let content = tree.add_root();
        let text = tree.add_child(content);

        let mut carousels = Vec::with_capacity(script.carousels.len());
        let mut slides = HashMap::new();
        for decl in &script.carousels {
            let state = ScrollState::horizontal(decl.scroll.offset, decl.scroll.max);
            let strip = tree.add_region(Some(content), state.clone());
            slides.insert(decl.name.clone(), tree.add_child(strip));
            carousels.push((decl.name.clone(), state));
        }

        let scene = Self {
            body,
            carousels,
            text,
            slides,
        };
        (scene, tree)
    }

    /// Node a gesture starts on: a slide of the named carousel, or the
    /// text block.
    pub fn origin(&self, region: Option<&str>) -> NodeId {
        region
            .and_then(|name| self.slides.get(name).copied())
            .unwrap_or(self.text)
    }

    pub fn offsets(&self) -> Vec<(String, f32)> {
        std::iter::once(("body".to_owned(), self.body.value()))
            .chain(
                self.carousels
                    .iter()
                    .map(|(name, state)| (name.clone(), state.value())),
            )
            .collect()
    }
}

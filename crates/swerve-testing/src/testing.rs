//! Headless gesture test rule.
//!
//! `GestureTestRule` wires a router to a small modal layout: a vertically
//! scrollable body containing a text block and, optionally, a horizontal
//! carousel with one slide. Both scroll containers start mid-range so drags
//! in either direction are applied without clamping, and every change is
//! recorded.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swerve_foundation::{GestureConfig, GestureIntent, GestureIntentRouter, MoveDisposition, Point};
use swerve_ui::{ModalState, NodeId, RegionTree, ScrollState};

/// Starting offset of every container; half of its scroll range.
pub const INITIAL_OFFSET: f32 = 10_000.0;
const SCROLL_RANGE: f32 = 2.0 * INITIAL_OFFSET;

/// Node handles of the rule's layout.
#[derive(Clone, Copy, Debug)]
pub struct RuleLayout {
    pub content: NodeId,
    pub text: NodeId,
    /// The carousel region and a slide inside it, if the rule has one.
    pub carousel: Option<(NodeId, NodeId)>,
}

pub struct GestureTestRuleBuilder {
    config: GestureConfig,
    with_carousel: bool,
    gated: bool,
}

impl GestureTestRuleBuilder {
    pub fn config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    pub fn without_carousel(mut self) -> Self {
        self.with_carousel = false;
        self
    }

    /// Gates the router on a modal signal, initially closed.
    pub fn gated_by_modal(mut self) -> Self {
        self.gated = true;
        self
    }

    pub fn build(self) -> GestureTestRule {
        let body = ScrollState::vertical(INITIAL_OFFSET, SCROLL_RANGE);
        let carousel = ScrollState::horizontal(INITIAL_OFFSET, SCROLL_RANGE);
        let body_history = record(&body);
        let carousel_history = record(&carousel);

        let mut tree = RegionTree::new();
        let content = tree.add_root();
        let text = tree.add_child(content);
        let carousel_nodes = self.with_carousel.then(|| {
            let strip = tree.add_region(Some(content), carousel.clone());
            (strip, tree.add_child(strip))
        });

        let modal = ModalState::new();
        let mut router = GestureIntentRouter::with_config(Rc::new(body.clone()), tree, self.config);
        if self.gated {
            router = router.with_activation(modal.activation());
        } else {
            modal.open();
        }

        GestureTestRule {
            router,
            modal,
            body,
            carousel,
            body_history,
            carousel_history,
            layout: RuleLayout {
                content,
                text,
                carousel: carousel_nodes,
            },
            suppressed: Rc::new(Cell::new(0)),
            intents: Vec::new(),
        }
    }
}

fn record(state: &ScrollState) -> Rc<RefCell<Vec<f32>>> {
    let history = Rc::new(RefCell::new(Vec::new()));
    let sink = history.clone();
    state.add_listener(move |value| sink.borrow_mut().push(value));
    history
}

pub struct GestureTestRule {
    router: GestureIntentRouter<RegionTree>,
    modal: ModalState,
    body: ScrollState,
    carousel: ScrollState,
    body_history: Rc<RefCell<Vec<f32>>>,
    carousel_history: Rc<RefCell<Vec<f32>>>,
    layout: RuleLayout,
    suppressed: Rc<Cell<usize>>,
    intents: Vec<GestureIntent>,
}

impl Default for GestureTestRule {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTestRule {
    /// Rule with a carousel and default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> GestureTestRuleBuilder {
        GestureTestRuleBuilder {
            config: GestureConfig::default(),
            with_carousel: true,
            gated: false,
        }
    }

    pub fn layout(&self) -> RuleLayout {
        self.layout
    }

    /// Node inside the carousel.
    ///
    /// # Panics
    ///
    /// Panics if the rule was built without a carousel.
    pub fn slide(&self) -> NodeId {
        self.layout
            .carousel
            .map(|(_, slide)| slide)
            .expect("rule built without a carousel")
    }

    pub fn text(&self) -> NodeId {
        self.layout.text
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn router(&self) -> &GestureIntentRouter<RegionTree> {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut GestureIntentRouter<RegionTree> {
        &mut self.router
    }

    pub fn down(&mut self, x: f32, y: f32, origin: NodeId) -> bool {
        self.intents.clear();
        self.router.on_gesture_start(Point::new(x, y), &origin)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> MoveDisposition {
        let suppressed = self.suppressed.clone();
        let disposition = self
            .router
            .on_gesture_move(Point::new(x, y), move || suppressed.set(suppressed.get() + 1));
        if let Some(intent) = self.router.intent() {
            self.intents.push(intent);
        }
        disposition
    }

    /// Moves through every point in order.
    pub fn drag_through(&mut self, points: &[(f32, f32)]) -> Vec<MoveDisposition> {
        points.iter().map(|&(x, y)| self.move_to(x, y)).collect()
    }

    pub fn up(&mut self) {
        self.router.on_gesture_end();
    }

    pub fn cancel(&mut self) {
        self.router.on_gesture_cancel();
    }

    pub fn intent(&self) -> Option<GestureIntent> {
        self.router.intent()
    }

    /// Intents observed after each move of the current gesture.
    pub fn intent_history(&self) -> &[GestureIntent] {
        &self.intents
    }

    /// Number of moves that suppressed native scrolling so far.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed.get()
    }

    /// Change of the modal body's vertical offset since the rule was built.
    pub fn body_change(&self) -> f32 {
        self.body.value() - INITIAL_OFFSET
    }

    /// Change of the carousel's horizontal offset since the rule was built.
    pub fn carousel_change(&self) -> f32 {
        self.carousel.value() - INITIAL_OFFSET
    }

    pub fn body_history(&self) -> Vec<f32> {
        self.body_history.borrow().clone()
    }

    pub fn carousel_history(&self) -> Vec<f32> {
        self.carousel_history.borrow().clone()
    }

    pub fn body(&self) -> &ScrollState {
        &self.body
    }

    pub fn carousel(&self) -> &ScrollState {
        &self.carousel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_slide_inside_carousel() {
        let rule = GestureTestRule::new();
        let layout = rule.layout();
        let (strip, slide) = layout.carousel.expect("carousel");
        assert_ne!(strip, slide);
        assert_ne!(layout.text, slide);
        assert_eq!(rule.slide(), slide);
    }

    #[test]
    fn records_scroll_history() {
        let mut rule = GestureTestRule::new();
        let text = rule.text();
        rule.down(0.0, 0.0, text);
        rule.drag_through(&[(0.0, 10.0), (0.0, 30.0)]);
        assert_eq!(rule.body_history(), vec![INITIAL_OFFSET - 10.0, INITIAL_OFFSET - 30.0]);
        assert_eq!(rule.suppressed_count(), 2);
        assert!(rule.carousel_history().is_empty());
    }

    #[test]
    #[should_panic(expected = "without a carousel")]
    fn slide_requires_carousel() {
        GestureTestRule::builder().without_carousel().build().slide();
    }
}

//! Adapter for discrete touch events (`touchstart`/`touchmove`/...).
//!
//! Touch events have no pointer capture, so the adapter follows the active
//! contact by its `identifier` across events: moves of other fingers are
//! ignored, and the gesture ends only when the tracked touch is reported as
//! changed in an end or cancel event.

use crate::contact_tracker::ContactTracker;
use crate::input_source::GestureInput;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use swerve_foundation::{ContactId, MoveDisposition, Point, PointerEventKind};

/// One touch point of a touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub identifier: ContactId,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(identifier: ContactId, x: f32, y: f32) -> Self {
        Self {
            identifier,
            position: Point::new(x, y),
        }
    }
}

/// Normalized touch event.
///
/// `changed` mirrors `changedTouches`: the touches this event is about.
/// `touches` mirrors `touches`: every contact still on the surface.
#[derive(Clone, Debug)]
pub struct TouchInput {
    pub kind: PointerEventKind,
    pub changed: SmallVec<[TouchPoint; 2]>,
    pub touches: SmallVec<[TouchPoint; 2]>,
    default_prevented: Rc<Cell<bool>>,
}

impl TouchInput {
    pub fn new(
        kind: PointerEventKind,
        changed: impl IntoIterator<Item = TouchPoint>,
        touches: impl IntoIterator<Item = TouchPoint>,
    ) -> Self {
        Self {
            kind,
            changed: changed.into_iter().collect(),
            touches: touches.into_iter().collect(),
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    /// A single-finger event where the changed touch is the only touch
    /// still down (start/move) or no touch remains (end/cancel).
    pub fn single(kind: PointerEventKind, touch: TouchPoint) -> Self {
        let remaining: SmallVec<[TouchPoint; 2]> = match kind {
            PointerEventKind::Down | PointerEventKind::Move => SmallVec::from_elem(touch, 1),
            PointerEventKind::Up | PointerEventKind::Cancel => SmallVec::new(),
        };
        Self::new(kind, [touch], remaining)
    }

    pub fn changed_touch(&self, identifier: ContactId) -> Option<&TouchPoint> {
        self.changed.iter().find(|t| t.identifier == identifier)
    }

    pub fn is_down(&self, identifier: ContactId) -> bool {
        self.touches.iter().any(|t| t.identifier == identifier)
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TouchAdapter {
    tracker: ContactTracker,
}

impl TouchAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_contact(&self) -> Option<ContactId> {
        self.tracker.active()
    }

    /// Starts tracking the first changed touch if no live gesture exists.
    ///
    /// A tracked touch that is no longer listed in `touches` lost its end
    /// event; the gesture is restarted with the new touch.
    pub fn on_touch_start<G: GestureInput + ?Sized>(
        &mut self,
        input: &mut G,
        event: &TouchInput,
        origin: &G::Origin,
    ) -> bool {
        let Some(touch) = event.changed.first().copied() else {
            return false;
        };

        match self.tracker.active() {
            Some(active) if active != touch.identifier && event.is_down(active) => {
                log::trace!(
                    "touch {} started while touch {} is active; ignoring",
                    touch.identifier,
                    active
                );
                return false;
            }
            Some(active) => {
                log::debug!(
                    "touch {} missed its end event; restarting with touch {}",
                    active,
                    touch.identifier
                );
                self.tracker.replace(touch.identifier);
            }
            None => {
                self.tracker.claim(touch.identifier);
            }
        }

        if input.start(touch.position, origin) {
            true
        } else {
            self.tracker.clear();
            false
        }
    }

    pub fn on_touch_move<G: GestureInput + ?Sized>(
        &mut self,
        input: &mut G,
        event: &TouchInput,
    ) -> MoveDisposition {
        let Some(touch) = self
            .tracker
            .active()
            .and_then(|active| event.changed_touch(active))
        else {
            return MoveDisposition::NoSession;
        };
        input.move_to(touch.position, &mut || event.prevent_default())
    }

    pub fn on_touch_end<G: GestureInput + ?Sized>(&mut self, input: &mut G, event: &TouchInput) {
        if self.release_if_changed(event) {
            input.end();
        }
    }

    pub fn on_touch_cancel<G: GestureInput + ?Sized>(&mut self, input: &mut G, event: &TouchInput) {
        if self.release_if_changed(event) {
            input.cancel();
        }
    }

    /// Dispatches by event kind. Returns the move disposition for moves.
    pub fn dispatch<G: GestureInput + ?Sized>(
        &mut self,
        input: &mut G,
        event: &TouchInput,
        origin: &G::Origin,
    ) -> Option<MoveDisposition> {
        match event.kind {
            PointerEventKind::Down => {
                self.on_touch_start(input, event, origin);
                None
            }
            PointerEventKind::Move => Some(self.on_touch_move(input, event)),
            PointerEventKind::Up => {
                self.on_touch_end(input, event);
                None
            }
            PointerEventKind::Cancel => {
                self.on_touch_cancel(input, event);
                None
            }
        }
    }

    fn release_if_changed(&mut self, event: &TouchInput) -> bool {
        match self.tracker.active() {
            Some(active) if event.changed_touch(active).is_some() => self.tracker.release(active),
            _ => false,
        }
    }
}

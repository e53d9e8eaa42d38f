//! Adapter for unified pointer events (`pointerdown`/`pointermove`/...).
//!
//! Pointer events carry a stable `pointerId`. Hosts capture the pointer once
//! a move is routed, so later moves keep arriving after the contact leaves
//! the container's bounds. Mouse pointers are left to native handling
//! (text selection, clicks).

use crate::contact_tracker::{ContactClaim, ContactTracker};
use crate::input_source::GestureInput;
use swerve_foundation::{ContactId, InputEvent, MoveDisposition, PointerEventKind, PointerType};

/// What the host should do after a pointer down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerDownResponse {
    /// A session started.
    Started,
    /// The router is gated off, or the pointer is a mouse.
    Inactive,
    /// Another contact owns the gesture; this one is ignored.
    Ignored,
}

impl PointerDownResponse {
    pub fn is_started(self) -> bool {
        self == PointerDownResponse::Started
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerAdapter {
    tracker: ContactTracker,
}

impl PointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_contact(&self) -> Option<ContactId> {
        self.tracker.active()
    }

    /// Starts a gesture for `event` unless another pointer owns one.
    ///
    /// Browsers keep a single primary pointer per device type, so a primary
    /// down from a new id means the tracked pointer is gone even if its up
    /// never arrived; the gesture restarts with the new pointer.
    pub fn on_pointer_down<G: GestureInput + ?Sized>(
        &mut self,
        input: &mut G,
        event: &InputEvent,
        origin: &G::Origin,
    ) -> PointerDownResponse {
        if event.pointer_type == PointerType::Mouse {
            return PointerDownResponse::Inactive;
        }

        match self.tracker.claim(event.contact) {
            ContactClaim::Busy(active) if event.is_primary => {
                log::debug!(
                    "primary pointer {} down while pointer {} is tracked; restarting gesture",
                    event.contact,
                    active
                );
                self.tracker.replace(event.contact);
            }
            ContactClaim::Busy(active) => {
                log::trace!(
                    "pointer {} down while pointer {} is active; ignoring",
                    event.contact,
                    active
                );
                return PointerDownResponse::Ignored;
            }
            ContactClaim::Reclaimed => {
                log::debug!(
                    "pointer {} down again without up; restarting gesture",
                    event.contact
                );
            }
            ContactClaim::Claimed => {}
        }

        if input.start(event.position, origin) {
            PointerDownResponse::Started
        } else {
            self.tracker.release(event.contact);
            PointerDownResponse::Inactive
        }
    }

    /// Routes a move of the active pointer; other pointers are ignored.
    ///
    /// Suppression is recorded on the event via `prevent_default`.
    pub fn on_pointer_move<G: GestureInput + ?Sized>(
        &mut self,
        input: &mut G,
        event: &InputEvent,
    ) -> MoveDisposition {
        if !self.tracker.is_active(event.contact) {
            return MoveDisposition::NoSession;
        }
        input.move_to(event.position, &mut || event.prevent_default())
    }

    pub fn on_pointer_up<G: GestureInput + ?Sized>(&mut self, input: &mut G, event: &InputEvent) {
        if self.tracker.release(event.contact) {
            input.end();
        }
    }

    pub fn on_pointer_cancel<G: GestureInput + ?Sized>(
        &mut self,
        input: &mut G,
        event: &InputEvent,
    ) {
        if self.tracker.release(event.contact) {
            input.cancel();
        }
    }

    /// Dispatches by event kind. Returns the move disposition for moves.
    pub fn dispatch<G: GestureInput + ?Sized>(
        &mut self,
        input: &mut G,
        event: &InputEvent,
        origin: &G::Origin,
    ) -> Option<MoveDisposition> {
        match event.kind {
            PointerEventKind::Down => {
                self.on_pointer_down(input, event, origin);
                None
            }
            PointerEventKind::Move => Some(self.on_pointer_move(input, event)),
            PointerEventKind::Up => {
                self.on_pointer_up(input, event);
                None
            }
            PointerEventKind::Cancel => {
                self.on_pointer_cancel(input, event);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swerve_foundation::Point;

    /// Records calls instead of routing.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        accept: bool,
    }

    impl GestureInput for Recorder {
        type Origin = ();

        fn start(&mut self, position: Point, _origin: &()) -> bool {
            self.calls.push(format!("start {} {}", position.x, position.y));
            self.accept
        }

        fn move_to(
            &mut self,
            position: Point,
            prevent_native: &mut dyn FnMut(),
        ) -> MoveDisposition {
            self.calls.push(format!("move {} {}", position.x, position.y));
            prevent_native();
            MoveDisposition::ScrolledVertical { consumed: 0.0 }
        }

        fn end(&mut self) {
            self.calls.push("end".into());
        }

        fn cancel(&mut self) {
            self.calls.push("cancel".into());
        }
    }

    fn recorder() -> Recorder {
        Recorder {
            calls: Vec::new(),
            accept: true,
        }
    }

    #[test]
    fn full_gesture_reaches_input() {
        let mut input = recorder();
        let mut adapter = PointerAdapter::new();

        let response = adapter.on_pointer_down(&mut input, &InputEvent::down(1, 0.0, 0.0), &());
        assert!(response.is_started());

        let moved = InputEvent::moved(1, 0.0, 30.0);
        adapter.on_pointer_move(&mut input, &moved);
        assert!(moved.is_default_prevented());

        adapter.on_pointer_up(&mut input, &InputEvent::up(1, 0.0, 30.0));
        assert_eq!(input.calls, vec!["start 0 0", "move 0 30", "end"]);
        assert_eq!(adapter.active_contact(), None);
    }

    #[test]
    fn second_pointer_is_ignored_until_first_ends() {
        let mut input = recorder();
        let mut adapter = PointerAdapter::new();
        adapter.on_pointer_down(&mut input, &InputEvent::down(1, 0.0, 0.0), &());

        let second_down = InputEvent::down(2, 50.0, 50.0).with_primary(false);
        let second = adapter.on_pointer_down(&mut input, &second_down, &());
        assert_eq!(second, PointerDownResponse::Ignored);

        let stray = InputEvent::moved(2, 50.0, 90.0);
        assert_eq!(adapter.on_pointer_move(&mut input, &stray), MoveDisposition::NoSession);
        assert!(!stray.is_default_prevented());

        adapter.on_pointer_up(&mut input, &InputEvent::up(2, 50.0, 90.0));
        adapter.on_pointer_cancel(&mut input, &InputEvent::cancel(1));

        assert_eq!(input.calls, vec!["start 0 0", "cancel"]);
    }

    #[test]
    fn repeated_down_restarts() {
        let mut input = recorder();
        let mut adapter = PointerAdapter::new();
        adapter.on_pointer_down(&mut input, &InputEvent::down(1, 0.0, 0.0), &());
        let again = adapter.on_pointer_down(&mut input, &InputEvent::down(1, 5.0, 5.0), &());
        assert_eq!(again, PointerDownResponse::Started);
        assert_eq!(input.calls, vec!["start 0 0", "start 5 5"]);
    }

    #[test]
    fn lost_up_does_not_lock_out_new_pointers() {
        let mut input = recorder();
        let mut adapter = PointerAdapter::new();
        adapter.on_pointer_down(&mut input, &InputEvent::down(5, 0.0, 0.0), &());
        adapter.on_pointer_move(&mut input, &InputEvent::moved(5, 0.0, 20.0));

        // Pointer 5 never reports up; every later touch gets a fresh id.
        for id in 6..9 {
            let down = adapter.on_pointer_down(&mut input, &InputEvent::down(id, 0.0, 0.0), &());
            assert_eq!(down, PointerDownResponse::Started, "pointer {id}");
            let moved = InputEvent::moved(id, 0.0, 30.0);
            assert_ne!(adapter.on_pointer_move(&mut input, &moved), MoveDisposition::NoSession);
            assert!(moved.is_default_prevented());
            adapter.on_pointer_up(&mut input, &InputEvent::up(id, 0.0, 30.0));
            assert_eq!(adapter.active_contact(), None);
        }

        let stale = InputEvent::moved(5, 0.0, 90.0);
        assert_eq!(adapter.on_pointer_move(&mut input, &stale), MoveDisposition::NoSession);
        assert_eq!(input.calls.iter().filter(|c| c.starts_with("start")).count(), 4);
    }

    #[test]
    fn mouse_pointers_are_left_native() {
        let mut input = recorder();
        let mut adapter = PointerAdapter::new();
        let press = InputEvent::down(1, 0.0, 0.0).with_pointer_type(PointerType::Mouse);
        assert_eq!(
            adapter.on_pointer_down(&mut input, &press, &()),
            PointerDownResponse::Inactive
        );
        assert_eq!(adapter.active_contact(), None);

        let drag = InputEvent::moved(1, 0.0, 40.0).with_pointer_type(PointerType::Mouse);
        assert_eq!(adapter.on_pointer_move(&mut input, &drag), MoveDisposition::NoSession);
        assert!(!drag.is_default_prevented());
        assert!(input.calls.is_empty());

        let pen = InputEvent::down(2, 0.0, 0.0).with_pointer_type(PointerType::Pen);
        assert!(adapter.on_pointer_down(&mut input, &pen, &()).is_started());
    }

    #[test]
    fn rejected_start_releases_contact() {
        let mut input = Recorder::default();
        let mut adapter = PointerAdapter::new();
        let response = adapter.on_pointer_down(&mut input, &InputEvent::down(1, 0.0, 0.0), &());
        assert_eq!(response, PointerDownResponse::Inactive);
        assert!(!response.is_started());
        assert_eq!(adapter.active_contact(), None);

        adapter.on_pointer_up(&mut input, &InputEvent::up(1, 0.0, 0.0));
        assert_eq!(input.calls, vec!["start 0 0"]);
    }

    #[test]
    fn dispatch_by_kind() {
        let mut input = recorder();
        let mut adapter = PointerAdapter::new();
        assert_eq!(adapter.dispatch(&mut input, &InputEvent::down(4, 1.0, 1.0), &()), None);
        assert!(adapter
            .dispatch(&mut input, &InputEvent::moved(4, 1.0, 9.0), &())
            .is_some());
        adapter.dispatch(&mut input, &InputEvent::up(4, 1.0, 9.0), &());
        assert_eq!(input.calls.len(), 3);
    }
}

//! Capability interface the input adapters drive.

use swerve_foundation::{GestureIntentRouter, HorizontalRegionResolver, MoveDisposition, Point};

/// Normalized start/move/end/cancel calls for one registered container.
///
/// Adapters translate platform events into these calls; the router is the
/// production implementation, and tests can substitute a recorder.
pub trait GestureInput {
    type Origin: ?Sized;

    /// Begins a gesture. Returns whether a session was created.
    fn start(&mut self, position: Point, origin: &Self::Origin) -> bool;

    /// Routes a move. `prevent_native` suppresses the platform default.
    fn move_to(&mut self, position: Point, prevent_native: &mut dyn FnMut()) -> MoveDisposition;

    fn end(&mut self);

    fn cancel(&mut self);
}

impl<R: HorizontalRegionResolver> GestureInput for GestureIntentRouter<R> {
    type Origin = R::Origin;

    fn start(&mut self, position: Point, origin: &Self::Origin) -> bool {
        self.on_gesture_start(position, origin)
    }

    fn move_to(&mut self, position: Point, prevent_native: &mut dyn FnMut()) -> MoveDisposition {
        self.on_gesture_move(position, || prevent_native())
    }

    fn end(&mut self) {
        self.on_gesture_end();
    }

    fn cancel(&mut self) {
        self.on_gesture_cancel();
    }
}

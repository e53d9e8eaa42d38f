//! Per-gesture session state.
//!
//! A `GestureSession` lives from touch-down to up/cancel. It owns the
//! coordinates needed to compute deltas and the one-shot intent decision,
//! and it knows nothing about how scroll targets are mutated: `advance`
//! only reports what the router should do with the move.

use super::intent::{classify_intent, GestureIntent};
use crate::scrollable::{Orientation, ScrollableState};
use std::fmt;
use std::rc::Rc;
use swerve_ui_graphics::{Delta, Point};

/// What the router should do with one move sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionStep {
    /// Still inside the deadband; leave the event alone.
    Deferred,
    /// Scroll the target for `orientation` by the raw finger delta along it.
    Route { orientation: Orientation, delta: f32 },
    /// Horizontal intent with no horizontal region; native handling proceeds.
    PassThrough,
}

pub struct GestureSession {
    origin: Point,
    last: Point,
    intent: GestureIntent,
    horizontal_target: Option<Rc<dyn ScrollableState>>,
}

impl GestureSession {
    pub fn new(origin: Point, horizontal_target: Option<Rc<dyn ScrollableState>>) -> Self {
        Self {
            origin,
            last: origin,
            intent: GestureIntent::Undecided,
            horizontal_target,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn last(&self) -> Point {
        self.last
    }

    pub fn intent(&self) -> GestureIntent {
        self.intent
    }

    pub fn horizontal_target(&self) -> Option<&Rc<dyn ScrollableState>> {
        self.horizontal_target.as_ref()
    }

    /// Total displacement from the origin to `position`.
    pub fn total_displacement(&self, position: Point) -> Delta {
        position - self.origin
    }

    /// Processes one move sample.
    ///
    /// Decides intent if still undecided, then reports the routing step. The
    /// last sample is updated on every call, including deferred ones, so the
    /// next delta is always measured from the most recent position.
    pub fn advance(&mut self, position: Point, deadband: f32) -> SessionStep {
        let step = position - self.last;
        self.last = position;

        if !self.intent.is_decided() {
            self.intent = classify_intent(self.total_displacement(position), deadband);
        }

        match self.intent {
            GestureIntent::Undecided => SessionStep::Deferred,
            GestureIntent::Vertical => SessionStep::Route {
                orientation: Orientation::Vertical,
                delta: step.dy,
            },
            GestureIntent::Horizontal if self.horizontal_target.is_some() => SessionStep::Route {
                orientation: Orientation::Horizontal,
                delta: step.dx,
            },
            GestureIntent::Horizontal => SessionStep::PassThrough,
        }
    }
}

impl fmt::Debug for GestureSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureSession")
            .field("origin", &self.origin)
            .field("last", &self.last)
            .field("intent", &self.intent)
            .field("has_horizontal_target", &self.horizontal_target.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture_constants::INTENT_DEADBAND;
    use std::cell::Cell;

    struct Offset(Cell<f32>);

    impl ScrollableState for Offset {
        fn scroll_offset(&self) -> f32 {
            self.0.get()
        }

        fn set_scroll_offset(&self, offset: f32) {
            self.0.set(offset);
        }
    }

    fn region() -> Option<Rc<dyn ScrollableState>> {
        Some(Rc::new(Offset(Cell::new(0.0))))
    }

    #[test]
    fn new_session_starts_undecided_at_origin() {
        let session = GestureSession::new(Point::new(100.0, 100.0), None);
        assert_eq!(session.intent(), GestureIntent::Undecided);
        assert_eq!(session.origin(), session.last());
        assert!(session.horizontal_target().is_none());
    }

    #[test]
    fn deferred_moves_still_advance_last() {
        let mut session = GestureSession::new(Point::ZERO, None);
        assert_eq!(
            session.advance(Point::new(3.0, 3.0), INTENT_DEADBAND),
            SessionStep::Deferred
        );
        assert_eq!(session.last(), Point::new(3.0, 3.0));

        // Decided on total displacement, routed with the step since (3,3).
        assert_eq!(
            session.advance(Point::new(3.0, 20.0), INTENT_DEADBAND),
            SessionStep::Route {
                orientation: Orientation::Vertical,
                delta: 17.0
            }
        );
        assert_eq!(session.intent(), GestureIntent::Vertical);
    }

    #[test]
    fn intent_never_flips() {
        let mut session = GestureSession::new(Point::new(100.0, 100.0), region());
        session.advance(Point::new(100.0, 140.0), INTENT_DEADBAND);
        assert_eq!(session.intent(), GestureIntent::Vertical);

        // A long horizontal sweep afterwards still routes vertically.
        let step = session.advance(Point::new(300.0, 141.0), INTENT_DEADBAND);
        assert_eq!(
            step,
            SessionStep::Route {
                orientation: Orientation::Vertical,
                delta: 1.0
            }
        );
        assert_eq!(session.intent(), GestureIntent::Vertical);
    }

    #[test]
    fn horizontal_without_region_passes_through() {
        let mut session = GestureSession::new(Point::new(100.0, 100.0), None);
        assert_eq!(
            session.advance(Point::new(140.0, 102.0), INTENT_DEADBAND),
            SessionStep::PassThrough
        );
        assert_eq!(session.intent(), GestureIntent::Horizontal);
        assert_eq!(session.last(), Point::new(140.0, 102.0));
    }

    #[test]
    fn horizontal_with_region_routes_dx() {
        let mut session = GestureSession::new(Point::new(100.0, 100.0), region());
        assert_eq!(
            session.advance(Point::new(140.0, 102.0), INTENT_DEADBAND),
            SessionStep::Route {
                orientation: Orientation::Horizontal,
                delta: 40.0
            }
        );
        assert_eq!(
            session.advance(Point::new(130.0, 150.0), INTENT_DEADBAND),
            SessionStep::Route {
                orientation: Orientation::Horizontal,
                delta: -10.0
            }
        );
    }
}

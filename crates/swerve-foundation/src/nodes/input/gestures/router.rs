//! Gesture intent router.
//!
//! Owns at most one `GestureSession` for a registered container and applies
//! the session's routing decisions to the scroll targets: the primary
//! (vertical) container supplied at construction, or the horizontal region
//! resolved from the gesture origin.
//!
//! The router never fails. A move without a session, or a horizontal drag
//! with no horizontal region, is a silent no-op that leaves native handling
//! alone.

use super::intent::GestureIntent;
use super::session::{GestureSession, SessionStep};
use crate::config::GestureConfig;
use crate::region::HorizontalRegionResolver;
use crate::scrollable::{Orientation, ScrollableState};
use std::fmt;
use std::rc::Rc;
use swerve_ui_graphics::Point;

/// Outcome of one move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveDisposition {
    /// No active session; the event was ignored.
    NoSession,
    /// Intent is still undecided; the event was not consumed.
    Deferred,
    /// The primary container was scrolled and native handling suppressed.
    ScrolledVertical { consumed: f32 },
    /// The horizontal region was scrolled and native handling suppressed.
    ScrolledHorizontal { consumed: f32 },
    /// Horizontal intent without a region; native handling proceeds.
    PassedThrough,
}

impl MoveDisposition {
    /// Whether native scroll handling was suppressed for the event.
    pub fn suppressed_native(&self) -> bool {
        matches!(
            self,
            MoveDisposition::ScrolledVertical { .. } | MoveDisposition::ScrolledHorizontal { .. }
        )
    }
}

pub struct GestureIntentRouter<R: HorizontalRegionResolver> {
    primary: Rc<dyn ScrollableState>,
    resolver: R,
    config: GestureConfig,
    activation: Option<Box<dyn Fn() -> bool>>,
    session: Option<GestureSession>,
}

impl<R: HorizontalRegionResolver> GestureIntentRouter<R> {
    pub fn new(primary: Rc<dyn ScrollableState>, resolver: R) -> Self {
        Self::with_config(primary, resolver, GestureConfig::default())
    }

    pub fn with_config(
        primary: Rc<dyn ScrollableState>,
        resolver: R,
        config: GestureConfig,
    ) -> Self {
        Self {
            primary,
            resolver,
            config: config.sanitized(),
            activation: None,
            session: None,
        }
    }

    /// Gates new gestures on `is_active`, typically "is the modal open".
    ///
    /// The predicate is checked at gesture start only. A gesture that starts
    /// while inactive creates no session and passes through natively.
    pub fn with_activation(mut self, is_active: impl Fn() -> bool + 'static) -> Self {
        self.activation = Some(Box::new(is_active));
        self
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn primary(&self) -> &Rc<dyn ScrollableState> {
        &self.primary
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Intent of the active session, or `None` without one.
    pub fn intent(&self) -> Option<GestureIntent> {
        self.session.as_ref().map(GestureSession::intent)
    }

    /// Begins a new session at `position`, discarding any stale one.
    ///
    /// Returns `false` when the activation gate is closed and no session was
    /// created.
    pub fn on_gesture_start(&mut self, position: Point, origin: &R::Origin) -> bool {
        if self.session.take().is_some() {
            log::debug!("gesture start while a session was active; discarding stale session");
        }

        if let Some(is_active) = &self.activation {
            if !is_active() {
                log::trace!("gesture start at {:?} ignored: router inactive", position);
                return false;
            }
        }

        let horizontal_target = self.resolver.resolve_horizontal_region(origin);
        log::debug!(
            "gesture session started at ({}, {}), horizontal region: {}",
            position.x,
            position.y,
            horizontal_target.is_some()
        );
        self.session = Some(GestureSession::new(position, horizontal_target));
        true
    }

    /// Processes a move to `position`.
    ///
    /// `prevent_native_scroll` is invoked exactly once when the move scrolls
    /// a target, and never otherwise.
    pub fn on_gesture_move(
        &mut self,
        position: Point,
        prevent_native_scroll: impl FnOnce(),
    ) -> MoveDisposition {
        let Some(session) = self.session.as_mut() else {
            return MoveDisposition::NoSession;
        };

        let was_decided = session.intent().is_decided();
        let step = session.advance(position, self.config.intent_deadband);
        if !was_decided && session.intent().is_decided() {
            log::debug!(
                "gesture intent decided: {:?} after displacement {:?}",
                session.intent(),
                session.total_displacement(position)
            );
        }

        match step {
            SessionStep::Deferred => MoveDisposition::Deferred,
            SessionStep::PassThrough => MoveDisposition::PassedThrough,
            SessionStep::Route {
                orientation: Orientation::Vertical,
                delta,
            } => {
                // Content follows the finger: dragging down scrolls up.
                let consumed = self.primary.consume_scroll_delta(-delta);
                prevent_native_scroll();
                log::trace!("routed vertical delta {} (consumed {})", delta, consumed);
                MoveDisposition::ScrolledVertical { consumed }
            }
            SessionStep::Route {
                orientation: Orientation::Horizontal,
                delta,
            } => {
                let Some(target) = session.horizontal_target() else {
                    return MoveDisposition::PassedThrough;
                };
                let consumed = target.consume_scroll_delta(-delta);
                prevent_native_scroll();
                log::trace!("routed horizontal delta {} (consumed {})", delta, consumed);
                MoveDisposition::ScrolledHorizontal { consumed }
            }
        }
    }

    pub fn on_gesture_end(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("gesture session ended with intent {:?}", session.intent());
        }
    }

    pub fn on_gesture_cancel(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("gesture session cancelled with intent {:?}", session.intent());
        }
    }
}

impl<R: HorizontalRegionResolver> fmt::Debug for GestureIntentRouter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureIntentRouter")
            .field("config", &self.config)
            .field("gated", &self.activation.is_some())
            .field("session", &self.session)
            .finish()
    }
}

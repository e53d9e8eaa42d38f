//! Scroll state for headless containers.
//!
//! `ScrollState` models one axis of a scroll container the way a browser
//! does: the offset lives in `[0, max_value]` and writes outside that range
//! are clamped.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use swerve_foundation::{Orientation, ScrollableState};

static NEXT_SCROLL_STATE_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Scroll position of one container axis.
///
/// Cloning shares the underlying state, so the router and the host can hold
/// the same container.
#[derive(Clone)]
pub struct ScrollState {
    inner: Rc<ScrollStateInner>,
}

struct ScrollStateInner {
    /// Unique ID for debugging
    id: u64,
    orientation: Orientation,
    /// Current scroll offset in pixels.
    value: Cell<f32>,
    /// Maximum scroll value (content_size - viewport_size)
    max_value: Cell<f32>,
    /// Called with the new offset whenever it changes.
    listeners: RefCell<HashMap<u64, Box<dyn Fn(f32)>>>,
}

impl ScrollState {
    /// Creates a new ScrollState with the given initial position and maximum.
    pub fn new(orientation: Orientation, initial: f32, max_value: f32) -> Self {
        let id = NEXT_SCROLL_STATE_ID.fetch_add(1, Ordering::Relaxed);
        let max_value = max_value.max(0.0);

        Self {
            inner: Rc::new(ScrollStateInner {
                id,
                orientation,
                value: Cell::new(initial.clamp(0.0, max_value)),
                max_value: Cell::new(max_value),
                listeners: RefCell::new(HashMap::new()),
            }),
        }
    }

    pub fn vertical(initial: f32, max_value: f32) -> Self {
        Self::new(Orientation::Vertical, initial, max_value)
    }

    pub fn horizontal(initial: f32, max_value: f32) -> Self {
        Self::new(Orientation::Horizontal, initial, max_value)
    }

    /// Get the unique ID of this ScrollState
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn orientation(&self) -> Orientation {
        self.inner.orientation
    }

    /// Gets the current scroll position in pixels.
    pub fn value(&self) -> f32 {
        self.inner.value.get()
    }

    /// Gets the maximum scroll value.
    pub fn max_value(&self) -> f32 {
        self.inner.max_value.get()
    }

    /// Updates the maximum, re-clamping the current offset.
    pub fn set_max_value(&self, max: f32) {
        let max = max.max(0.0);
        self.inner.max_value.set(max);
        if self.value() > max {
            self.scroll_to(max);
        }
    }

    /// Scrolls by the given delta, clamping to valid range [0, max_value].
    /// Returns the actual amount scrolled.
    pub fn dispatch_raw_delta(&self, delta: f32) -> f32 {
        let current = self.value();
        let new_value = (current + delta).clamp(0.0, self.max_value());
        let actual_delta = new_value - current;

        if actual_delta.abs() > 0.001 {
            self.inner.value.set(new_value);
            self.notify(new_value);
        }

        actual_delta
    }

    /// Scrolls to the given position immediately.
    pub fn scroll_to(&self, position: f32) {
        let clamped = position.clamp(0.0, self.max_value());
        if clamped != self.value() {
            self.inner.value.set(clamped);
            self.notify(clamped);
        }
    }

    /// Registers a change listener and returns its ID.
    pub fn add_listener(&self, listener: impl Fn(f32) + 'static) -> u64 {
        let id = NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .borrow_mut()
            .insert(id, Box::new(listener));
        id
    }

    /// Removes a change listener by ID
    pub fn remove_listener(&self, id: u64) {
        self.inner.listeners.borrow_mut().remove(&id);
    }

    /// Whether two handles share the same underlying state.
    pub fn ptr_eq(&self, other: &ScrollState) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self, value: f32) {
        for listener in self.inner.listeners.borrow().values() {
            listener(value);
        }
    }
}

impl ScrollableState for ScrollState {
    fn scroll_offset(&self) -> f32 {
        self.value()
    }

    fn set_scroll_offset(&self, offset: f32) {
        self.scroll_to(offset);
    }

    fn consume_scroll_delta(&self, delta: f32) -> f32 {
        self.dispatch_raw_delta(delta)
    }
}

impl fmt::Debug for ScrollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollState")
            .field("id", &self.inner.id)
            .field("orientation", &self.inner.orientation)
            .field("value", &self.value())
            .field("max_value", &self.max_value())
            .finish()
    }
}

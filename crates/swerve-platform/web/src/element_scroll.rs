//! DOM elements as scroll targets.
//!
//! `scrollTop`/`scrollLeft` are integral in `web-sys`, so each target keeps
//! the fractional part of the deltas it was given and applies it once it
//! adds up to a whole pixel.

use std::cell::Cell;
use swerve_foundation::{Orientation, ScrollableState};
use web_sys::Element;

/// Splits deltas into whole pixels, carrying the fraction forward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SubPixelAccumulator {
    remainder: f32,
}

impl SubPixelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` and returns the whole pixels ready to apply.
    pub fn take(&mut self, delta: f32) -> i32 {
        let total = self.remainder + delta;
        let whole = total.trunc();
        self.remainder = total - whole;
        whole as i32
    }

    pub fn remainder(&self) -> f32 {
        self.remainder
    }

    pub fn reset(&mut self) {
        self.remainder = 0.0;
    }
}

pub struct ElementScroll {
    element: Element,
    orientation: Orientation,
    pending: Cell<SubPixelAccumulator>,
}

impl ElementScroll {
    pub fn new(element: Element, orientation: Orientation) -> Self {
        Self {
            element,
            orientation,
            pending: Cell::new(SubPixelAccumulator::new()),
        }
    }

    /// `scrollTop` of `element`.
    pub fn vertical(element: Element) -> Self {
        Self::new(element, Orientation::Vertical)
    }

    /// `scrollLeft` of `element`.
    pub fn horizontal(element: Element) -> Self {
        Self::new(element, Orientation::Horizontal)
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn read(&self) -> i32 {
        match self.orientation {
            Orientation::Vertical => self.element.scroll_top(),
            Orientation::Horizontal => self.element.scroll_left(),
        }
    }

    fn write(&self, value: i32) {
        match self.orientation {
            Orientation::Vertical => self.element.set_scroll_top(value),
            Orientation::Horizontal => self.element.set_scroll_left(value),
        }
    }
}

impl ScrollableState for ElementScroll {
    fn scroll_offset(&self) -> f32 {
        self.read() as f32
    }

    fn set_scroll_offset(&self, offset: f32) {
        let mut pending = self.pending.get();
        pending.reset();
        self.pending.set(pending);
        self.write(offset.round() as i32);
    }

    fn consume_scroll_delta(&self, delta: f32) -> f32 {
        let mut pending = self.pending.get();
        let whole = pending.take(delta);
        if whole == 0 {
            self.pending.set(pending);
            return 0.0;
        }

        let before = self.read();
        self.write(before + whole);
        let consumed = self.read() - before;
        if consumed != whole {
            // Hit an edge; the carried fraction points past it.
            pending.reset();
        }
        self.pending.set(pending);
        consumed as f32
    }
}

impl std::fmt::Debug for ElementScroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementScroll")
            .field("orientation", &self.orientation)
            .field("offset", &self.read())
            .finish()
    }
}

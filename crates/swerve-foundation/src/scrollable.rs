//! Low-level scrollable state trait.
//!
//! This module provides the ScrollableState trait that the router drives.
//! Each implementation represents one scroll axis of one container: the
//! vertical offset of the modal body, or the horizontal offset of a
//! carousel.

/// Orientation for scrolling - horizontal or vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Mutable scroll offset of a single container axis.
///
/// Offsets are in the same logical pixel units as pointer coordinates. The
/// router only ever calls `consume_scroll_delta`; hosts use the accessors.
pub trait ScrollableState {
    /// Current scroll offset along this target's axis.
    fn scroll_offset(&self) -> f32;

    /// Moves the scroll offset. Implementations may clamp.
    fn set_scroll_offset(&self, offset: f32);

    /// Consume a scroll delta and return the amount consumed.
    ///
    /// A positive delta reveals content further along the axis. The returned
    /// value may be smaller than `delta` if the target clamps at its bounds.
    fn consume_scroll_delta(&self, delta: f32) -> f32 {
        let before = self.scroll_offset();
        self.set_scroll_offset(before + delta);
        self.scroll_offset() - before
    }
}

impl<T: ScrollableState + ?Sized> ScrollableState for std::rc::Rc<T> {
    fn scroll_offset(&self) -> f32 {
        (**self).scroll_offset()
    }

    fn set_scroll_offset(&self, offset: f32) {
        (**self).set_scroll_offset(offset)
    }

    fn consume_scroll_delta(&self, delta: f32) -> f32 {
        (**self).consume_scroll_delta(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Unbounded(Cell<f32>);

    impl ScrollableState for Unbounded {
        fn scroll_offset(&self) -> f32 {
            self.0.get()
        }

        fn set_scroll_offset(&self, offset: f32) {
            self.0.set(offset);
        }
    }

    struct Floored(Cell<f32>);

    impl ScrollableState for Floored {
        fn scroll_offset(&self) -> f32 {
            self.0.get()
        }

        fn set_scroll_offset(&self, offset: f32) {
            self.0.set(offset.max(0.0));
        }
    }

    #[test]
    fn default_consume_applies_full_delta() {
        let target = Unbounded(Cell::new(100.0));
        assert_eq!(target.consume_scroll_delta(-40.0), -40.0);
        assert_eq!(target.scroll_offset(), 60.0);
    }

    #[test]
    fn default_consume_reports_clamped_amount() {
        let target = Floored(Cell::new(10.0));
        assert_eq!(target.consume_scroll_delta(-25.0), -10.0);
        assert_eq!(target.scroll_offset(), 0.0);
    }
}

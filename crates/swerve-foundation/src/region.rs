//! Horizontal-region lookup for gesture origins.

use crate::scrollable::ScrollableState;
use std::rc::Rc;

/// Resolves the horizontal scroll region a gesture started in.
///
/// Implementations search upward from the origin (inclusive) for the nearest
/// ancestor marked as a horizontal-scroll region. The router calls this once
/// per gesture, at start.
pub trait HorizontalRegionResolver {
    /// Handle to the element under the pointer at gesture start.
    type Origin: ?Sized;

    fn resolve_horizontal_region(&self, origin: &Self::Origin)
        -> Option<Rc<dyn ScrollableState>>;
}

/// Resolver for containers with no horizontal regions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRegions;

impl HorizontalRegionResolver for NoRegions {
    type Origin = ();

    fn resolve_horizontal_region(&self, _origin: &()) -> Option<Rc<dyn ScrollableState>> {
        None
    }
}

impl<R: HorizontalRegionResolver + ?Sized> HorizontalRegionResolver for Rc<R> {
    type Origin = R::Origin;

    fn resolve_horizontal_region(&self, origin: &Self::Origin) -> Option<Rc<dyn ScrollableState>> {
        (**self).resolve_horizontal_region(origin)
    }
}

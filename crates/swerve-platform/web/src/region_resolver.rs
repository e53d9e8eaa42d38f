use crate::element_scroll::ElementScroll;
use std::rc::Rc;
use swerve_foundation::{HorizontalRegionResolver, ScrollableState, HORIZONTAL_REGION_CLASS};
use web_sys::Element;

/// Finds the horizontal region with `Element.closest()`.
#[derive(Clone, Debug)]
pub struct ClosestRegionResolver {
    selector: String,
}

impl ClosestRegionResolver {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl Default for ClosestRegionResolver {
    fn default() -> Self {
        Self::new(format!(".{HORIZONTAL_REGION_CLASS}"))
    }
}

impl HorizontalRegionResolver for ClosestRegionResolver {
    type Origin = Element;

    fn resolve_horizontal_region(&self, origin: &Element) -> Option<Rc<dyn ScrollableState>> {
        match origin.closest(&self.selector) {
            Ok(Some(region)) => Some(Rc::new(ElementScroll::horizontal(region))),
            Ok(None) => None,
            Err(err) => {
                log::warn!(
                    "region lookup with `{}` failed: {}",
                    self.selector,
                    crate::error::js_message(&err)
                );
                None
            }
        }
    }
}

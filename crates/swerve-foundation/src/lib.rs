//! Gesture intent routing core for Swerve.
//!
//! A drag that starts inside a registered scroll container is classified as
//! vertical or horizontal once it leaves a small deadband, and from then on
//! every move of that drag is routed to exactly one scroll target.

pub mod config;
pub mod gesture_constants;
pub mod nodes;
pub mod region;
pub mod scrollable;

pub use config::GestureConfig;
pub use gesture_constants::*;
pub use nodes::input::dispatcher::PointerDispatcher;
pub use nodes::input::gestures::{
    classify_intent, GestureIntent, GestureIntentRouter, GestureSession, MoveDisposition,
    SessionStep,
};
pub use nodes::input::{ContactId, InputEvent, PointerEventKind, PointerType};
pub use region::{HorizontalRegionResolver, NoRegions};
pub use scrollable::{Orientation, ScrollableState};
pub use swerve_ui_graphics::{Delta, Point};

pub mod prelude {
    pub use crate::config::GestureConfig;
    pub use crate::nodes::input::gestures::{GestureIntent, GestureIntentRouter, MoveDisposition};
    pub use crate::nodes::input::prelude::*;
    pub use crate::region::HorizontalRegionResolver;
    pub use crate::scrollable::{Orientation, ScrollableState};
}

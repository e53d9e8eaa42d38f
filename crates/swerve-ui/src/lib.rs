//! Headless collaborators for the Swerve gesture router.
//!
//! These types stand in for the live UI tree: a clamped scroll model, an
//! element tree that knows which nodes are horizontal-scroll regions, and
//! the "is the modal open" signal that gates routing.

mod modal;
mod region_tree;
mod scroll;

pub use modal::ModalState;
pub use region_tree::{NodeId, RegionTree};
pub use scroll::ScrollState;

pub use swerve_foundation::{
    GestureConfig, GestureIntent, GestureIntentRouter, MoveDisposition, Orientation,
    ScrollableState,
};
pub use swerve_ui_graphics::{Delta, Point};

//! Pure geometry for Swerve
//!
//! Points and deltas in logical pixels, shared by the gesture core, the
//! input adapters and the platform bindings.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Delta, Point};
}

//! Testing utilities and harness for Swerve

pub mod gesture_assertions;
pub mod testing;

pub use gesture_assertions::*;
pub use testing::*;

pub mod prelude {
    pub use crate::gesture_assertions;
    pub use crate::testing::*;
}

//! Tunables for the gesture intent router.

use crate::gesture_constants::INTENT_DEADBAND;

/// Configuration shared by every router a host creates.
///
/// ```ignore
/// let config = GestureConfig::default().with_intent_deadband(8.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Additive margin one axis must win by before intent is decided.
    pub intent_deadband: f32,
    /// Stop move events handled inside a container from reaching outer
    /// page handlers.
    pub contain_propagation: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            intent_deadband: INTENT_DEADBAND,
            contain_propagation: true,
        }
    }
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intent_deadband(mut self, deadband: f32) -> Self {
        self.intent_deadband = deadband;
        self.sanitized()
    }

    pub fn with_contain_propagation(mut self, contain: bool) -> Self {
        self.contain_propagation = contain;
        self
    }

    /// Replaces a negative or non-finite deadband with the default.
    ///
    /// Deserialized configs bypass the builder, so routers call this on
    /// construction as well.
    pub fn sanitized(mut self) -> Self {
        if !self.intent_deadband.is_finite() || self.intent_deadband < 0.0 {
            log::warn!(
                "ignoring invalid intent deadband {}, using {}",
                self.intent_deadband,
                INTENT_DEADBAND
            );
            self.intent_deadband = INTENT_DEADBAND;
        }
        self
    }
}

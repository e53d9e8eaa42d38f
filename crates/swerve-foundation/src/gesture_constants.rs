//! Shared gesture constants for touch/pointer intent classification.
//!
//! These values are in logical pixels, the same units the host reports
//! pointer coordinates and scroll offsets in.

/// Default intent deadband in logical pixels.
///
/// A drag commits to an axis only once the displacement along that axis
/// exceeds the displacement along the other axis by more than this margin.
/// The margin is additive, not a ratio: small enough to commit within the
/// first few move events, large enough to absorb hand tremor at touch-down.
/// A displacement that lands exactly on the margin stays undecided.
pub const INTENT_DEADBAND: f32 = 5.0;

/// CSS class that marks a horizontally scrollable region (carousel).
pub const HORIZONTAL_REGION_CLASS: &str = "horizontal-scroll";

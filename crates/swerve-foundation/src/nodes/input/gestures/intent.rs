//! Drag axis classification.

use crate::scrollable::Orientation;
use swerve_ui_graphics::Delta;

/// Dominant axis of an in-progress drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureIntent {
    #[default]
    Undecided,
    Vertical,
    Horizontal,
}

impl GestureIntent {
    pub fn is_decided(self) -> bool {
        self != GestureIntent::Undecided
    }

    /// Scroll orientation this intent drives, if decided.
    pub fn orientation(self) -> Option<Orientation> {
        match self {
            GestureIntent::Undecided => None,
            GestureIntent::Vertical => Some(Orientation::Vertical),
            GestureIntent::Horizontal => Some(Orientation::Horizontal),
        }
    }
}

/// Classifies total displacement from the gesture origin.
///
/// `total` is the absolute displacement per axis. An axis wins only when it
/// exceeds the other by strictly more than `deadband`; vertical is checked
/// first. Anything else, including a displacement exactly on the margin, is
/// `Undecided`.
pub fn classify_intent(total: Delta, deadband: f32) -> GestureIntent {
    let total = total.abs();
    if total.dy > total.dx + deadband {
        GestureIntent::Vertical
    } else if total.dx > total.dy + deadband {
        GestureIntent::Horizontal
    } else {
        GestureIntent::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture_constants::INTENT_DEADBAND;

    #[test]
    fn jitter_stays_undecided() {
        assert_eq!(
            classify_intent(Delta::new(3.0, 3.0), INTENT_DEADBAND),
            GestureIntent::Undecided
        );
        assert_eq!(
            classify_intent(Delta::new(0.0, 5.0), INTENT_DEADBAND),
            GestureIntent::Undecided
        );
        assert_eq!(
            classify_intent(Delta::ZERO, INTENT_DEADBAND),
            GestureIntent::Undecided
        );
    }

    #[test]
    fn exact_margin_is_a_tie() {
        assert_eq!(
            classify_intent(Delta::new(10.0, 15.0), INTENT_DEADBAND),
            GestureIntent::Undecided
        );
        assert_eq!(
            classify_intent(Delta::new(10.0, 15.01), INTENT_DEADBAND),
            GestureIntent::Vertical
        );
        assert_eq!(
            classify_intent(Delta::new(15.0, 10.0), INTENT_DEADBAND),
            GestureIntent::Undecided
        );
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(
            classify_intent(Delta::new(0.0, 40.0), INTENT_DEADBAND),
            GestureIntent::Vertical
        );
        assert_eq!(
            classify_intent(Delta::new(40.0, 2.0), INTENT_DEADBAND),
            GestureIntent::Horizontal
        );
    }

    #[test]
    fn sign_of_displacement_is_ignored() {
        assert_eq!(
            classify_intent(Delta::new(-2.0, -40.0), INTENT_DEADBAND),
            GestureIntent::Vertical
        );
        assert_eq!(
            classify_intent(Delta::new(-40.0, 1.0), INTENT_DEADBAND),
            GestureIntent::Horizontal
        );
    }

    #[test]
    fn zero_deadband_commits_on_any_difference() {
        assert_eq!(classify_intent(Delta::new(1.0, 1.5), 0.0), GestureIntent::Vertical);
        assert_eq!(classify_intent(Delta::new(1.0, 1.0), 0.0), GestureIntent::Undecided);
    }

    #[test]
    fn orientation_mapping() {
        assert_eq!(GestureIntent::Undecided.orientation(), None);
        assert_eq!(
            GestureIntent::Vertical.orientation(),
            Some(Orientation::Vertical)
        );
        assert!(GestureIntent::Horizontal.is_decided());
        assert!(!GestureIntent::Undecided.is_decided());
    }
}

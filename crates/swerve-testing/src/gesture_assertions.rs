//! Assertion utilities for gesture tests
//!
//! Scroll offsets are floats, so comparisons go through a tolerance.

use swerve_foundation::{GestureIntent, MoveDisposition};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a scroll offset moved by exactly `expected` pixels.
pub fn assert_scrolled_by(change: f32, expected: f32, msg: &str) {
    assert_approx_eq(change, expected, 1e-3, msg);
}

/// Assert that a scroll offset did not move.
pub fn assert_untouched(change: f32, msg: &str) {
    assert_approx_eq(change, 0.0, 1e-3, &format!("{} (should be untouched)", msg));
}

/// Assert a sequence of intents never leaves its first decided value.
pub fn assert_intent_stable(history: &[GestureIntent], msg: &str) {
    let decided: Vec<_> = history.iter().filter(|i| i.is_decided()).collect();
    if let Some(first) = decided.first() {
        assert!(
            decided.iter().all(|i| i == first),
            "{}: intent changed within a session: {:?}",
            msg,
            history
        );
    }
    let first_decided = history.iter().position(|i| i.is_decided());
    if let Some(index) = first_decided {
        assert!(
            history[index..].iter().all(|i| i.is_decided()),
            "{}: intent reverted to undecided: {:?}",
            msg,
            history
        );
    }
}

/// Assert that a disposition suppressed native scrolling.
pub fn assert_suppressed(disposition: MoveDisposition, msg: &str) {
    assert!(
        disposition.suppressed_native(),
        "{}: expected a routed move, got {:?}",
        msg,
        disposition
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_history_passes() {
        assert_intent_stable(
            &[
                GestureIntent::Undecided,
                GestureIntent::Vertical,
                GestureIntent::Vertical,
            ],
            "stable",
        );
        assert_intent_stable(&[GestureIntent::Undecided], "never decided");
    }

    #[test]
    #[should_panic(expected = "intent changed")]
    fn flipped_history_fails() {
        assert_intent_stable(
            &[GestureIntent::Vertical, GestureIntent::Horizontal],
            "flipped",
        );
    }

    #[test]
    #[should_panic(expected = "reverted")]
    fn reverted_history_fails() {
        assert_intent_stable(
            &[GestureIntent::Vertical, GestureIntent::Undecided],
            "reverted",
        );
    }

    #[test]
    fn approx_within_tolerance() {
        assert_scrolled_by(-40.0005, -40.0, "close enough");
        assert_untouched(0.0, "zero");
    }
}

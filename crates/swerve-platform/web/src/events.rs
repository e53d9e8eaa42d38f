//! DOM event conversion.

use smallvec::SmallVec;
use swerve_app_shell::{TouchInput, TouchPoint};
use swerve_foundation::{InputEvent, PointerEventKind, PointerType};
use swerve_ui_graphics::Point;
use web_sys::{PointerEvent, TouchEvent, TouchList};

pub const POINTER_EVENTS: [&str; 4] = ["pointerdown", "pointermove", "pointerup", "pointercancel"];
pub const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

pub fn event_kind(event_type: &str) -> Option<PointerEventKind> {
    match event_type {
        "pointerdown" | "touchstart" => Some(PointerEventKind::Down),
        "pointermove" | "touchmove" => Some(PointerEventKind::Move),
        "pointerup" | "touchend" => Some(PointerEventKind::Up),
        "pointercancel" | "touchcancel" => Some(PointerEventKind::Cancel),
        _ => None,
    }
}

/// Whether listeners for `event_type` must be able to call `preventDefault`.
pub fn needs_active_listener(event_type: &str) -> bool {
    matches!(
        event_kind(event_type),
        Some(PointerEventKind::Down | PointerEventKind::Move)
    )
}

/// Client coordinates are CSS pixels, the same units as `scrollTop`.
pub fn client_position(x: i32, y: i32) -> Point {
    Point::new(x as f32, y as f32)
}

pub fn input_event(event: &PointerEvent, kind: PointerEventKind) -> InputEvent {
    InputEvent::new(
        kind,
        event.pointer_id(),
        client_position(event.client_x(), event.client_y()),
    )
    .with_pointer_type(PointerType::from_dom(&event.pointer_type()))
    .with_primary(event.is_primary())
}

fn touch_points(list: &TouchList) -> SmallVec<[TouchPoint; 2]> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|touch| {
            let position = client_position(touch.client_x(), touch.client_y());
            TouchPoint::new(touch.identifier(), position.x, position.y)
        })
        .collect()
}

pub fn touch_input(event: &TouchEvent, kind: PointerEventKind) -> TouchInput {
    TouchInput::new(
        kind,
        touch_points(&event.changed_touches()),
        touch_points(&event.touches()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_families_map_to_the_same_kinds() {
        for (pointer, touch) in POINTER_EVENTS.iter().zip(TOUCH_EVENTS.iter()) {
            assert!(event_kind(pointer).is_some(), "{pointer}");
            assert_eq!(event_kind(pointer), event_kind(touch));
        }
        assert_eq!(event_kind("click"), None);
    }

    #[test]
    fn only_start_and_move_are_active() {
        assert!(needs_active_listener("touchstart"));
        assert!(needs_active_listener("pointermove"));
        assert!(!needs_active_listener("touchend"));
        assert!(!needs_active_listener("pointercancel"));
    }
}

use std::cell::Cell;
use std::rc::Rc;
use swerve_ui_graphics::Point;

/// Identity of one contact: a `pointerId` or a touch `identifier`.
pub type ContactId = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Source device of a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerType {
    Mouse,
    #[default]
    Touch,
    Pen,
}

impl PointerType {
    /// Maps the DOM `pointerType` string. Unknown types are treated as touch.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "mouse" => PointerType::Mouse,
            "pen" => PointerType::Pen,
            _ => PointerType::Touch,
        }
    }
}

/// Normalized input event with default-prevention tracking.
///
/// Events can have their default handling prevented by the router to stop
/// the platform from scrolling natively on top of a routed drag. The flag is
/// shared via `Rc<Cell>` so copies made while dispatching observe the same
/// state, which lets a headless host inspect the outcome after dispatch.
#[derive(Clone, Debug)]
pub struct InputEvent {
    pub contact: ContactId,
    pub kind: PointerEventKind,
    pub pointer_type: PointerType,
    pub position: Point,
    /// Whether the host reports this as the primary contact.
    pub is_primary: bool,
    default_prevented: Rc<Cell<bool>>,
}

impl InputEvent {
    pub fn new(kind: PointerEventKind, contact: ContactId, position: Point) -> Self {
        Self {
            contact,
            kind,
            pointer_type: PointerType::default(),
            position,
            is_primary: true,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(contact: ContactId, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, contact, Point::new(x, y))
    }

    pub fn moved(contact: ContactId, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, contact, Point::new(x, y))
    }

    pub fn up(contact: ContactId, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, contact, Point::new(x, y))
    }

    pub fn cancel(contact: ContactId) -> Self {
        Self::new(PointerEventKind::Cancel, contact, Point::ZERO)
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// Suppresses the platform's default scroll handling for this event.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prevention_is_shared_between_clones() {
        let event = InputEvent::moved(1, 10.0, 20.0);
        let copy = event.clone();
        assert!(!event.is_default_prevented());
        copy.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn dom_pointer_types() {
        assert_eq!(PointerType::from_dom("mouse"), PointerType::Mouse);
        assert_eq!(PointerType::from_dom("pen"), PointerType::Pen);
        assert_eq!(PointerType::from_dom("touch"), PointerType::Touch);
        assert_eq!(PointerType::from_dom(""), PointerType::Touch);
    }
}

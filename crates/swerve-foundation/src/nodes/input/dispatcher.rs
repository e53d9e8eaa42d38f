//! Pointer input dispatcher plumbing.
//!
//! Hosts that receive input outside of a UI callback (a replayed script, a
//! test harness) enqueue normalized events here and drain them into an input
//! adapter in arrival order.

use super::types::{ContactId, InputEvent};
use smallvec::SmallVec;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: SmallVec<[(ContactId, InputEvent); 8]>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push((event.contact, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(ContactId, InputEvent),
    {
        for (id, event) in self.queue.drain(..) {
            handler(id, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::input::types::PointerEventKind;

    #[test]
    fn drains_in_arrival_order() {
        let mut dispatcher = PointerDispatcher::new();
        dispatcher.push(InputEvent::down(3, 0.0, 0.0));
        dispatcher.push(InputEvent::moved(3, 0.0, 10.0));
        dispatcher.push(InputEvent::up(3, 0.0, 10.0));
        assert_eq!(dispatcher.len(), 3);

        let mut kinds = Vec::new();
        dispatcher.drain(|id, event| {
            assert_eq!(id, 3);
            kinds.push(event.kind);
        });

        assert_eq!(
            kinds,
            vec![
                PointerEventKind::Down,
                PointerEventKind::Move,
                PointerEventKind::Up
            ]
        );
        assert!(dispatcher.is_empty());
    }
}

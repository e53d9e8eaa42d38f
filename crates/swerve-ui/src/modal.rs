//! Modal open/closed signal.

use std::cell::Cell;
use std::rc::Rc;

/// Shared "is the modal open" flag.
///
/// The host flips it when it shows or hides the modal; routers read it
/// through [`ModalState::activation`] at gesture start.
#[derive(Clone, Debug, Default)]
pub struct ModalState {
    open: Rc<Cell<bool>>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        if !self.open.replace(true) {
            log::debug!("modal opened");
        }
    }

    pub fn close(&self) {
        if self.open.replace(false) {
            log::debug!("modal closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Predicate for [`swerve_foundation::GestureIntentRouter::with_activation`].
    pub fn activation(&self) -> impl Fn() -> bool + 'static {
        let open = self.open.clone();
        move || open.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_tracks_state() {
        let modal = ModalState::new();
        let is_active = modal.activation();
        assert!(!is_active());
        modal.open();
        assert!(is_active());
        modal.close();
        modal.close();
        assert!(!is_active());
        assert!(!modal.is_open());
    }
}

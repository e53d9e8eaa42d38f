//! Adapter selection.

use crate::pointer_adapter::PointerAdapter;
use crate::touch_adapter::TouchAdapter;
use swerve_foundation::ContactId;

/// Input event families the host platform can deliver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCapabilities {
    /// Unified pointer events with pointer capture.
    pub pointer_events: bool,
    /// Discrete touch events.
    pub touch_events: bool,
}

impl InputCapabilities {
    pub fn pointer() -> Self {
        Self {
            pointer_events: true,
            touch_events: false,
        }
    }

    pub fn touch() -> Self {
        Self {
            pointer_events: false,
            touch_events: true,
        }
    }
}

/// The adapter a container uses for its whole lifetime.
#[derive(Clone, Copy, Debug)]
pub enum InputAdapter {
    Pointer(PointerAdapter),
    Touch(TouchAdapter),
}

impl InputAdapter {
    /// Prefers unified pointer events when the platform has them.
    ///
    /// With neither family reported, falls back to touch events: hosts that
    /// cannot detect support still get the listener set most mobile browsers
    /// deliver.
    pub fn select(capabilities: InputCapabilities) -> Self {
        let adapter = if capabilities.pointer_events {
            InputAdapter::Pointer(PointerAdapter::new())
        } else {
            InputAdapter::Touch(TouchAdapter::new())
        };
        log::debug!("selected {} input adapter", adapter.name());
        adapter
    }

    /// Prefers touch events when the platform has them.
    ///
    /// A cancelable `touchmove` lets a drag stay native until intent is
    /// decided. Pointer events only offer that through `touch-action`, which
    /// must be fixed before the drag starts, so hosts that need deferred and
    /// pass-through drags to pan natively pick touch events where possible.
    pub fn select_cancelable(capabilities: InputCapabilities) -> Self {
        if capabilities.touch_events {
            let adapter = InputAdapter::Touch(TouchAdapter::new());
            log::debug!("selected {} input adapter", adapter.name());
            adapter
        } else {
            Self::select(capabilities)
        }
    }

    /// Contact that owns the gesture in progress, if any.
    pub fn active_contact(&self) -> Option<ContactId> {
        match self {
            InputAdapter::Pointer(adapter) => adapter.active_contact(),
            InputAdapter::Touch(adapter) => adapter.active_contact(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InputAdapter::Pointer(_) => "pointer",
            InputAdapter::Touch(_) => "touch",
        }
    }

    pub fn as_pointer_mut(&mut self) -> Option<&mut PointerAdapter> {
        match self {
            InputAdapter::Pointer(adapter) => Some(adapter),
            InputAdapter::Touch(_) => None,
        }
    }

    pub fn as_touch_mut(&mut self) -> Option<&mut TouchAdapter> {
        match self {
            InputAdapter::Touch(adapter) => Some(adapter),
            InputAdapter::Pointer(_) => None,
        }
    }
}

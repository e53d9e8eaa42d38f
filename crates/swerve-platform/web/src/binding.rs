//! Listener installation for one registered scroll container.
//!
//! A `GestureBinding` owns the router for its container and the DOM
//! listeners feeding it. Start and move listeners are registered with
//! `passive: false` so routed moves can call `preventDefault`. Dropping the
//! binding removes every listener it added.
//!
//! Touch events are preferred when the browser has them: a `touchmove` can
//! be cancelled move by move, so deferred and passed-through gestures keep
//! native panning. Pointer bindings capture the pointer only once a move is
//! routed, leaving taps and native scrolls targeted as usual.

use crate::element_scroll::ElementScroll;
use crate::error::{js_message, WebPlatformError};
use crate::events::{self, POINTER_EVENTS, TOUCH_EVENTS};
use crate::region_resolver::ClosestRegionResolver;
use std::cell::RefCell;
use std::rc::Rc;
use swerve_app_shell::{InputAdapter, InputCapabilities};
use swerve_foundation::{
    ContactId, GestureConfig, GestureIntent, GestureIntentRouter, MoveDisposition,
    PointerEventKind,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, HtmlElement, PointerEvent, TouchEvent};

pub struct BindingOptions {
    pub config: GestureConfig,
    /// Selector matched with `closest()` from the gesture target.
    pub region_selector: String,
    /// Detected from the window when `None`.
    pub capabilities: Option<InputCapabilities>,
    /// Set `touch-action: none` on the container while the pointer adapter
    /// is in use. Cancelling `pointermove` alone does not stop panning, but
    /// this also disables panning for gestures the router defers or passes
    /// through, so it is opt-in.
    pub manage_touch_action: bool,
    /// Gate checked at each gesture start, e.g. "is the modal open".
    pub activation: Option<Box<dyn Fn() -> bool>>,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            config: GestureConfig::default(),
            region_selector: ClosestRegionResolver::default().selector().to_owned(),
            capabilities: None,
            manage_touch_action: false,
            activation: None,
        }
    }
}

impl BindingOptions {
    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_activation(mut self, is_active: impl Fn() -> bool + 'static) -> Self {
        self.activation = Some(Box::new(is_active));
        self
    }

    pub fn with_capabilities(mut self, capabilities: InputCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    pub fn with_managed_touch_action(mut self) -> Self {
        self.manage_touch_action = true;
        self
    }
}

struct BindingState {
    router: GestureIntentRouter<ClosestRegionResolver>,
    adapter: InputAdapter,
    container: Element,
    contain_propagation: bool,
    /// Pointer captured by the container for the current gesture.
    captured: Option<ContactId>,
}

pub struct GestureBinding {
    container: Element,
    state: Rc<RefCell<BindingState>>,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    saved_touch_action: Option<String>,
}

impl GestureBinding {
    /// Routes gestures starting inside `container`; vertical intent scrolls
    /// `primary`.
    pub fn attach(
        container: Element,
        primary: Element,
        options: BindingOptions,
    ) -> Result<Self, WebPlatformError> {
        // Reject malformed selectors now rather than on every gesture.
        container
            .query_selector(&options.region_selector)
            .map_err(|err| WebPlatformError::InvalidSelector {
                selector: options.region_selector.clone(),
                message: js_message(&err),
            })?;

        let capabilities = match options.capabilities {
            Some(capabilities) => capabilities,
            None => crate::detect_capabilities()?,
        };
        let adapter = InputAdapter::select_cancelable(capabilities);

        let resolver = ClosestRegionResolver::new(options.region_selector);
        let mut router = GestureIntentRouter::with_config(
            Rc::new(ElementScroll::vertical(primary)),
            resolver,
            options.config,
        );
        if let Some(is_active) = options.activation {
            router = router.with_activation(is_active);
        }

        let state = Rc::new(RefCell::new(BindingState {
            router,
            adapter,
            container: container.clone(),
            contain_propagation: options.config.contain_propagation,
            captured: None,
        }));

        let mut binding = Self {
            container,
            state,
            listeners: Vec::new(),
            saved_touch_action: None,
        };

        let names = match adapter {
            InputAdapter::Pointer(_) => POINTER_EVENTS,
            InputAdapter::Touch(_) => TOUCH_EVENTS,
        };
        for name in names {
            binding.listen(name)?;
        }
        if options.manage_touch_action && matches!(adapter, InputAdapter::Pointer(_)) {
            binding.disable_native_panning();
        }

        log::debug!(
            "gesture routing attached with {} adapter, deadband {}",
            adapter.name(),
            options.config.intent_deadband
        );
        Ok(binding)
    }

    fn listen(&mut self, name: &'static str) -> Result<(), WebPlatformError> {
        let state = self.state.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            handle_event(&state, &event);
        }) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(!events::needs_active_listener(name));
        self.container
            .add_event_listener_with_callback_and_add_event_listener_options(
                name,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| WebPlatformError::Listener {
                event: name,
                message: js_message(&err),
            })?;
        self.listeners.push((name, closure));
        Ok(())
    }

    fn disable_native_panning(&mut self) {
        let Some(element) = self.container.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = element.style();
        let previous = style.get_property_value("touch-action").unwrap_or_default();
        match style.set_property("touch-action", "none") {
            Ok(()) => self.saved_touch_action = Some(previous),
            Err(err) => log::warn!("could not set touch-action: {}", js_message(&err)),
        }
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn adapter_name(&self) -> &'static str {
        self.state.borrow().adapter.name()
    }

    pub fn has_session(&self) -> bool {
        self.state.borrow().router.has_session()
    }

    pub fn intent(&self) -> Option<GestureIntent> {
        self.state.borrow().router.intent()
    }

    /// Pointer currently captured by the container, if any.
    pub fn captured_pointer(&self) -> Option<ContactId> {
        self.state.borrow().captured
    }

    /// Cancels any gesture in progress, e.g. when the modal is closed.
    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.router.on_gesture_cancel();
        if let Some(contact) = state.captured.take() {
            release_capture(&state.container, contact);
        }
        let capabilities = match state.adapter {
            InputAdapter::Pointer(_) => InputCapabilities::pointer(),
            InputAdapter::Touch(_) => InputCapabilities::touch(),
        };
        state.adapter = InputAdapter::select(capabilities);
    }

    /// Keeps the listeners installed for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for GestureBinding {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            if let Err(err) = self
                .container
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove `{}` listener: {}", name, js_message(&err));
            }
        }
        if let (Some(previous), Some(element)) = (
            self.saved_touch_action.take(),
            self.container.dyn_ref::<HtmlElement>(),
        ) {
            let restored = if previous.is_empty() {
                element.style().remove_property("touch-action").map(drop)
            } else {
                element.style().set_property("touch-action", &previous)
            };
            if let Err(err) = restored {
                log::warn!("could not restore touch-action: {}", js_message(&err));
            }
        }
    }
}

fn target_element(event: &Event, fallback: &Element) -> Element {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .unwrap_or_else(|| fallback.clone())
}

/// Whether a move with `disposition` should make the container capture
/// `contact`. Only routed moves capture, and only once per gesture.
fn should_capture(
    captured: Option<ContactId>,
    contact: ContactId,
    disposition: MoveDisposition,
) -> bool {
    disposition.suppressed_native() && captured != Some(contact)
}

fn capture(container: &Element, contact: ContactId) -> bool {
    match container.set_pointer_capture(contact) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("pointer capture failed for {}: {}", contact, js_message(&err));
            false
        }
    }
}

fn release_capture(container: &Element, contact: ContactId) {
    if container.has_pointer_capture(contact) {
        if let Err(err) = container.release_pointer_capture(contact) {
            log::debug!("pointer release failed for {}: {}", contact, js_message(&err));
        }
    }
}

fn handle_event(state: &RefCell<BindingState>, event: &Event) {
    let Some(kind) = events::event_kind(&event.type_()) else {
        return;
    };
    let Ok(mut guard) = state.try_borrow_mut() else {
        log::warn!("re-entrant `{}` event ignored", event.type_());
        return;
    };
    let BindingState {
        router,
        adapter,
        container,
        contain_propagation,
        captured,
    } = &mut *guard;
    // Any move seen while a contact is tracked belongs to this container's
    // gesture, routed or not.
    let tracking = adapter.active_contact().is_some();

    let disposition = match adapter {
        InputAdapter::Pointer(pointer) => {
            let Some(dom) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let input = events::input_event(dom, kind);
            match kind {
                PointerEventKind::Down => {
                    let origin = target_element(event, container);
                    if pointer.on_pointer_down(router, &input, &origin).is_started() {
                        if let Some(stale) = captured.take() {
                            release_capture(container, stale);
                        }
                    }
                    None
                }
                PointerEventKind::Move => {
                    let disposition = pointer.on_pointer_move(router, &input);
                    if input.is_default_prevented() {
                        event.prevent_default();
                    }
                    if should_capture(*captured, input.contact, disposition)
                        && capture(container, input.contact)
                    {
                        *captured = Some(input.contact);
                    }
                    Some(disposition)
                }
                PointerEventKind::Up => {
                    pointer.on_pointer_up(router, &input);
                    if *captured == Some(input.contact) {
                        *captured = None;
                    }
                    None
                }
                PointerEventKind::Cancel => {
                    pointer.on_pointer_cancel(router, &input);
                    if *captured == Some(input.contact) {
                        *captured = None;
                    }
                    None
                }
            }
        }
        InputAdapter::Touch(touch) => {
            let Some(dom) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let input = events::touch_input(dom, kind);
            match kind {
                PointerEventKind::Down => {
                    let origin = target_element(event, container);
                    touch.on_touch_start(router, &input, &origin);
                    None
                }
                PointerEventKind::Move => {
                    let disposition = touch.on_touch_move(router, &input);
                    if input.is_default_prevented() {
                        event.prevent_default();
                    }
                    Some(disposition)
                }
                PointerEventKind::Up => {
                    touch.on_touch_end(router, &input);
                    None
                }
                PointerEventKind::Cancel => {
                    touch.on_touch_cancel(router, &input);
                    None
                }
            }
        }
    };

    if disposition.is_some() && *contain_propagation && tracking {
        event.stop_propagation();
    }
}

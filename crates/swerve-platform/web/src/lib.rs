//! Browser bindings for Swerve gesture routing.
//!
//! Connects the gesture router to real DOM elements: scroll targets are
//! `scrollTop`/`scrollLeft` of elements, horizontal regions are found with
//! `closest()`, and events come from non-passive pointer or touch listeners
//! installed on the container.

mod binding;
mod element_scroll;
mod error;
mod events;
mod region_resolver;

pub use binding::{BindingOptions, GestureBinding};
pub use element_scroll::{ElementScroll, SubPixelAccumulator};
pub use error::WebPlatformError;
pub use region_resolver::ClosestRegionResolver;

use swerve_app_shell::InputCapabilities;
use swerve_foundation::GestureConfig;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Selector of the modal's scrollable content in the stock page layout.
pub const MODAL_CONTENT_SELECTOR: &str = ".modal-content";

/// Sets up panic reporting and, with the `logging` feature, console logging.
pub fn install() {
    static INSTALL: std::sync::Once = std::sync::Once::new();
    INSTALL.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();
        #[cfg(feature = "logging")]
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    });
}

pub struct WebPlatform {
    window: Window,
    document: Document,
}

impl WebPlatform {
    pub fn new() -> Result<Self, WebPlatformError> {
        let window = web_sys::window().ok_or(WebPlatformError::MissingWindow)?;
        let document = window.document().ok_or(WebPlatformError::MissingDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Event families this browser can deliver.
    pub fn capabilities(&self) -> InputCapabilities {
        InputCapabilities {
            pointer_events: has_global(&self.window, "PointerEvent"),
            touch_events: has_global(&self.window, "TouchEvent"),
        }
    }

    pub fn query(&self, selector: &str) -> Result<Element, WebPlatformError> {
        self.document
            .query_selector(selector)
            .map_err(|err| WebPlatformError::InvalidSelector {
                selector: selector.to_owned(),
                message: error::js_message(&err),
            })?
            .ok_or_else(|| {
                log::warn!("no element matches `{}`", selector);
                WebPlatformError::MissingElement(selector.to_owned())
            })
    }

    /// Routes gestures inside `content`, which is also the vertical target.
    pub fn bind_scroll_container(
        &self,
        content: Element,
        options: BindingOptions,
    ) -> Result<GestureBinding, WebPlatformError> {
        let options = BindingOptions {
            capabilities: options.capabilities.or(Some(self.capabilities())),
            ..options
        };
        GestureBinding::attach(content.clone(), content, options)
    }
}

fn has_global(window: &Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}

pub(crate) fn detect_capabilities() -> Result<InputCapabilities, WebPlatformError> {
    Ok(WebPlatform::new()?.capabilities())
}

/// Gate that reports the modal open while it is not `aria-hidden="true"`.
pub fn modal_visibility(modal: Element) -> impl Fn() -> bool + 'static {
    move || modal.get_attribute("aria-hidden").as_deref() != Some("true")
}

/// Installs routing on the page's modal content and keeps it for the page
/// lifetime.
///
/// `modal_id`, when given, gates new gestures on that modal being shown.
#[wasm_bindgen(js_name = attachModalRouting)]
pub fn attach_modal_routing(
    modal_id: Option<String>,
    deadband: Option<f32>,
) -> Result<(), JsValue> {
    install();
    let platform = WebPlatform::new()?;
    let content = platform.query(MODAL_CONTENT_SELECTOR)?;

    let mut config = GestureConfig::default();
    if let Some(deadband) = deadband {
        config = config.with_intent_deadband(deadband);
    }
    let mut options = BindingOptions::default().with_config(config);
    if let Some(id) = modal_id {
        let modal = platform
            .document()
            .get_element_by_id(&id)
            .ok_or_else(|| WebPlatformError::MissingElement(format!("#{id}")))?;
        options = options.with_activation(modal_visibility(modal));
    }

    platform.bind_scroll_container(content, options)?.forget();
    Ok(())
}

//! Input plumbing between a host platform and the gesture router.
//!
//! Platforms deliver either unified pointer events or discrete touch events.
//! Both are normalized here into the four calls of [`GestureInput`] by one
//! of two adapters, picked once at setup from the host's capabilities.

mod contact_tracker;
mod input_adapter;
mod input_source;
mod pointer_adapter;
mod router_set;
mod touch_adapter;

pub use contact_tracker::{ContactClaim, ContactTracker};
pub use input_adapter::{InputAdapter, InputCapabilities};
pub use input_source::GestureInput;
pub use pointer_adapter::{PointerAdapter, PointerDownResponse};
pub use router_set::{RegisteredContainer, RouterSet};
pub use touch_adapter::{TouchAdapter, TouchInput, TouchPoint};

pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use types::{ContactId, InputEvent, PointerEventKind, PointerType};

pub mod prelude {
    pub use super::types::{ContactId, InputEvent, PointerEventKind, PointerType};
}

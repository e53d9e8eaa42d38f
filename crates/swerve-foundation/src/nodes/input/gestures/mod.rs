pub mod intent;
pub mod router;
pub mod session;

pub use intent::{classify_intent, GestureIntent};
pub use router::{GestureIntentRouter, MoveDisposition};
pub use session::{GestureSession, SessionStep};

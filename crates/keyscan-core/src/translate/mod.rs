// Keyscan Translation
// Position annotation passes and the engine that runs them

pub mod engine;
pub mod patterns;
pub mod positions;

pub use engine::{translate_chars, TranslateOptions, Translator};
pub use patterns::MAX_CAPTURE_GROUPS;
pub use positions::{PositionArray, Slot};

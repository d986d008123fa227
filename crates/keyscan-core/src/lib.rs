// Keyscan Core Library
// Translates keystroke scripts into PC keyboard scancodes

pub mod error;
pub mod key;
pub mod modifier;
pub mod named;
pub mod script;
pub mod selftest;
pub mod settings;
pub mod token;
pub mod translate;

pub use error::TranslateError;
pub use key::{char_code, Scancode};
pub use modifier::MetaKey;
pub use named::named_key_code;
pub use script::{expand_macros, prepare_script};
pub use selftest::{self_test, SelfTestError};
pub use settings::{Settings, SettingsError};
pub use token::{render, Token};
pub use translate::{translate_chars, TranslateOptions, Translator};

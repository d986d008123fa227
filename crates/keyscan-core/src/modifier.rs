// Keyscan Meta Keys
// Modifier keys that can be combined inside a <...> expression

use std::sync::LazyLock;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A modifier key usable in a meta expression such as `<CtrlAltDelete>`
///
/// The variant name is the spelling used in scripts. Ctrl, Shift and Alt are
/// the left-hand keys; the R-prefixed variants are the right-hand ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum MetaKey {
    Ctrl,
    Shift,
    Alt,
    RAlt,
    RCtrl,
    Win,
    RWin,
}

static NAMES_LONGEST_FIRST: LazyLock<Vec<MetaKey>> = LazyLock::new(|| {
    let mut keys: Vec<MetaKey> = MetaKey::iter().collect();
    keys.sort_by(|a, b| b.name().len().cmp(&a.name().len()));
    keys
});

impl MetaKey {
    /// The script spelling of this key
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Scancodes sent when the key goes down
    pub fn press(self) -> &'static str {
        match self {
            MetaKey::Ctrl => "1d",
            MetaKey::Shift => "2a",
            MetaKey::Alt => "38",
            MetaKey::RAlt => "E0 38",
            MetaKey::RCtrl => "E0 1D",
            MetaKey::Win => "e0 5b",
            MetaKey::RWin => "E0 5C",
        }
    }

    /// Scancodes sent when the key comes back up
    pub fn release(self) -> &'static str {
        match self {
            MetaKey::Ctrl => "9d",
            MetaKey::Shift => "aa",
            MetaKey::Alt => "b8",
            MetaKey::RAlt => "E0 B8",
            MetaKey::RCtrl => "E0 9D",
            MetaKey::Win => "e0 db",
            MetaKey::RWin => "E0 DC",
        }
    }

    /// Look a meta key up by its exact, case-sensitive script spelling
    pub fn from_name(name: &str) -> Option<MetaKey> {
        name.parse().ok()
    }

    /// All meta keys, longer names before any shorter name they start with
    pub fn longest_first() -> &'static [MetaKey] {
        &NAMES_LONGEST_FIRST
    }
}

// Keyscan Named Keys
// Multi-character key names usable as <Name> in a script

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::key::Scancode;

/// Pseudo-code emitted for `<Wait>`: the consumer pauses until told to go on
pub const WAIT_CODE: &str = "wait";

/// Make code just below F1; F-key n has make code `F_KEY_BASE + n`
const F_KEY_BASE: u8 = 0x3a;

static NAMED_KEYS: LazyLock<IndexMap<String, String>> = LazyLock::new(|| {
    let mut keys: IndexMap<String, String> = [
        ("Enter", "1c 9c"),
        ("Backspace", "0e 8e"),
        ("Spacebar", "39 b9"),
        ("Return", "1c 9c"),
        ("Esc", "01 81"),
        ("Tab", "0f 8f"),
        ("KillX", "1d 38 0e b8"),
        ("Wait", WAIT_CODE),
        ("Up", "48 c8"),
        ("Down", "50 d0"),
        ("PageUp", "49 c9"),
        ("PageDown", "51 d1"),
        ("End", "4f cf"),
        ("Insert", "52 d2"),
        ("Delete", "53 d3"),
        ("Left", "4b cb"),
        ("Right", "4d cd"),
        ("Home", "47 c7"),
        // Literal '<', which would otherwise open an expression
        ("Lt", "2a 33 b3 aa"),
        ("PressAlt", "38"),
        ("RelAlt", "b8"),
    ]
    .into_iter()
    .map(|(name, code)| (name.to_string(), code.to_string()))
    .collect();

    // F-keys only carry their make code
    for n in 1..=9u8 {
        keys.insert(format!("F{}", n), Scancode(F_KEY_BASE + n).to_string());
    }

    // Left Alt + Right Ctrl + Fn switches to virtual terminal n
    for n in 1..=11u8 {
        let fkey = Scancode(F_KEY_BASE + n);
        keys.insert(
            format!("VT{}", n),
            format!("38 e0 1d {} b8 e0 9d {}", fkey, fkey.release()),
        );
    }
    keys
});

static NAMES_LONGEST_FIRST: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut names: Vec<&'static str> = NAMED_KEYS.keys().map(String::as_str).collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()));
    names
});

static BRACKETED_KEYS: LazyLock<Vec<(String, &'static str)>> = LazyLock::new(|| {
    NAMED_KEYS
        .iter()
        .map(|(name, code)| (format!("<{}>", name), code.as_str()))
        .collect()
});

/// Scancode string for a named key, without brackets ("Enter", "VT3")
pub fn named_key_code(name: &str) -> Option<&'static str> {
    NAMED_KEYS.get(name).map(String::as_str)
}

/// All named keys with their codes, in table order
pub fn named_keys() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAMED_KEYS
        .iter()
        .map(|(name, code)| (name.as_str(), code.as_str()))
}

/// Key names ordered so that no name comes after a longer name it prefixes
pub fn names_longest_first() -> &'static [&'static str] {
    &NAMES_LONGEST_FIRST
}

/// Named keys wrapped in angle brackets ("<Enter>") with their codes
pub fn bracketed_keys() -> &'static [(String, &'static str)] {
    &BRACKETED_KEYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_key_codes() {
        assert_eq!(named_key_code("Enter"), Some("1c 9c"));
        assert_eq!(named_key_code("Esc"), Some("01 81"));
        assert_eq!(named_key_code("Lt"), Some("2a 33 b3 aa"));
        assert_eq!(named_key_code("Wait"), Some("wait"));
        assert_eq!(named_key_code("enter"), None);
        assert_eq!(named_key_code("Ctrl"), None);
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(named_key_code("F1"), Some("3b"));
        assert_eq!(named_key_code("F9"), Some("43"));
        assert_eq!(named_key_code("F10"), None);
    }

    #[test]
    fn test_virtual_terminal_keys() {
        assert_eq!(named_key_code("VT1"), Some("38 e0 1d 3b b8 e0 9d bb"));
        assert_eq!(named_key_code("VT11"), Some("38 e0 1d 45 b8 e0 9d c5"));
        assert_eq!(named_key_code("VT12"), None);
    }

    #[test]
    fn test_table_size() {
        // 21 fixed names, F1-F9, VT1-VT11
        assert_eq!(named_keys().count(), 41);
    }

    #[test]
    fn test_longest_first_ordering() {
        let names = names_longest_first();
        let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
        assert!(pos("PageUp") < pos("Up"));
        assert!(pos("VT11") < pos("VT1"));
        assert!(pos("Spacebar") < pos("Esc"));
        assert!(names.windows(2).all(|w| w[0].len() >= w[1].len()));
    }

    #[test]
    fn test_bracketed_keys() {
        let keys = bracketed_keys();
        assert_eq!(keys.len(), named_keys().count());
        assert!(keys.iter().any(|(k, v)| k == "<Tab>" && *v == "0f 8f"));
    }
}

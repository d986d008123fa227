// Keyscan Key Tables
// Single-character keys of a US keyboard and their scancode strings

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

include!(concat!(env!("OUT_DIR"), "/scancode.rs"));

/// Left Shift, held around every shifted character
pub const SHIFT: Scancode = Scancode(0x2a);

/// Unshifted keyboard rows with the make code of their first key
static UNSHIFTED_ROWS: [(&str, u8); 4] = [
    ("1234567890-=", 0x02),
    ("qwertyuiop[]", 0x10),
    ("asdfghjkl;'`", 0x1e),
    ("\\zxcvbnm,./", 0x2b),
];

/// The same rows as typed with Shift held
static SHIFTED_ROWS: [(&str, u8); 4] = [
    ("!@#$%^&*()_+", 0x02),
    ("QWERTYUIOP{}", 0x10),
    ("ASDFGHJKL:\"~", 0x1e),
    ("|ZXCVBNM<>?", 0x2b),
];

static CHAR_CODES: LazyLock<HashMap<char, String>> = LazyLock::new(|| {
    let mut codes = HashMap::new();
    for (row, offset) in UNSHIFTED_ROWS {
        for (idx, c) in row.chars().enumerate() {
            codes.insert(c, Scancode(offset + idx as u8).press_release());
        }
    }
    for (row, offset) in SHIFTED_ROWS {
        for (idx, c) in row.chars().enumerate() {
            let key = Scancode(offset + idx as u8);
            codes.insert(
                c,
                format!("{} {} {}", SHIFT, key.press_release(), SHIFT.release()),
            );
        }
    }
    codes
});

/// Scancode string for a single typed character
///
/// Unshifted characters produce a press/release pair ("26 a6" for `l`),
/// shifted ones are wrapped in Shift press/release ("2a 26 a6 aa" for `L`).
pub fn char_code(c: char) -> Option<&'static str> {
    CHAR_CODES.get(&c).map(String::as_str)
}

/// Whether the character can be typed directly
pub fn is_typeable(c: char) -> bool {
    CHAR_CODES.contains_key(&c)
}

/// All characters with a single-character scancode
pub fn typeable_chars() -> impl Iterator<Item = char> {
    UNSHIFTED_ROWS
        .iter()
        .chain(SHIFTED_ROWS.iter())
        .flat_map(|&(row, _)| row.chars())
}

// Keyscan Script - Meta Expression Parser
// Finds expressions like "<CtrlShiftn>" and turns them into press/release codes

use std::fmt;

use smallvec::SmallVec;

use crate::error::TranslateError;
use crate::key::char_code;
use crate::modifier::MetaKey;
use crate::named::{named_key_code, names_longest_first};

/// One part of a meta expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Meta(MetaKey),
    /// A named key such as "Tab" or "F4"
    Named(&'static str),
    /// A single typeable character
    Char(char),
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Meta(key) => write!(f, "{}", key),
            Component::Named(name) => write!(f, "{}", name),
            Component::Char(c) => write!(f, "{}", c),
        }
    }
}

/// A meta expression found in the input
#[derive(Debug, Clone, PartialEq)]
pub struct MetaExpression {
    /// Character index of the opening '<'
    pub start: usize,
    /// Character index just past the closing '>'
    pub end: usize,
    /// Meta keys in order of first appearance, then the optional terminal key
    pub components: SmallVec<[Component; 5]>,
}

impl MetaExpression {
    /// Scancode string for the whole expression
    pub fn scancodes(&self) -> Result<String, TranslateError> {
        compose(&self.components)
    }
}

/// Find every meta expression in `chars`, scanning left to right
///
/// Matches never overlap. When no expression starts at a position the scan
/// moves on by one character.
pub fn find_meta_expressions(chars: &[char]) -> Vec<MetaExpression> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        match parse_meta_expression(chars, pos) {
            Some(expr) => {
                pos = expr.end;
                found.push(expr);
            }
            None => pos += 1,
        }
    }
    found
}

/// Try to read a meta expression starting exactly at `start`
///
/// Grammar: `<` meta-name+ terminal? `>`, where a terminal is a named key or
/// a single typeable character. Repeated meta keys are kept once.
pub fn parse_meta_expression(chars: &[char], start: usize) -> Option<MetaExpression> {
    if chars.get(start) != Some(&'<') {
        return None;
    }

    let mut pos = start + 1;
    let mut components: SmallVec<[Component; 5]> = SmallVec::new();
    let mut meta_count = 0;
    while let Some(key) = meta_key_at(chars, pos) {
        pos += key.name().len();
        meta_count += 1;
        if !components.contains(&Component::Meta(key)) {
            components.push(Component::Meta(key));
        }
    }
    if meta_count == 0 {
        return None;
    }

    let (terminal, end) = terminal_at(chars, pos)?;
    if let Some(terminal) = terminal {
        components.push(terminal);
    }

    Some(MetaExpression {
        start,
        end,
        components,
    })
}

/// Meta key whose name starts at `pos`, longest names tried first
fn meta_key_at(chars: &[char], pos: usize) -> Option<MetaKey> {
    MetaKey::longest_first()
        .iter()
        .copied()
        .find(|key| name_at(chars, pos, key.name()))
}

/// Read the optional terminal and the closing '>'
///
/// Returns the terminal (if any) and the index just past '>'. A named key is
/// preferred over a single character, and either over an empty terminal.
fn terminal_at(chars: &[char], pos: usize) -> Option<(Option<Component>, usize)> {
    for &name in names_longest_first() {
        let after = pos + name.len();
        if name_at(chars, pos, name) && chars.get(after) == Some(&'>') {
            return Some((Some(Component::Named(name)), after + 1));
        }
    }

    if let Some(&c) = chars.get(pos) {
        if char_code(c).is_some() && chars.get(pos + 1) == Some(&'>') {
            return Some((Some(Component::Char(c)), pos + 2));
        }
    }

    if chars.get(pos) == Some(&'>') {
        return Some((None, pos + 1));
    }
    None
}

fn name_at(chars: &[char], pos: usize, name: &str) -> bool {
    let mut idx = pos;
    for c in name.chars() {
        if chars.get(idx) != Some(&c) {
            return false;
        }
        idx += 1;
    }
    true
}

/// Build the scancode string for an ordered component list
///
/// Meta keys are pressed in order and released in reverse order, with the
/// terminal key's own codes in the middle:
/// `[Ctrl, Shift, n]` -> `"1d 2a 31 b1 aa 9d"`.
///
/// # Examples
/// ```
/// use keyscan_core::script::meta_parser::{compose, Component};
/// use keyscan_core::MetaKey;
/// let codes = compose(&[Component::Meta(MetaKey::Ctrl), Component::Char('c')]).unwrap();
/// assert_eq!(codes, "1d 2e ae 9d");
/// ```
pub fn compose(components: &[Component]) -> Result<String, TranslateError> {
    let mut pre: Vec<&str> = Vec::new();
    let mut post: Vec<&str> = Vec::new();
    let mut center: Option<&str> = None;

    for (i, component) in components.iter().enumerate() {
        match component {
            Component::Meta(key) => {
                pre.push(key.press());
                post.insert(0, key.release());
            }
            Component::Named(name) => center = named_key_code(name),
            Component::Char(c) => center = char_code(*c),
        }
        // Nothing may follow the key the meta keys modify
        if center.is_some() && i + 1 < components.len() {
            let listing = components
                .iter()
                .map(Component::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            return Err(TranslateError::MalformedMetaComposition(listing));
        }
    }

    Ok(pre.into_iter().chain(center).chain(post).collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn parse(s: &str) -> Option<MetaExpression> {
        parse_meta_expression(&chars(s), 0)
    }

    #[test]
    fn test_parse_single_meta_with_char() {
        let expr = parse("<Ctrln>").unwrap();
        assert_eq!(expr.start, 0);
        assert_eq!(expr.end, 7);
        assert_eq!(
            expr.components.as_slice(),
            &[Component::Meta(MetaKey::Ctrl), Component::Char('n')]
        );
    }

    #[test]
    fn test_parse_bare_meta() {
        let expr = parse("<Win>").unwrap();
        assert_eq!(expr.components.as_slice(), &[Component::Meta(MetaKey::Win)]);
        assert_eq!(expr.scancodes().unwrap(), "e0 5b e0 db");
    }

    #[test]
    fn test_parse_named_terminal() {
        let expr = parse("<AltTab>").unwrap();
        assert_eq!(
            expr.components.as_slice(),
            &[Component::Meta(MetaKey::Alt), Component::Named("Tab")]
        );
        assert_eq!(expr.scancodes().unwrap(), "38 0f 8f b8");
    }

    #[test]
    fn test_parse_prefers_longest_named_key() {
        let expr = parse("<CtrlPageUp>").unwrap();
        assert_eq!(expr.components[1], Component::Named("PageUp"));
        let expr = parse("<AltVT11>").unwrap();
        assert_eq!(expr.components[1], Component::Named("VT11"));
    }

    #[test]
    fn test_parse_single_char_beats_named_prefix() {
        // 'E' alone, not the start of "End"/"Enter"/"Esc"
        let expr = parse("<CtrlE>").unwrap();
        assert_eq!(expr.components[1], Component::Char('E'));
    }

    #[test]
    fn test_parse_gt_as_terminal() {
        let expr = parse("<Ctrl>>").unwrap();
        assert_eq!(expr.end, 7);
        assert_eq!(expr.components[1], Component::Char('>'));
    }

    #[test]
    fn test_parse_deduplicates_meta_keys() {
        let expr = parse("<CtrlCtrlShiftCtrlt>").unwrap();
        assert_eq!(
            expr.components.as_slice(),
            &[
                Component::Meta(MetaKey::Ctrl),
                Component::Meta(MetaKey::Shift),
                Component::Char('t'),
            ]
        );
        assert_eq!(expr.scancodes().unwrap(), "1d 2a 14 94 aa 9d");
    }

    #[test]
    fn test_parse_more_than_four_meta_keys() {
        let expr = parse("<CtrlShiftAltWinRAltx>").unwrap();
        assert_eq!(expr.components.len(), 6);
        assert_eq!(
            expr.scancodes().unwrap(),
            "1d 2a 38 e0 5b E0 38 2d ad E0 B8 e0 db b8 aa 9d"
        );
    }

    #[test]
    fn test_parse_rejects_non_meta() {
        assert!(parse("<Enter>").is_none());
        assert!(parse("<Lt>").is_none());
        assert!(parse("<333>").is_none());
        assert!(parse("Ctrln>").is_none());
        assert!(parse("<Ctrl").is_none());
        assert!(parse("<Ctrlxy>").is_none());
        assert!(parse("<ctrlx>").is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_terminal() {
        // Space is not in the single-character table
        assert!(parse("<Ctrl >").is_none());
    }

    #[test]
    fn test_find_meta_expressions() {
        let found = find_meta_expressions(&chars("a<Ctrlc>b<Win><Enter><AltF4>"));
        let spans: Vec<(usize, usize)> = found.iter().map(|e| (e.start, e.end)).collect();
        assert_eq!(spans, vec![(1, 8), (9, 14), (21, 28)]);
    }

    #[test]
    fn test_find_skips_failed_opening() {
        // The first '<' does not open an expression; the second does
        let found = find_meta_expressions(&chars("<<Ctrlc>"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start, 1);
    }

    #[test]
    fn test_compose_nesting_order() {
        let components = [
            Component::Meta(MetaKey::Ctrl),
            Component::Meta(MetaKey::Shift),
            Component::Char('n'),
        ];
        assert_eq!(compose(&components).unwrap(), "1d 2a 31 b1 aa 9d");
    }

    #[test]
    fn test_compose_meta_only() {
        let components = [
            Component::Meta(MetaKey::Ctrl),
            Component::Meta(MetaKey::Alt),
        ];
        assert_eq!(compose(&components).unwrap(), "1d 38 b8 9d");
    }

    #[test]
    fn test_compose_rejects_component_after_terminal() {
        let components = [
            Component::Meta(MetaKey::Ctrl),
            Component::Char('n'),
            Component::Meta(MetaKey::Shift),
        ];
        let err = compose(&components).unwrap_err();
        assert!(matches!(err, TranslateError::MalformedMetaComposition(_)));
        assert!(err.to_string().contains("Ctrl n Shift"));
    }
}

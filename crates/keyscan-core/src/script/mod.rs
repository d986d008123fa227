// Keyscan Script API
// Meta expression parsing and the text preparation done before translation

pub mod macro_expander;
pub mod meta_parser;

pub use macro_expander::expand_macros;
pub use meta_parser::{compose, find_meta_expressions, Component, MetaExpression};

/// Spelling that stands in for a literal space
pub const SPACEBAR: &str = "<Spacebar>";

/// Turn raw script text into translator input
///
/// Strips trailing newlines, expands `Multiply` macros when asked to, then
/// writes every space as `<Spacebar>`.
pub fn prepare_script(
    raw: &str,
    expand: bool,
) -> Result<String, crate::error::TranslateError> {
    let trimmed = raw.trim_end_matches('\n');
    let expanded = if expand {
        expand_macros(trimmed)?
    } else {
        trimmed.to_string()
    };
    Ok(expanded.replace(' ', SPACEBAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_replaces_spaces() {
        assert_eq!(
            prepare_script("ls -l\n", true).unwrap(),
            "ls<Spacebar>-l"
        );
    }

    #[test]
    fn test_prepare_strips_only_trailing_newlines() {
        assert_eq!(prepare_script("a\nb\n\n", true).unwrap(), "a\nb");
    }

    #[test]
    fn test_prepare_expands_before_spaces() {
        assert_eq!(
            prepare_script("<Multiply(a ,2)>", true).unwrap(),
            "a<Spacebar>a<Spacebar>"
        );
    }

    #[test]
    fn test_prepare_without_macros() {
        assert_eq!(
            prepare_script("<Multiply(a,2)>", false).unwrap(),
            "<Multiply(a,2)>"
        );
    }
}

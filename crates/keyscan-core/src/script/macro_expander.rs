// Keyscan Script - Macro Expander
// Expands <Multiply(what, times)> before translation

use crate::error::TranslateError;
use crate::translate::patterns::multiply_pattern;

/// Upper bound on the size of one expanded macro, in bytes
pub const MAX_EXPANSION_LEN: usize = 1 << 20;

/// Expand every `<Multiply(what, times)>` into `what` repeated `times` times
///
/// Matches are collected from the input as given, and each one replaces all
/// occurrences of its text. The fragment is matched non-greedily, so a
/// `Multiply` nested inside another one's fragment does not expand correctly;
/// nesting is unsupported.
///
/// A count that does not fit in `usize`, or that would expand one macro past
/// [`MAX_EXPANSION_LEN`] bytes, is rejected with
/// [`TranslateError::InvalidRepeatCount`].
///
/// # Examples
/// ```
/// use keyscan_core::script::expand_macros;
/// let expanded = expand_macros("<Multiply(<Wait>,4)>").unwrap();
/// assert_eq!(expanded, "<Wait><Wait><Wait><Wait>");
/// ```
pub fn expand_macros(input: &str) -> Result<String, TranslateError> {
    let pattern = multiply_pattern()?;
    let mut expanded = input.to_string();

    for caps in pattern.captures_iter(input) {
        let whole = &caps[0];
        let what = &caps["what"];
        let times: usize = caps["times"]
            .parse()
            .map_err(|_| TranslateError::InvalidRepeatCount(caps["times"].to_string()))?;
        what.len()
            .checked_mul(times)
            .filter(|&len| len <= MAX_EXPANSION_LEN)
            .ok_or_else(|| TranslateError::InvalidRepeatCount(caps["times"].to_string()))?;

        log::trace!("expanding {} into {} copies of {:?}", whole, times, what);
        expanded = expanded.replace(whole, &what.repeat(times));
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple() {
        assert_eq!(expand_macros("<Multiply(ab,3)>").unwrap(), "ababab");
    }

    #[test]
    fn test_expand_keeps_surrounding_text() {
        assert_eq!(
            expand_macros("x<Multiply(<Tab>, 2)>y").unwrap(),
            "x<Tab><Tab>y"
        );
    }

    #[test]
    fn test_expand_allows_spaces_around_count() {
        assert_eq!(expand_macros("<Multiply(a,  2 )>").unwrap(), "aa");
    }

    #[test]
    fn test_expand_zero_times() {
        assert_eq!(expand_macros("a<Multiply(b,0)>c").unwrap(), "ac");
    }

    #[test]
    fn test_expand_multiple_macros() {
        assert_eq!(
            expand_macros("<Multiply(a,2)>-<Multiply(b,3)>").unwrap(),
            "aa-bbb"
        );
    }

    #[test]
    fn test_expand_repeated_identical_macro() {
        assert_eq!(
            expand_macros("<Multiply(a,2)><Multiply(a,2)>").unwrap(),
            "aaaa"
        );
    }

    #[test]
    fn test_non_greedy_fragment() {
        // The fragment stops at the first ",N)>" that completes a match
        assert_eq!(expand_macros("<Multiply(a,b,2)>").unwrap(), "a,ba,b");
    }

    #[test]
    fn test_no_macro_is_untouched() {
        assert_eq!(expand_macros("hello <Enter>").unwrap(), "hello <Enter>");
        assert_eq!(expand_macros("<Multiply(a)>").unwrap(), "<Multiply(a)>");
        assert_eq!(expand_macros("").unwrap(), "");
    }

    #[test]
    fn test_count_overflow() {
        let input = format!("<Multiply(a,{})>", "9".repeat(40));
        assert!(matches!(
            expand_macros(&input),
            Err(TranslateError::InvalidRepeatCount(_))
        ));
    }

    #[test]
    fn test_count_fits_usize_but_expansion_overflows() {
        assert!(matches!(
            expand_macros("<Multiply(ab,10000000000000000000)>"),
            Err(TranslateError::InvalidRepeatCount(ref count)) if count == "10000000000000000000"
        ));
    }

    #[test]
    fn test_expansion_size_limit() {
        let at_limit = format!("<Multiply(a,{})>", MAX_EXPANSION_LEN);
        assert_eq!(expand_macros(&at_limit).unwrap().len(), MAX_EXPANSION_LEN);

        let past_limit = format!("<Multiply(ab,{})>", MAX_EXPANSION_LEN / 2 + 1);
        assert!(matches!(
            expand_macros(&past_limit),
            Err(TranslateError::InvalidRepeatCount(_))
        ));
    }
}

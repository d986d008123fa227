// Keyscan Pattern Registry
// Compiled, process-wide regular expressions used by the passes

use std::sync::LazyLock;

use regex::Regex;

use crate::error::TranslateError;

/// Some regex engines refuse patterns with this many capture groups or more
pub const MAX_CAPTURE_GROUPS: usize = 100;

/// `<DDD...>` with at least three decimal digits
const SLEEP_PATTERN: &str = r"<(?P<number>[0-9]{3,})>";

/// `<Multiply(what, times)>`, non-greedy on `what`
const MULTIPLY_PATTERN: &str = r"<Multiply\((?P<what>.+?),[ ]*(?P<times>[0-9]+)[ ]*\)>";

static SLEEP: LazyLock<Result<Regex, TranslateError>> =
    LazyLock::new(|| compile(SLEEP_PATTERN));

static MULTIPLY: LazyLock<Result<Regex, TranslateError>> =
    LazyLock::new(|| compile(MULTIPLY_PATTERN));

/// Compile a pattern, refusing ones with too many capture groups
pub fn compile(pattern: &str) -> Result<Regex, TranslateError> {
    let regex = Regex::new(pattern)?;
    // captures_len() counts the implicit whole-match group
    let groups = regex.captures_len() - 1;
    if groups >= MAX_CAPTURE_GROUPS {
        return Err(TranslateError::ExcessiveGroupCount {
            groups,
            limit: MAX_CAPTURE_GROUPS,
        });
    }
    log::trace!("compiled pattern with {} groups: {}", groups, pattern);
    Ok(regex)
}

pub fn sleep_pattern() -> Result<&'static Regex, TranslateError> {
    SLEEP.as_ref().map_err(Clone::clone)
}

pub fn multiply_pattern() -> Result<&'static Regex, TranslateError> {
    MULTIPLY.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_compile() {
        assert!(sleep_pattern().is_ok());
        assert!(multiply_pattern().is_ok());
    }

    #[test]
    fn test_sleep_pattern_needs_three_digits() {
        let re = sleep_pattern().unwrap();
        assert!(re.is_match("<333>"));
        assert!(re.is_match("<050>"));
        assert!(!re.is_match("<33>"));
        assert!(!re.is_match("<33a>"));
    }

    #[test]
    fn test_group_ceiling() {
        let ok = "(a)".repeat(MAX_CAPTURE_GROUPS - 1);
        assert!(compile(&ok).is_ok());

        let too_many = "(a)".repeat(MAX_CAPTURE_GROUPS);
        match compile(&too_many) {
            Err(TranslateError::ExcessiveGroupCount { groups, limit }) => {
                assert_eq!(groups, MAX_CAPTURE_GROUPS);
                assert_eq!(limit, MAX_CAPTURE_GROUPS);
            }
            other => panic!("expected ExcessiveGroupCount, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(compile("(unclosed"), Err(TranslateError::Pattern(_))));
    }
}

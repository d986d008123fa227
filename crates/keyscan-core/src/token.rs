// Keyscan Output Tokens

use std::fmt;

use crate::named::WAIT_CODE;

const SLEEP_PREFIX: &str = "sleep:";

/// One entry of a translated script
///
/// Most tokens are space-separated scancode bytes. `Wait` and `Sleep` are
/// directives for whatever feeds the codes to the virtual machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Space-separated hex bytes, e.g. "1d 2e ae 9d"
    Scancodes(String),
    /// Pause until the operator resumes
    Wait,
    /// Pause for the given number of milliseconds (digits kept verbatim)
    Sleep(String),
}

impl Token {
    /// Classify a code string produced by the tables
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        if code == WAIT_CODE {
            Token::Wait
        } else if let Some(millis) = code.strip_prefix(SLEEP_PREFIX) {
            Token::Sleep(millis.to_string())
        } else {
            Token::Scancodes(code)
        }
    }

    pub fn sleep(millis: &str) -> Self {
        Token::Sleep(millis.to_string())
    }

    /// True for tokens that carry real scancodes
    pub fn is_scancodes(&self) -> bool {
        matches!(self, Token::Scancodes(_))
    }

    /// Sleep duration in milliseconds, if this is a sleep directive
    pub fn sleep_millis(&self) -> Option<u64> {
        match self {
            Token::Sleep(millis) => millis.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Scancodes(codes) => write!(f, "{}", codes),
            Token::Wait => write!(f, "{}", WAIT_CODE),
            Token::Sleep(millis) => write!(f, "{}{}", SLEEP_PREFIX, millis),
        }
    }
}

/// Join tokens for output, e.g. as VBoxManage keyboardputscancode arguments
pub fn render(tokens: &[Token], separator: &str) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Token::from_code("wait"), Token::Wait);
        assert_eq!(Token::from_code("sleep:050"), Token::sleep("050"));
        assert_eq!(
            Token::from_code("1c 9c"),
            Token::Scancodes("1c 9c".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Wait.to_string(), "wait");
        assert_eq!(Token::sleep("333").to_string(), "sleep:333");
        assert_eq!(Token::from_code("26 a6").to_string(), "26 a6");
    }

    #[test]
    fn test_sleep_millis() {
        assert_eq!(Token::sleep("050").sleep_millis(), Some(50));
        assert_eq!(Token::Wait.sleep_millis(), None);
        assert!(!Token::Wait.is_scancodes());
    }

    #[test]
    fn test_render() {
        let tokens = vec![
            Token::from_code("26 a6"),
            Token::Wait,
            Token::from_code("1f 9f"),
        ];
        assert_eq!(render(&tokens, " "), "26 a6 wait 1f 9f");
        assert_eq!(render(&tokens, "\n"), "26 a6\nwait\n1f 9f");
        assert_eq!(render(&[], " "), "");
    }
}

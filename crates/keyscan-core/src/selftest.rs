// Keyscan Self Test
// Built-in fixtures the binary can check before translating anything

use crate::token::Token;
use crate::translate::translate_chars;

type Fixture = (&'static str, &'static [&'static str]);

/// Expectations that hold with or without sleep expressions
const COMMON_FIXTURES: &[Fixture] = &[
    ("<Win>", &["e0 5b e0 db"]),
    ("<Esc>", &["01 81"]),
    ("123", &["02 82", "03 83", "04 84"]),
    ("<Ctrln>", &["1d 31 b1 9d"]),
    ("<CtrlShiftn>", &["1d 2a 31 b1 aa 9d"]),
    ("<CtrlShiftt>", &["1d 2a 14 94 aa 9d"]),
    ("ls", &["26 a6", "1f 9f"]),
    ("<Enter>", &["1c 9c"]),
    ("", &[]),
    ("<Lt>", &["2a 33 b3 aa"]),
    (
        "<Lt>Ctrln>",
        &[
            "2a 33 b3 aa",
            "2a 2e ae aa",
            "14 94",
            "13 93",
            "26 a6",
            "31 b1",
            "2a 34 b4 aa",
        ],
    ),
    ("<Spacebar>", &["39 b9"]),
];

const PLAIN_FIXTURES: &[Fixture] = &[(
    "<Win><Wait>gedit<333><Enter>",
    &[
        "e0 5b e0 db",
        "wait",
        "22 a2",
        "12 92",
        "20 a0",
        "17 97",
        "14 94",
        "2a 33 b3 aa",
        "04 84",
        "04 84",
        "04 84",
        "2a 34 b4 aa",
        "1c 9c",
    ],
)];

const MILLISECOND_FIXTURES: &[Fixture] = &[
    (
        "<Win><Wait>gedit<333><Enter>",
        &[
            "e0 5b e0 db",
            "wait",
            "22 a2",
            "12 92",
            "20 a0",
            "17 97",
            "14 94",
            "sleep:333",
            "1c 9c",
        ],
    ),
    (
        "<Win><333>terminal<2000><Enter>",
        &[
            "e0 5b e0 db",
            "sleep:333",
            "14 94",
            "12 92",
            "13 93",
            "32 b2",
            "17 97",
            "31 b1",
            "1e 9e",
            "26 a6",
            "sleep:2000",
            "1c 9c",
        ],
    ),
];

/// A fixture whose translation did not match
#[derive(Debug, Clone, PartialEq)]
pub struct SelfTestFailure {
    pub input: &'static str,
    pub millisecond_expressions: bool,
    /// Tokens produced, or the error message
    pub actual: Result<Vec<String>, String>,
}

#[derive(Debug, thiserror::Error)]
#[error("translation self test gave bad results: {failures:?}")]
pub struct SelfTestError {
    pub failures: Vec<SelfTestFailure>,
}

/// Run every built-in fixture in both modes and report all mismatches
pub fn self_test() -> Result<usize, SelfTestError> {
    let mut failures = Vec::new();
    let mut checked = 0;

    let runs = [
        (false, COMMON_FIXTURES),
        (false, PLAIN_FIXTURES),
        (true, COMMON_FIXTURES),
        (true, MILLISECOND_FIXTURES),
    ];
    for (millis, fixtures) in runs {
        for &(input, expected) in fixtures {
            checked += 1;
            let actual = translate_chars(input, millis)
                .map(|tokens| tokens.iter().map(Token::to_string).collect::<Vec<_>>())
                .map_err(|e| e.to_string());
            let matches = match &actual {
                Ok(tokens) => tokens.iter().map(String::as_str).eq(expected.iter().copied()),
                Err(_) => false,
            };
            if !matches {
                failures.push(SelfTestFailure {
                    input,
                    millisecond_expressions: millis,
                    actual,
                });
            }
        }
    }

    if failures.is_empty() {
        log::debug!("self test passed {} fixtures", checked);
        Ok(checked)
    } else {
        Err(SelfTestError { failures })
    }
}

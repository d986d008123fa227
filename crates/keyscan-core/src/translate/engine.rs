// Keyscan Translation Engine
// Runs the annotation passes over a script and collects the tokens

use crate::error::TranslateError;
use crate::key::char_code;
use crate::named::bracketed_keys;
use crate::script::{find_meta_expressions, prepare_script};
use crate::token::Token;

use super::patterns::{multiply_pattern, sleep_pattern};
use super::positions::{PositionArray, Slot};

/// Options controlling a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Read `<DDD>` (3+ digits) as a `sleep:DDD` directive
    pub millisecond_expressions: bool,
    /// Expand `<Multiply(what, times)>` in [`Translator::translate_script`]
    pub expand_macros: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            millisecond_expressions: false,
            expand_macros: true,
        }
    }
}

/// Translates keystroke scripts into scancode tokens
///
/// Passes, in this order, each over the unmodified input:
/// 1. sleep expressions (only with `millisecond_expressions`)
/// 2. meta expressions such as `<CtrlShiftn>`
/// 3. bracketed named keys such as `<Enter>`
/// 4. single characters for every position still unresolved
///
/// Passes 1-3 overwrite positions an earlier pass marked, so the order matters.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    /// Create a translator, compiling the shared patterns up front
    pub fn new(options: TranslateOptions) -> Result<Self, TranslateError> {
        sleep_pattern()?;
        multiply_pattern()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> TranslateOptions {
        self.options
    }

    /// Translate prepared input (spaces already written as `<Spacebar>`)
    pub fn translate(&self, input: &str) -> Result<Vec<Token>, TranslateError> {
        let chars: Vec<char> = input.chars().collect();
        let offsets = CharOffsets::new(input);
        let mut positions = PositionArray::new(chars.len());

        if self.options.millisecond_expressions {
            mark_sleeps(input, &offsets, &mut positions)?;
        }
        mark_meta_expressions(&chars, &mut positions)?;
        mark_named_keys(input, &offsets, &mut positions);
        resolve_single_chars(&chars, &mut positions)?;

        let tokens = positions.into_tokens();
        log::debug!(
            "translated {} characters into {} tokens",
            chars.len(),
            tokens.len()
        );
        Ok(tokens)
    }

    /// Prepare raw script text and translate it
    pub fn translate_script(&self, raw: &str) -> Result<Vec<Token>, TranslateError> {
        let prepared = prepare_script(raw, self.options.expand_macros)?;
        self.translate(&prepared)
    }
}

/// Translate with default options plus the given sleep-expression setting
pub fn translate_chars(
    input: &str,
    millisecond_expressions: bool,
) -> Result<Vec<Token>, TranslateError> {
    Translator::new(TranslateOptions {
        millisecond_expressions,
        ..TranslateOptions::default()
    })?
    .translate(input)
}

/// Maps byte offsets reported by string searches to character positions
struct CharOffsets {
    starts: Vec<usize>,
}

impl CharOffsets {
    fn new(input: &str) -> Self {
        Self {
            starts: input.char_indices().map(|(byte, _)| byte).collect(),
        }
    }

    /// Character index of a byte offset on a char boundary (or the end)
    fn char_index(&self, byte: usize) -> usize {
        self.starts.binary_search(&byte).unwrap_or_else(|i| i)
    }
}

fn mark_sleeps(
    input: &str,
    offsets: &CharOffsets,
    positions: &mut PositionArray,
) -> Result<(), TranslateError> {
    let mut count = 0;
    for caps in sleep_pattern()?.captures_iter(input) {
        let (Some(whole), Some(number)) = (caps.get(0), caps.name("number")) else {
            continue;
        };
        let start = offsets.char_index(whole.start());
        let end = offsets.char_index(whole.end());
        positions.mark_span(start, end, Token::sleep(number.as_str()));
        log::trace!("sleep {} at {}..{}", number.as_str(), start, end);
        count += 1;
    }
    log::debug!("sleep pass marked {} expressions", count);
    Ok(())
}

fn mark_meta_expressions(
    chars: &[char],
    positions: &mut PositionArray,
) -> Result<(), TranslateError> {
    let found = find_meta_expressions(chars);
    for expr in &found {
        let codes = expr.scancodes()?;
        log::trace!("meta expression at {}..{}: {}", expr.start, expr.end, codes);
        positions.mark_span(expr.start, expr.end, Token::from_code(codes));
    }
    log::debug!("meta pass marked {} expressions", found.len());
    Ok(())
}

fn mark_named_keys(input: &str, offsets: &CharOffsets, positions: &mut PositionArray) {
    let mut count = 0;
    for (bracketed, code) in bracketed_keys() {
        for (byte, _) in input.match_indices(bracketed.as_str()) {
            let start = offsets.char_index(byte);
            let end = offsets.char_index(byte + bracketed.len());
            positions.mark_span(start, end, Token::from_code(*code));
            log::trace!("{} at {}..{}", bracketed, start, end);
            count += 1;
        }
    }
    log::debug!("named key pass marked {} keys", count);
}

fn resolve_single_chars(
    chars: &[char],
    positions: &mut PositionArray,
) -> Result<(), TranslateError> {
    for index in positions.unresolved() {
        debug_assert_eq!(positions.get(index), Some(&Slot::Unresolved));
        let symbol = chars[index];
        let code = char_code(symbol).ok_or(TranslateError::UnknownSymbol {
            symbol,
            position: index,
        })?;
        positions.resolve(index, Token::from_code(code));
    }
    Ok(())
}

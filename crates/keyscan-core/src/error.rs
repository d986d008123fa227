// Keyscan Translation Errors

/// Errors that abort a translation
///
/// A failed call never yields partial output; the caller gets one of these
/// instead of a token list.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TranslateError {
    /// A character no pass could resolve and the single-character table lacks
    #[error("Unknown symbol found - {symbol:?}")]
    UnknownSymbol { symbol: char, position: usize },

    /// A meta expression decomposed into a terminal key followed by more
    /// components. The tokenizer never produces this, so it marks a bug.
    #[error("Bad metakey press instruction, or software bug: {0}")]
    MalformedMetaComposition(String),

    #[error("Pattern has {groups} capture groups, the limit is below {limit}")]
    ExcessiveGroupCount { groups: usize, limit: usize },

    #[error("Invalid repeat count in Multiply macro: {0}")]
    InvalidRepeatCount(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl TranslateError {
    /// The offending character for an unknown-symbol failure
    pub fn symbol(&self) -> Option<char> {
        match self {
            TranslateError::UnknownSymbol { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }
}

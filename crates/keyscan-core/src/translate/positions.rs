// Keyscan Position Annotator
// Per-character record of what each input position translates to

use crate::token::Token;

/// What has been decided about one character position of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// No pass has claimed the position yet
    Unresolved,
    /// Part of an expression whose token sits at the expression's start
    Consumed,
    /// The position produces this token
    Resolved(Token),
}

/// Character position array, one slot per input character
///
/// Passes mark spans with [`mark_span`](Self::mark_span). A later pass that
/// matches an already-marked position overwrites it; the orchestrator relies on
/// running the passes in a fixed order.
#[derive(Debug, Clone)]
pub struct PositionArray {
    slots: Vec<Slot>,
}

impl PositionArray {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![Slot::Unresolved; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Mark `start..end`: the first position gets `token`, the rest are consumed
    pub fn mark_span(&mut self, start: usize, end: usize, token: Token) {
        debug_assert!(start < end && end <= self.slots.len());
        self.slots[start] = Slot::Resolved(token);
        for slot in &mut self.slots[start + 1..end] {
            *slot = Slot::Consumed;
        }
    }

    /// Resolve a single position
    pub fn resolve(&mut self, index: usize, token: Token) {
        self.slots[index] = Slot::Resolved(token);
    }

    /// Indices no pass has claimed, in order
    pub fn unresolved(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| **slot == Slot::Unresolved)
            .map(|(i, _)| i)
            .collect()
    }

    /// Resolved tokens in position order, consumed positions dropped
    ///
    /// Unresolved positions are skipped too; the orchestrator resolves or
    /// rejects every one of them before calling this.
    pub fn into_tokens(self) -> Vec<Token> {
        self.slots
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Resolved(token) => Some(token),
                Slot::Consumed | Slot::Unresolved => None,
            })
            .collect()
    }
}

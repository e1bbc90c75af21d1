//! Contiguous token ranges with a name and a value payload.

use serde::{Deserialize, Serialize};

use crate::{AttrValue, Doc};

/// An annotated token range.
///
/// `start` and `end` are inclusive token indices. Character offset and
/// length are not stored; they are derived from the tokens of the document
/// the span belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub name: String,
    pub start: usize,
    pub end: usize,
    pub value: AttrValue,
}

impl Span {
    pub fn new(name: impl Into<String>, start: usize, end: usize, value: impl Into<AttrValue>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            value: value.into(),
        }
    }

    /// Number of tokens covered.
    pub fn token_len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// True if the range is non-empty and lies inside `doc`.
    pub fn is_valid_for(&self, doc: &Doc) -> bool {
        self.start <= self.end && self.end < doc.len()
    }

    /// Character offset of the first token.
    pub fn offset(&self, doc: &Doc) -> Option<usize> {
        doc.token(self.start).map(|t| t.offset())
    }

    /// Characters from the first token through the last token's trailing
    /// whitespace. `None` for a reversed range.
    pub fn length(&self, doc: &Doc) -> Option<usize> {
        let first = doc.token(self.start)?;
        let last = doc.token(self.end)?;
        (last.offset() + last.text_with_ws().chars().count()).checked_sub(first.offset())
    }

    /// Surface text including the trailing whitespace of the last token.
    pub fn text_with_ws(&self, doc: &Doc) -> Option<String> {
        if !self.is_valid_for(doc) {
            return None;
        }
        Some(doc.range_text(self.start, self.end, true))
    }
}

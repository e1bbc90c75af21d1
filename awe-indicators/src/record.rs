//! Indicator records.

use awe_nlp::{AttrValue, Doc, Span, TokenRef};
use serde::Serialize;

use crate::error::{execution_fault, QueryResult};

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Location {
    Token {
        #[serde(rename = "tokenIdx")]
        index: usize,
    },
    Span {
        #[serde(rename = "startToken")]
        start: usize,
        #[serde(rename = "endToken")]
        end: usize,
    },
}

/// One indicator value with its source text and character extent.
///
/// `name` and the offset/length pair are always present; `value` may be
/// null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub value: AttrValue,
    /// Surface text including trailing whitespace.
    pub text: String,
    pub offset: usize,
    pub length: usize,
    #[serde(flatten)]
    pub location: Location,
}

impl Record {
    pub fn for_token(name: &str, tok: TokenRef<'_>, value: AttrValue) -> Self {
        let text = tok.text_with_ws();
        Record {
            name: name.to_string(),
            value,
            length: text.chars().count(),
            text,
            offset: tok.offset(),
            location: Location::Token { index: tok.i() },
        }
    }

    /// Record for an inclusive token range. A range outside `doc` is an
    /// execution fault.
    pub fn for_span(doc: &Doc, span: &Span) -> QueryResult<Self> {
        let extent = span
            .text_with_ws(doc)
            .and_then(|text| Some((text, span.offset(doc)?, span.length(doc)?)));
        let (text, offset, length) = extent.ok_or_else(|| {
            execution_fault(format_args!(
                "span '{}' [{}, {}] lies outside the document",
                span.name, span.start, span.end
            ))
        })?;
        Ok(Record {
            name: span.name.clone(),
            value: span.value.clone(),
            text,
            offset,
            length,
            location: Location::Span {
                start: span.start,
                end: span.end,
            },
        })
    }

    /// The source token, for token records.
    pub fn token_index(&self) -> Option<usize> {
        match self.location {
            Location::Token { index } => Some(index),
            Location::Span { .. } => None,
        }
    }

    /// Tokens covered by the record.
    pub fn token_len(&self) -> usize {
        match self.location {
            Location::Token { .. } => 1,
            Location::Span { start, end } => (end + 1).saturating_sub(start),
        }
    }

    /// Prefix the indicator name, as transformations do.
    pub(crate) fn rename(&mut self, prefix: &str) {
        self.name = format!("{}_{}", prefix, self.name);
    }
}

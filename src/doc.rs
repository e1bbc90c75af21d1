//! The document arena.
//!
//! A [`Doc`] owns every token of a parsed document. Head and child relations
//! are stored as indices into the arena, so traversal is a walk over a flat
//! array and a malformed parse cannot create ownership cycles. [`TokenRef`]
//! is the `Copy` handle used to navigate it.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use thiserror::Error;

use crate::attr::AttrValue;
use crate::flags::Flag;
use crate::morph::Morph;
use crate::span::Span;
use crate::token::{Token, TokenSpec};

/// Errors raised while building or annotating a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocError {
    /// A head index points outside its sentence.
    #[error("token {token}: head {head} is outside the sentence")]
    HeadOutOfRange { token: usize, head: usize },

    /// Following heads from a token never reaches a root.
    #[error("token {token}: head chain does not reach a root")]
    HeadCycle { token: usize },

    /// A token index that does not exist in the document.
    #[error("token index {0} is out of range")]
    TokenOutOfRange(usize),

    /// A span whose range is empty, reversed, or outside the document.
    #[error("span '{name}' [{start}, {end}] is not a valid token range")]
    InvalidSpan { name: String, start: usize, end: usize },

    /// Malformed parser output.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type for document operations.
pub type DocResult<T> = Result<T, DocError>;

/// A dependency-parsed document.
#[derive(Clone, PartialEq)]
pub struct Doc {
    tokens: Vec<Token>,
    sentences: Vec<Range<usize>>,
    text: String,
    lang: String,
    span_layers: BTreeMap<String, Vec<Span>>,
}

impl fmt::Debug for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Doc")
            .field("token_count", &self.tokens.len())
            .field("sentence_count", &self.sentences.len())
            .field("span_layers", &self.span_layers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Doc {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Handle for the token at `index`, if any.
    pub fn token(&self, index: usize) -> Option<TokenRef<'_>> {
        if index < self.tokens.len() {
            Some(TokenRef { doc: self, index })
        } else {
            None
        }
    }

    /// All tokens in document order.
    pub fn tokens(&self) -> impl Iterator<Item = TokenRef<'_>> + '_ {
        (0..self.tokens.len()).map(move |index| TokenRef { doc: self, index })
    }

    /// Raw token data.
    pub fn raw(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Token ranges of the sentences, in order.
    pub fn sentences(&self) -> &[Range<usize>] {
        &self.sentences
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Text of tokens `start..=end`. With `with_ws`, the trailing whitespace
    /// of the last token is kept; inner whitespace is always kept.
    pub fn range_text(&self, start: usize, end: usize, with_ws: bool) -> String {
        let mut out = String::new();
        if start > end || end >= self.tokens.len() {
            return out;
        }
        for tok in &self.tokens[start..=end] {
            out.push_str(&tok.text);
            if tok.index != end || with_ws {
                out.push_str(&tok.whitespace);
            }
        }
        out
    }

    /// Write a derived attribute on a token.
    pub fn set_attr(
        &mut self,
        index: usize,
        name: &str,
        value: impl Into<AttrValue>,
    ) -> DocResult<()> {
        let tok = self
            .tokens
            .get_mut(index)
            .ok_or(DocError::TokenOutOfRange(index))?;
        tok.attrs.insert(name, value);
        Ok(())
    }

    /// Store a document-level span layer produced by an upstream annotator.
    pub fn set_span_layer(&mut self, name: &str, spans: Vec<Span>) -> DocResult<()> {
        if let Some(bad) = spans.iter().find(|s| !s.is_valid_for(self)) {
            return Err(DocError::InvalidSpan {
                name: bad.name.clone(),
                start: bad.start,
                end: bad.end,
            });
        }
        self.span_layers.insert(name.to_string(), spans);
        Ok(())
    }

    pub fn span_layer(&self, name: &str) -> Option<&[Span]> {
        self.span_layers.get(name).map(Vec::as_slice)
    }

    pub fn span_layer_names(&self) -> impl Iterator<Item = &str> {
        self.span_layers.keys().map(String::as_str)
    }

    /// Spans for each sentence, valued `"sentence"`.
    pub fn sentence_spans(&self) -> Vec<Span> {
        self.sentences
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| Span::new("sents", r.start, r.end - 1, "sentence"))
            .collect()
    }
}

/// A borrowed handle to one token of a [`Doc`].
#[derive(Clone, Copy)]
pub struct TokenRef<'a> {
    doc: &'a Doc,
    index: usize,
}

impl<'a> PartialEq for TokenRef<'a> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.index == other.index
    }
}

impl<'a> Eq for TokenRef<'a> {}

impl<'a> fmt::Debug for TokenRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.text(), self.index)
    }
}

impl<'a> TokenRef<'a> {
    pub fn doc(&self) -> &'a Doc {
        self.doc
    }

    pub fn token(&self) -> &'a Token {
        &self.doc.tokens[self.index]
    }

    /// Document position.
    pub fn i(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &'a str {
        &self.token().text
    }

    pub fn whitespace(&self) -> &'a str {
        &self.token().whitespace
    }

    pub fn text_with_ws(&self) -> String {
        let tok = self.token();
        format!("{}{}", tok.text, tok.whitespace)
    }

    pub fn lower(&self) -> String {
        self.text().to_lowercase()
    }

    pub fn lemma(&self) -> &'a str {
        &self.token().lemma
    }

    pub fn pos(&self) -> &'a str {
        &self.token().pos
    }

    pub fn tag(&self) -> &'a str {
        &self.token().tag
    }

    pub fn dep(&self) -> &'a str {
        &self.token().dep
    }

    pub fn morph(&self) -> &'a Morph {
        &self.token().morph
    }

    pub fn ent_type(&self) -> &'a str {
        &self.token().ent_type
    }

    pub fn offset(&self) -> usize {
        self.token().offset
    }

    pub fn sent_index(&self) -> usize {
        self.token().sent
    }

    /// Token range of the enclosing sentence.
    pub fn sent(&self) -> Range<usize> {
        self.doc
            .sentences
            .get(self.token().sent)
            .cloned()
            .unwrap_or(self.index..self.index + 1)
    }

    pub fn is_sent_start(&self) -> bool {
        self.sent().start == self.index
    }

    pub fn is_sent_end(&self) -> bool {
        self.sent().end == self.index + 1
    }

    /// The governing token as stored by the parser; roots return themselves.
    pub fn head(&self) -> TokenRef<'a> {
        TokenRef {
            doc: self.doc,
            index: self.token().head,
        }
    }

    /// True when the parser made this token its own head.
    pub fn is_self_headed(&self) -> bool {
        self.token().head == self.index
    }

    /// Dependents in document order.
    pub fn children(&self) -> impl Iterator<Item = TokenRef<'a>> + 'a {
        let doc = self.doc;
        self.token()
            .children
            .iter()
            .map(move |&index| TokenRef { doc, index })
    }

    /// Heads from the immediate governor up to the root, excluding self.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            current: *self,
            remaining: self.doc.len(),
        }
    }

    /// True if `self` lies on the head chain of `other`.
    pub fn is_ancestor_of(&self, other: TokenRef<'a>) -> bool {
        other.ancestors().any(|anc| anc == *self)
    }

    /// The token and all its descendants, in document order.
    pub fn subtree(&self) -> Vec<TokenRef<'a>> {
        let mut indices = Vec::new();
        let mut stack = vec![self.index];
        let mut seen = vec![false; self.doc.len()];
        while let Some(i) = stack.pop() {
            if seen[i] {
                continue;
            }
            seen[i] = true;
            indices.push(i);
            stack.extend(self.doc.tokens[i].children.iter().copied());
        }
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|index| TokenRef { doc: self.doc, index })
            .collect()
    }

    /// Returns true if `other` is in this token's subtree.
    pub fn dominates(&self, other: TokenRef<'a>) -> bool {
        *self == other || self.is_ancestor_of(other)
    }

    /// Neighbouring token at a relative offset.
    pub fn nbor(&self, offset: isize) -> Option<TokenRef<'a>> {
        let target = self.index as isize + offset;
        if target < 0 {
            return None;
        }
        self.doc.token(target as usize)
    }

    pub fn attr(&self, name: &str) -> Option<&'a AttrValue> {
        self.token().attrs.get(name)
    }

    /// A boolean derived attribute; absent or non-boolean counts as false.
    pub fn attr_flag(&self, name: &str) -> bool {
        self.attr(name).and_then(AttrValue::as_bool).unwrap_or(false)
    }

    pub fn flag(&self, flag: Flag) -> bool {
        flag.test(*self)
    }
}

/// Iterator over a token's head chain.
///
/// Bounded by the document length so a corrupted head chain can never loop.
pub struct Ancestors<'a> {
    current: TokenRef<'a>,
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = TokenRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.current.is_self_headed() {
            return None;
        }
        self.remaining -= 1;
        self.current = self.current.head();
        Some(self.current)
    }
}

/// Assembles a [`Doc`] from parser output, sentence by sentence.
///
/// ```
/// use awe_nlp::{DocBuilder, TokenSpec};
///
/// let doc = DocBuilder::new()
///     .sentence(vec![
///         TokenSpec::new("Cats", "cat", "NOUN", "NNS", "nsubj", 1),
///         TokenSpec::new("sleep", "sleep", "VERB", "VBP", "ROOT", 1).ws(""),
///         TokenSpec::new(".", ".", "PUNCT", ".", "punct", 1).ws(""),
///     ])
///     .build()
///     .unwrap();
/// assert_eq!(doc.text(), "Cats sleep.");
/// assert_eq!(doc.token(0).unwrap().head().text(), "sleep");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocBuilder {
    sentences: Vec<Vec<TokenSpec>>,
    lang: Option<String>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sentence. Heads are relative to the sentence start.
    pub fn sentence(mut self, tokens: Vec<TokenSpec>) -> Self {
        self.sentences.push(tokens);
        self
    }

    pub fn lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    /// Validate the parse and lay it out as an arena.
    pub fn build(self) -> DocResult<Doc> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut sentences = Vec::new();
        let mut text = String::new();
        let mut offset = 0;

        for (sent, specs) in self.sentences.into_iter().enumerate() {
            let start = tokens.len();
            let count = specs.len();
            for (local, spec) in specs.into_iter().enumerate() {
                let index = start + local;
                if spec.head >= count {
                    return Err(DocError::HeadOutOfRange {
                        token: index,
                        head: start + spec.head,
                    });
                }
                text.push_str(&spec.text);
                text.push_str(&spec.whitespace);
                let tok_offset = offset;
                offset += spec.text.chars().count() + spec.whitespace.chars().count();
                tokens.push(Token {
                    index,
                    text: spec.text,
                    whitespace: spec.whitespace,
                    lemma: spec.lemma,
                    pos: spec.pos,
                    tag: spec.tag,
                    dep: spec.dep,
                    morph: spec.morph,
                    ent_type: spec.ent_type,
                    ent_iob: spec.ent_iob,
                    head: start + spec.head,
                    children: Vec::new(),
                    sent,
                    offset: tok_offset,
                    is_stop: spec.is_stop,
                    is_oov: spec.is_oov,
                    attrs: spec.attrs,
                });
            }
            sentences.push(start..tokens.len());
        }

        for index in 0..tokens.len() {
            let head = tokens[index].head;
            if head != index {
                tokens[head].children.push(index);
            }
        }

        check_acyclic(&tokens)?;

        Ok(Doc {
            tokens,
            sentences,
            text,
            lang: self.lang.unwrap_or_else(|| "en".to_string()),
            span_layers: BTreeMap::new(),
        })
    }
}

fn check_acyclic(tokens: &[Token]) -> DocResult<()> {
    // 0 = unvisited, 1 = on the current path, 2 = known to reach a root
    let mut state = vec![0u8; tokens.len()];
    for start in 0..tokens.len() {
        let mut path = Vec::new();
        let mut current = start;
        loop {
            match state[current] {
                2 => break,
                1 => return Err(DocError::HeadCycle { token: start }),
                _ => {}
            }
            state[current] = 1;
            path.push(current);
            let head = tokens[current].head;
            if head == current {
                break;
            }
            current = head;
        }
        for i in path {
            state[i] = 2;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_sat() -> Doc {
        DocBuilder::new()
            .sentence(vec![
                TokenSpec::new("The", "the", "DET", "DT", "det", 1),
                TokenSpec::new("cat", "cat", "NOUN", "NN", "nsubj", 2),
                TokenSpec::new("sat", "sit", "VERB", "VBD", "ROOT", 2).ws(""),
                TokenSpec::new(".", ".", "PUNCT", ".", "punct", 2),
            ])
            .sentence(vec![
                TokenSpec::new("It", "it", "PRON", "PRP", "nsubj", 1),
                TokenSpec::new("purred", "purr", "VERB", "VBD", "ROOT", 1).ws(""),
                TokenSpec::new(".", ".", "PUNCT", ".", "punct", 1).ws(""),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn builds_arena() {
        let doc = cat_sat();
        assert_eq!(doc.len(), 7);
        assert_eq!(doc.text(), "The cat sat. It purred.");
        assert_eq!(doc.sentences(), &[0..4, 4..7]);

        let sat = doc.token(2).unwrap();
        let children: Vec<_> = sat.children().map(|c| c.i()).collect();
        assert_eq!(children, vec![1, 3]);
        assert!(sat.is_self_headed());

        let it = doc.token(4).unwrap();
        assert_eq!(it.offset(), 13);
        assert_eq!(it.head().text(), "purred");
        assert!(it.is_sent_start());
        assert!(doc.token(6).unwrap().is_sent_end());
    }

    #[test]
    fn ancestors_and_subtree() {
        let doc = cat_sat();
        let the = doc.token(0).unwrap();
        let chain: Vec<_> = the.ancestors().map(|t| t.i()).collect();
        assert_eq!(chain, vec![1, 2]);

        let sat = doc.token(2).unwrap();
        let subtree: Vec<_> = sat.subtree().iter().map(|t| t.i()).collect();
        assert_eq!(subtree, vec![0, 1, 2, 3]);
        assert!(sat.dominates(the));
        assert!(!the.dominates(sat));
    }

    #[test]
    fn rejects_bad_heads() {
        let out_of_range = DocBuilder::new()
            .sentence(vec![TokenSpec::new("Go", "go", "VERB", "VB", "ROOT", 3)])
            .build();
        assert_eq!(
            out_of_range.unwrap_err(),
            DocError::HeadOutOfRange { token: 0, head: 3 }
        );

        let cycle = DocBuilder::new()
            .sentence(vec![
                TokenSpec::new("a", "a", "X", "X", "dep", 1),
                TokenSpec::new("b", "b", "X", "X", "dep", 0),
            ])
            .build();
        assert!(matches!(cycle, Err(DocError::HeadCycle { .. })));
    }

    #[test]
    fn attributes_and_span_layers() {
        let mut doc = cat_sat();
        doc.set_attr(1, "animate", true).unwrap();
        assert!(doc.token(1).unwrap().attr_flag("animate"));
        assert!(!doc.token(0).unwrap().attr_flag("animate"));
        assert_eq!(
            doc.set_attr(99, "animate", true),
            Err(DocError::TokenOutOfRange(99))
        );

        assert!(doc
            .set_span_layer("main_ideas", vec![Span::new("main_ideas", 3, 1, "x")])
            .is_err());
        doc.set_span_layer("main_ideas", vec![Span::new("main_ideas", 0, 3, "x")])
            .unwrap();
        assert_eq!(doc.span_layer("main_ideas").unwrap().len(), 1);
    }

    #[test]
    fn range_text_whitespace() {
        let doc = cat_sat();
        assert_eq!(doc.range_text(0, 3, false), "The cat sat.");
        assert_eq!(doc.range_text(0, 3, true), "The cat sat. ");
        let spans = doc.sentence_spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].length(&doc), Some(10));
    }
}

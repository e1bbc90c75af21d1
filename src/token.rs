//! Parsed tokens and the specs used to build them.

use crate::attr::AttrBag;
use crate::morph::Morph;

/// One node of a dependency-parsed document.
///
/// Structural fields are fixed once the document is built; only the
/// derived-attribute bag can change afterwards (see [`crate::Doc::set_attr`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub(crate) index: usize,
    pub(crate) text: String,
    pub(crate) whitespace: String,
    pub(crate) lemma: String,
    pub(crate) pos: String,
    pub(crate) tag: String,
    pub(crate) dep: String,
    pub(crate) morph: Morph,
    pub(crate) ent_type: String,
    pub(crate) ent_iob: String,
    pub(crate) head: usize,
    pub(crate) children: Vec<usize>,
    pub(crate) sent: usize,
    pub(crate) offset: usize,
    pub(crate) is_stop: bool,
    pub(crate) is_oov: bool,
    pub(crate) attrs: AttrBag,
}

impl Token {
    /// Position in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace following the token in the source text.
    pub fn whitespace(&self) -> &str {
        &self.whitespace
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Coarse part-of-speech tag (`NOUN`, `VERB`, ...).
    pub fn pos(&self) -> &str {
        &self.pos
    }

    /// Fine-grained tag (`NNS`, `VBD`, ...).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Dependency label relative to the head.
    pub fn dep(&self) -> &str {
        &self.dep
    }

    pub fn morph(&self) -> &Morph {
        &self.morph
    }

    pub fn ent_type(&self) -> &str {
        &self.ent_type
    }

    pub fn ent_iob(&self) -> &str {
        &self.ent_iob
    }

    /// Index of the governing token. Roots point at themselves.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Dependents in document order.
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Sentence number.
    pub fn sent(&self) -> usize {
        self.sent
    }

    /// Character offset of the token in the document text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_stop(&self) -> bool {
        self.is_stop
    }

    pub fn is_oov(&self) -> bool {
        self.is_oov
    }

    pub fn attrs(&self) -> &AttrBag {
        &self.attrs
    }
}

/// Parser output for a single token, as fed to [`crate::DocBuilder`].
///
/// `head` is relative to the start of the token's sentence; a token whose
/// head is its own position is a root.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSpec {
    pub text: String,
    pub whitespace: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub dep: String,
    pub head: usize,
    pub morph: Morph,
    pub ent_type: String,
    pub ent_iob: String,
    pub is_stop: bool,
    pub is_oov: bool,
    pub attrs: AttrBag,
}

impl TokenSpec {
    pub fn new(text: &str, lemma: &str, pos: &str, tag: &str, dep: &str, head: usize) -> Self {
        Self {
            text: text.to_string(),
            whitespace: " ".to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            tag: tag.to_string(),
            dep: dep.to_string(),
            head,
            morph: Morph::default(),
            ent_type: String::new(),
            ent_iob: "O".to_string(),
            is_stop: false,
            is_oov: false,
            attrs: AttrBag::default(),
        }
    }

    pub fn morph(mut self, feats: &str) -> Self {
        self.morph = Morph::parse(feats);
        self
    }

    /// Trailing whitespace (defaults to a single space).
    pub fn ws(mut self, whitespace: &str) -> Self {
        self.whitespace = whitespace.to_string();
        self
    }

    pub fn ent(mut self, ent_type: &str, iob: &str) -> Self {
        self.ent_type = ent_type.to_string();
        self.ent_iob = iob.to_string();
        self
    }

    pub fn stop(mut self, is_stop: bool) -> Self {
        self.is_stop = is_stop;
        self
    }

    pub fn oov(mut self, is_oov: bool) -> Self {
        self.is_oov = is_oov;
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<crate::AttrValue>) -> Self {
        self.attrs.insert(name, value);
        self
    }
}

//! Lexical knowledge base seam.
//!
//! Temporal and event classification need sense lookup, hypernym closure
//! and derivational relations. Any WordNet-like backend can implement
//! [`LexicalKnowledgeBase`]; [`MemoryKnowledgeBase`] is a small in-memory
//! implementation.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use thiserror::Error;

/// Sense identifier of the "time period" concept.
pub const TIME_PERIOD: &str = "time_period.n.01";

/// Sense identifier of the "event" concept.
pub const EVENT: &str = "event.n.01";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("lexical knowledge base unavailable: {0}")]
    Unavailable(String),

    #[error("unknown sense '{0}'")]
    UnknownSense(String),
}

pub type LexiconResult<T> = Result<T, LexiconError>;

/// Part of speech of a sense or related form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SensePos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// One word sense, named like `time_period.n.01`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sense {
    pub name: String,
    pub pos: SensePos,
    /// Lemmas that lexicalize the sense.
    pub lemmas: Vec<String>,
}

impl Sense {
    pub fn new(name: &str, pos: SensePos, lemmas: &[&str]) -> Self {
        Sense {
            name: name.to_string(),
            pos,
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn has_lemma(&self, lemma: &str) -> bool {
        self.lemmas.iter().any(|l| l == lemma)
    }
}

/// A derivationally related form of a lemma (`arrive` for `arrival`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RelatedForm {
    pub lemma: String,
    pub pos: SensePos,
}

pub trait LexicalKnowledgeBase {
    /// Senses of `lemma`, most frequent first.
    fn senses(&self, lemma: &str) -> LexiconResult<Vec<Sense>>;

    /// Every sense reachable through hypernym links, excluding `sense`.
    fn hypernym_closure(&self, sense: &Sense) -> LexiconResult<Vec<Sense>>;

    /// Derivationally related forms of `lemma` across all its senses.
    fn derivational_forms(&self, lemma: &str) -> LexiconResult<Vec<RelatedForm>>;
}

/// In-memory knowledge base assembled with builder calls.
///
/// ```
/// use awe_syntax::{LexicalKnowledgeBase, MemoryKnowledgeBase, Sense, SensePos};
///
/// let kb = MemoryKnowledgeBase::new()
///     .sense("week", Sense::new("week.n.01", SensePos::Noun, &["week"]))
///     .sense("period", Sense::new("time_period.n.01", SensePos::Noun, &["period"]))
///     .hypernym("week.n.01", "time_period.n.01");
///
/// let week = &kb.senses("week").unwrap()[0];
/// assert_eq!(kb.hypernym_closure(week).unwrap()[0].name, "time_period.n.01");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryKnowledgeBase {
    senses: BTreeMap<String, Vec<Sense>>,
    by_name: BTreeMap<String, Sense>,
    hypernyms: BTreeMap<String, Vec<String>>,
    derivations: BTreeMap<String, Vec<RelatedForm>>,
}

impl MemoryKnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `sense` as the next sense of `lemma`.
    pub fn sense(mut self, lemma: &str, sense: Sense) -> Self {
        self.by_name.insert(sense.name.clone(), sense.clone());
        self.senses.entry(lemma.to_string()).or_default().push(sense);
        self
    }

    /// Link sense `child` to its hypernym `parent`, both by name.
    pub fn hypernym(mut self, child: &str, parent: &str) -> Self {
        self.hypernyms
            .entry(child.to_string())
            .or_default()
            .push(parent.to_string());
        self
    }

    pub fn derivation(mut self, lemma: &str, form: &str, pos: SensePos) -> Self {
        self.derivations
            .entry(lemma.to_string())
            .or_default()
            .push(RelatedForm {
                lemma: form.to_string(),
                pos,
            });
        self
    }
}

impl LexicalKnowledgeBase for MemoryKnowledgeBase {
    fn senses(&self, lemma: &str) -> LexiconResult<Vec<Sense>> {
        Ok(self.senses.get(lemma).cloned().unwrap_or_default())
    }

    fn hypernym_closure(&self, sense: &Sense) -> LexiconResult<Vec<Sense>> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(&sense.name);
        while let Some(name) = queue.pop_front() {
            for parent in self.hypernyms.get(name).into_iter().flatten() {
                if parent == &sense.name || !seen.insert(parent.as_str()) {
                    continue;
                }
                let resolved = self
                    .by_name
                    .get(parent)
                    .ok_or_else(|| LexiconError::UnknownSense(parent.clone()))?;
                out.push(resolved.clone());
                queue.push_back(parent);
            }
        }
        Ok(out)
    }

    fn derivational_forms(&self, lemma: &str) -> LexiconResult<Vec<RelatedForm>> {
        Ok(self.derivations.get(lemma).cloned().unwrap_or_default())
    }
}

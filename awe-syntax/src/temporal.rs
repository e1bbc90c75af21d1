//! Detection of constituents denoting time (`yesterday`, `in the morning`,
//! `after the meeting`).
//!
//! Lexical knowledge base failures are logged and treated as "not temporal"
//! or "not an event".

use awe_nlp::TokenRef;
use log::warn;

use crate::knowledge_base::{
    LexicalKnowledgeBase, LexiconResult, Sense, SensePos, EVENT, TIME_PERIOD,
};
use crate::lexicon::{CORE_TEMPORAL_PREPS, TEMPORAL_NOUNS};
use crate::tree::is_root;

const TEMPORAL_ADVERBS: &[&str] = &[
    "early", "late", "later", "earlier", "soon", "ago", "past", "since", "before", "after",
    "beforehand", "afterward", "afterwards",
];

/// Labels that open a subordinate clause inside a temporal phrase.
const CLAUSE_BOUNDARY_DEPS: &[&str] = &["mark", "aux", "nsubj", "relcl", "acl", "xcomp"];

const CLAUSE_BOUNDARY_WORDS: &[&str] = &[
    "that", "which", "when", "where", "why", "how", "whether", "if",
];

const TEMPORAL_ENTITIES: &[&str] = &["TIME", "DATE", "EVENT"];

/// A temporal constituent: the anchor token index (normally the start of
/// the enclosing sentence) and the token indices in its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalScope {
    pub start: usize,
    pub scope: Vec<usize>,
}

/// Whether the first sense of `lemma` is, or descends from, `concept`.
fn first_sense_under(
    kb: &dyn LexicalKnowledgeBase,
    lemma: &str,
    concept: &str,
) -> LexiconResult<Option<Sense>> {
    let senses = kb.senses(lemma)?;
    let first = match senses.into_iter().next() {
        Some(sense) => sense,
        None => return Ok(None),
    };
    if first.name == concept {
        return Ok(Some(first));
    }
    let closure = kb.hypernym_closure(&first)?;
    if closure.iter().any(|s| s.name == concept) {
        Ok(Some(first))
    } else {
        Ok(None)
    }
}

/// A common noun naming a time: a closed temporal noun, a time/date/event
/// entity, or a sense under "time period".
pub fn is_temporal(tok: TokenRef<'_>, kb: &dyn LexicalKnowledgeBase) -> bool {
    if tok.pos() != "NOUN" {
        return false;
    }
    if TEMPORAL_NOUNS.contains(&tok.lemma().to_lowercase().as_str()) {
        return true;
    }
    if TEMPORAL_ENTITIES.contains(&tok.ent_type()) {
        return true;
    }
    match first_sense_under(kb, tok.lemma(), TIME_PERIOD) {
        Ok(found) => found.is_some(),
        Err(err) => {
            warn!("temporal lookup for '{}' failed: {}", tok.lemma(), err);
            false
        }
    }
}

/// A common noun naming an event that has a verbal derivation
/// (`arrival` from `arrive`).
pub fn is_event(tok: TokenRef<'_>, kb: &dyn LexicalKnowledgeBase) -> bool {
    if tok.pos() != "NOUN" {
        return false;
    }
    let lookup = || -> LexiconResult<bool> {
        let sense = match first_sense_under(kb, tok.lemma(), EVENT)? {
            Some(sense) => sense,
            None => return Ok(false),
        };
        if !sense.has_lemma(tok.lemma()) {
            return Ok(false);
        }
        Ok(kb
            .derivational_forms(tok.lemma())?
            .iter()
            .any(|form| form.pos == SensePos::Verb))
    };
    match lookup() {
        Ok(found) => found,
        Err(err) => {
            warn!("event lookup for '{}' failed: {}", tok.lemma(), err);
            false
        }
    }
}

/// Whether the lemma, a derivational relative of it, or the token's `root`
/// attribute appears in `words`.
pub fn match_related_form(
    tok: TokenRef<'_>,
    words: &[&str],
    kb: &dyn LexicalKnowledgeBase,
) -> bool {
    let mut forms: Vec<String> = match kb.derivational_forms(tok.lemma()) {
        Ok(related) => related.into_iter().map(|f| f.lemma).collect(),
        Err(err) => {
            warn!("derivation lookup for '{}' failed: {}", tok.lemma(), err);
            Vec::new()
        }
    };
    forms.push(tok.lemma().to_string());
    if let Some(root) = tok.attr("root").and_then(|v| v.as_str()) {
        forms.push(root.to_string());
    }
    forms.iter().any(|form| words.contains(&form.as_str()))
}

/// Subtree of `tok` up to the first subordinate-clause boundary.
fn truncated_scope(tok: TokenRef<'_>) -> Vec<usize> {
    tok.subtree()
        .into_iter()
        .take_while(|sub| {
            !CLAUSE_BOUNDARY_DEPS.contains(&sub.dep())
                && !CLAUSE_BOUNDARY_WORDS.contains(&sub.lemma())
        })
        .map(|sub| sub.i())
        .collect()
}

/// The temporal constituent headed by `tok`, if any.
pub fn temporal_phrase_scope(
    tok: TokenRef<'_>,
    kb: &dyn LexicalKnowledgeBase,
) -> Option<TemporalScope> {
    let sent_start = tok.sent().start;

    // `during` misparsed as a subordinator of a verb
    if tok.pos() == "VERB" {
        if let Some(child) = tok.children().next() {
            if child.dep() == "mark" && child.lemma() == "during" {
                return Some(TemporalScope {
                    start: sent_start,
                    scope: child.subtree().iter().map(|t| t.i()).collect(),
                });
            }
        }
    }

    let head = tok.head();
    if !matches!(head.pos(), "VERB" | "AUX") {
        return None;
    }

    if tok.dep() == "advmod" && is_root(head) && TEMPORAL_ADVERBS.contains(&tok.lemma()) {
        return Some(TemporalScope {
            start: sent_start,
            scope: tok.subtree().iter().map(|t| t.i()).collect(),
        });
    }

    if matches!(tok.dep(), "npadvmod" | "attr" | "nsubj")
        && is_root(head)
        && (TEMPORAL_NOUNS.contains(&tok.lemma().to_lowercase().as_str()) || is_temporal(tok, kb))
    {
        return Some(TemporalScope {
            start: sent_start,
            scope: truncated_scope(tok),
        });
    }

    let lower = tok.lower();
    if matches!(tok.dep(), "prep" | "mark") && CORE_TEMPORAL_PREPS.contains(&lower.as_str()) {
        if tok.dep() == "mark" {
            return Some(TemporalScope {
                start: tok.i(),
                scope: vec![tok.i()],
            });
        }
        for child in tok.children() {
            if !matches!(child.dep(), "pobj" | "pcomp") {
                continue;
            }
            if is_temporal(child, kb)
                || (lower != "in" && (is_event(child, kb) || child.pos() == "VERB"))
            {
                return Some(TemporalScope {
                    start: sent_start,
                    scope: truncated_scope(tok),
                });
            }
        }
    }

    None
}

//! Reference sets of clause participants.

use awe_nlp::{Doc, TokenRef};
use awe_syntax::lexicon::REFLEXIVES;

use crate::resolver::AnaphoraResolver;

const CORE_ARGUMENTS: &[&str] = &["nsubj", "nsubjpass", "dobj", "dative"];

const COMPLEMENT_HEADS: &[&str] = &["acomp", "ccomp", "pcomp", "xcomp"];

fn reflexive(tok: TokenRef<'_>) -> bool {
    REFLEXIVES.contains(&tok.lower().as_str())
}

fn push_unique(list: &mut Vec<usize>, items: Vec<usize>) {
    for item in items {
        if !list.contains(&item) {
            list.push(item);
        }
    }
}

impl AnaphoraResolver {
    /// Everything the clause headed by `index` refers to: the token itself
    /// when it is a core argument, then the resolved references of its core
    /// arguments, prepositional objects (one preposition deep, or two when
    /// prepositions stack) and complement-clause subjects. Reflexives are
    /// skipped.
    pub fn distinct_clause_references(&self, doc: &Doc, index: usize) -> Vec<usize> {
        let tok = match doc.token(index) {
            Some(tok) => tok,
            None => return Vec::new(),
        };
        let mut references = Vec::new();

        if CORE_ARGUMENTS.contains(&tok.dep()) && !reflexive(tok) {
            references.push(tok.i());
            references.extend(self.resolve(doc, tok.i()));
        }

        for child in tok.children() {
            if CORE_ARGUMENTS.contains(&child.dep()) && !reflexive(child) {
                push_unique(&mut references, self.resolve(doc, child.i()));
            }
            if child.dep() == "prep" {
                for grandchild in child.children() {
                    if grandchild.dep() == "pobj" && !reflexive(grandchild) {
                        push_unique(&mut references, self.resolve(doc, grandchild.i()));
                    } else if grandchild.dep() == "prep" {
                        for object in grandchild.children() {
                            if object.dep() == "pobj" && !reflexive(object) {
                                push_unique(&mut references, self.resolve(doc, object.i()));
                            }
                        }
                    }
                }
            }
            if COMPLEMENT_HEADS.contains(&child.dep()) {
                for grandchild in child.children() {
                    if matches!(grandchild.dep(), "nsubj" | "nsubjpass") && !reflexive(grandchild) {
                        push_unique(&mut references, self.resolve(doc, grandchild.i()));
                    }
                }
            }
        }
        references
    }

    /// True when `other` resolves to something the clause headed by `clause`
    /// already refers to.
    pub fn contains_distinct_reference(&self, doc: &Doc, clause: usize, other: usize) -> bool {
        let references = self.distinct_clause_references(doc, clause);
        self.resolve(doc, other)
            .iter()
            .any(|reference| references.contains(reference))
    }
}

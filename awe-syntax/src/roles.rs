//! Grammatical-role lookups: subjects, objects, datives and their relatives.
//!
//! Each lookup returns the first child matching a fixed label priority, or
//! `None`.

use awe_nlp::{AttrValue, TokenRef};

use crate::clause::tensed_clause;
use crate::tree::head;

const LINKABLE_POS: &[&str] = &["NOUN", "PROPN", "VERB", "ADJ", "ADV"];

const QUOTE_TEXTS: &[&str] = &["\"", "'", "“", "”", "''", "``"];

fn first_child_with<'a>(tok: TokenRef<'a>, labels: &[&str]) -> Option<TokenRef<'a>> {
    tok.children()
        .filter(|c| c.tag() != "_SP")
        .find(|c| labels.contains(&c.dep()))
}

pub fn subject<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    first_child_with(tok, &["nsubj", "nsubjpass", "poss", "csubj", "csubjpass", "attr"])
}

pub fn active_subject<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    first_child_with(tok, &["nsubj", "poss", "csubj"])
}

pub fn passive_subject<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    first_child_with(tok, &["nsubjpass", "poss", "csubjpass"])
}

pub fn object<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    first_child_with(tok, &["dobj"])
}

/// The token an upstream annotator recorded as governing subject of `tok`
/// (attribute `governing_subject`).
pub fn governing_subject<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    match tok.attr("governing_subject")? {
        AttrValue::Int(i) if *i >= 0 => tok.doc().token(*i as usize),
        AttrValue::Indices(v) => v.first().and_then(|&i| tok.doc().token(i)),
        _ => None,
    }
}

/// The logical object: a direct object, an `of` object, a passive subject,
/// the governing subject of a passive, or the subject of an untensed
/// complement clause.
pub fn logical_object<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    for child in tok.children() {
        if child.dep() == "dobj"
            || (child.dep() == "pobj" && child.lemma() == "of")
            || child.dep() == "nsubjpass"
        {
            return Some(child);
        }
        if child.dep() == "auxpass" {
            if let Some(governor) = governing_subject(tok) {
                return Some(governor);
            }
        }
        if child.dep() == "ccomp" && !tensed_clause(child) {
            if let Some(subj) = subject(child) {
                return Some(subj);
            }
        }
    }
    None
}

/// The indirect object, looking through `to`/`for` prepositions.
pub fn dative<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    for child in tok.children() {
        if child.dep() == "iobj" || (child.dep() == "dative" && child.tag() != "IN") {
            return Some(child);
        } else if child.dep() == "dative"
            || (child.dep() == "prep" && matches!(child.lemma(), "to" | "for"))
        {
            return dative(child);
        } else if child.dep() == "pobj" {
            return Some(child);
        }
    }
    None
}

/// Object of a preposition chain drawn from `preps` (`out of the box`).
pub fn prep_object<'a>(tok: TokenRef<'a>, preps: &[&str]) -> Option<TokenRef<'a>> {
    let own = tok.lower();
    for child in tok.children() {
        if child.dep() == "prep" && preps.contains(&child.lower().as_str()) {
            return prep_object(child, preps);
        } else if child.dep() == "pobj" && preps.contains(&own.as_str()) {
            return Some(child);
        }
    }
    None
}

pub fn quotation_mark(tok: TokenRef<'_>) -> bool {
    if matches!(tok.tag(), "-LRB-" | "-RRB-") {
        return false;
    }
    tok.morph()
        .values("PunctSide")
        .any(|side| side == "Ini" || side == "Fin")
        || QUOTE_TEXTS.contains(&tok.text())
}

/// True when the leftmost token of the phrase marks definiteness
/// (`the`, or a possessive).
pub fn definite(tok: TokenRef<'_>) -> bool {
    let subtree = tok.subtree();
    match subtree.first() {
        Some(first) => {
            first.lower() == "the" || matches!(first.dep(), "prp$" | "wp$" | "poss")
        }
        None => false,
    }
}

/// A common noun whose first dependent is a definite or demonstrative
/// determiner.
pub fn is_definite_nominal(tok: TokenRef<'_>) -> bool {
    if tok.pos() != "NOUN" || tok.tag() == "VBG" {
        return false;
    }
    match tok.children().next() {
        Some(child) => {
            child.dep() == "det"
                && matches!(child.lemma(), "the" | "this" | "that" | "these" | "those")
        }
        None => false,
    }
}

/// Content words directly linked to `tok`: its governing subject, a content
/// head, content children, and content grandchildren under function-word
/// children.
pub fn linked_nodes(tok: TokenRef<'_>) -> Vec<usize> {
    let mut linked = Vec::new();
    if let Some(governor) = governing_subject(tok) {
        linked.push(governor.i());
    }
    if let Some(head) = head(tok) {
        if LINKABLE_POS.contains(&head.pos()) {
            linked.push(head.i());
        }
    }
    for child in tok.children() {
        if LINKABLE_POS.contains(&child.pos()) {
            linked.push(child.i());
        } else {
            linked.extend(
                child
                    .children()
                    .filter(|g| LINKABLE_POS.contains(&g.pos()))
                    .map(|g| g.i()),
            );
        }
    }
    linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[test]
    fn subjects_and_objects() {
        let doc = fixtures::maria();
        let lost = doc.token(1).unwrap();
        assert_eq!(subject(lost).map(|t| t.text()), Some("Maria"));
        assert_eq!(active_subject(lost).map(|t| t.text()), Some("Maria"));
        assert!(passive_subject(lost).is_none());
        assert_eq!(object(lost).map(|t| t.text()), Some("keys"));
        assert_eq!(logical_object(lost).map(|t| t.text()), Some("keys"));
        // possessors count as subjects of their noun
        let keys = doc.token(3).unwrap();
        assert_eq!(subject(keys).map(|t| t.text()), Some("her"));
    }

    #[test]
    fn datives_through_prepositions() {
        let doc = fixtures::gave_book_to();
        let gave = doc.token(1).unwrap();
        assert_eq!(dative(gave).map(|t| t.text()), Some("Sam"));
        assert_eq!(prep_object(gave, &["to"]).map(|t| t.text()), Some("Sam"));
        assert!(prep_object(gave, &["from"]).is_none());
    }

    #[test]
    fn passive_logical_object() {
        let mut doc = fixtures::was_eaten();
        let eaten = doc.token(3).unwrap();
        assert_eq!(logical_object(eaten).map(|t| t.text()), Some("cake"));

        doc.set_attr(3, "governing_subject", 1_i64).unwrap();
        let eaten = doc.token(3).unwrap();
        assert_eq!(governing_subject(eaten).map(|t| t.text()), Some("cake"));
        assert_eq!(linked_nodes(eaten), vec![1, 1]);
    }

    #[test]
    fn definiteness() {
        let doc = fixtures::lack_of_evidence();
        let lack = doc.token(1).unwrap();
        assert!(definite(lack));
        assert!(is_definite_nominal(lack));
        let judges = doc.token(6).unwrap();
        assert!(!definite(judges));
        assert!(!is_definite_nominal(judges));
    }

    #[test]
    fn quotes() {
        let doc = fixtures::quoted();
        assert!(quotation_mark(doc.token(0).unwrap()));
        assert!(!quotation_mark(doc.token(1).unwrap()));
        assert!(quotation_mark(doc.token(2).unwrap()));
    }

    #[test]
    fn linked_content_words() {
        let doc = fixtures::lack_of_evidence();
        let lack = doc.token(1).unwrap();
        // head "worried", grandchild "evidence" under "of"
        assert_eq!(linked_nodes(lack), vec![4, 3]);
    }
}

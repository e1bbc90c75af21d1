//! Clause-level properties: tensedness, governing finite verbs, tense and
//! modal scope.
//!
//! The parser uses the same configuration for tensed clauses and untensed
//! small clauses, so tensedness has to be recovered from auxiliaries,
//! morphology and a closed list of verbs taking bare infinitives.

use awe_nlp::TokenRef;

use crate::tree::{head, is_root};

/// Verbs whose object can head a bare-infinitive small clause
/// (`made him leave`, `saw her go`).
const BARE_INFINITIVE_VERBS: &[&str] = &[
    "make", "have", "help", "let", "go", "bid", "feel", "hear", "see", "watch", "notice",
    "observe", "overhear", "monitor", "perceive", "consider", "proclaim", "declare",
];

const SUBJECT_LABELS: &[&str] = &["nsubj", "nsubjpass", "csubj", "csubjpass", "expl"];

const FINITE_AUX_LEMMAS: &[&str] = &["am", "are", "is", "was", "were", "have", "has", "do", "does"];

/// Auxiliary surface forms that make the governing verb finite.
const FINITE_AUX_FORMS: &[&str] = &[
    "am", "are", "was", "were", "do", "does", "did", "have", "has", "had", "can", "could", "will",
    "would", "may", "might", "must", "'d", "'ve", "'ll", "’d", "’ve", "’ll",
];

const PRESENT_OR_FUTURE_AUX: &[&str] = &[
    "do", "does", "has", "will", "can", "shall", "may", "must", "am", "are", "is",
];

const PAST_AUX: &[&str] = &["did", "had", "was", "were", "could", "would", "'d", "’d"];

const MODAL_AUX: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

pub fn takes_bare_infinitive(tok: TokenRef<'_>) -> bool {
    BARE_INFINITIVE_VERBS.contains(&tok.lemma())
}

fn finite_tag(tok: TokenRef<'_>) -> bool {
    let tag = tok.tag();
    tag == "MD"
        || tag == "BEZ"
        || tag == "BEM"
        || tag == "BER"
        || tag.starts_with("HV")
        || tag.starts_with("DO")
        || tok.morph().has_key("Tense")
}

/// Whether `tok` heads a tensed clause.
///
/// A tensed clause needs a subject and a finite marker (a tensed auxiliary
/// child or finite morphology on the head). Infinitives are never tensed;
/// subjectless inflected root verbs (imperatives) are; the subject of a
/// bare-infinitive small clause does not make it tensed.
pub fn tensed_clause(tok: TokenRef<'_>) -> bool {
    let mut has_subj = false;
    let mut has_tense_marker = false;
    let mut infinitive = false;

    for child in tok.children() {
        if SUBJECT_LABELS.contains(&child.dep()) {
            has_subj = true;
        }
        if child.dep() == "aux" && child.tag() == "TO" {
            infinitive = true;
            break;
        }
        if child.dep() == "aux" && (FINITE_AUX_LEMMAS.contains(&child.lemma()) || finite_tag(child)) {
            has_tense_marker = true;
        }
    }

    if finite_tag(tok) {
        has_tense_marker = true;
    }

    if infinitive {
        return false;
    }
    if !has_tense_marker && !has_subj && is_root(tok) && tok.text() != tok.lemma() {
        return true;
    }
    if !has_subj {
        return false;
    }
    if !has_tense_marker && tok.tag() != "VBZ" && tok.lower() != tok.lemma() {
        return false;
    }
    if let Some(h) = head(tok) {
        if takes_bare_infinitive(h) && tok.lower() == tok.lemma() {
            return false;
        }
    }
    true
}

/// The nearest finite verb governing `tok`.
///
/// Participles, infinitives and conjuncts defer to their heads; a verb with
/// finite morphology or a finite auxiliary child is its own tensed head.
/// Returns `None` only for a non-verbal root reached through no finite verb.
pub fn tensed_verb_head<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    let mut current = tok;
    for _ in 0..=tok.doc().len() {
        if is_root(current) {
            return Some(current);
        }
        if current.lower() == "be" && current.children().any(|c| c.tag() == "MD") {
            return Some(current);
        }
        if matches!(current.tag(), "VBD" | "VBZ" | "MD") {
            return Some(current);
        }
        if current.pos() == "VERB" {
            let defers = current.dep() == "conj"
                || matches!(current.tag(), "VBG" | "VBN")
                || current.children().any(|c| c.tag() == "TO");
            if !defers {
                if current.morph().is("Tense", "Past") || current.morph().is("Tense", "Pres") {
                    return Some(current);
                }
                let finite_child = current.children().any(|c| {
                    let lower = c.lower();
                    FINITE_AUX_FORMS.contains(&lower.as_str())
                        || (c.dep() == "aux" && (lower == "'s" || lower == "’s"))
                });
                if finite_child {
                    return Some(current);
                }
            }
        }
        current = current.head();
    }
    None
}

/// Past-tense verb whose `be` auxiliaries (if any) are also past.
pub fn past_tense_verb(tok: TokenRef<'_>) -> bool {
    if !tok.morph().is("Tense", "Past") {
        return false;
    }
    tok.children()
        .filter(|c| c.lemma() == "be")
        .all(|c| matches!(c.lower().as_str(), "was" | "were"))
}

fn head_subtree_has_aux(tok: TokenRef<'_>, forms: &[&str]) -> bool {
    tok.head()
        .subtree()
        .iter()
        .any(|item| item.dep() == "aux" && forms.contains(&item.lower().as_str()))
}

/// Whether `tok` falls under past-tense marking. `None` for line breaks.
pub fn in_past_tense_scope(tok: TokenRef<'_>) -> Option<bool> {
    if tok.text().contains('\n') {
        return None;
    }
    if matches!(tok.lower().as_str(), "was" | "were") {
        return Some(true);
    }
    if head_subtree_has_aux(tok, PRESENT_OR_FUTURE_AUX) {
        return Some(false);
    }
    if past_tense_verb(tok) {
        return Some(true);
    }
    let mut current = tok;
    for _ in 0..=tok.doc().len() {
        if is_root(current) {
            break;
        }
        let h = current.head();
        if past_tense_verb(h) {
            return Some(true);
        } else if tensed_clause(h) {
            return Some(head_subtree_has_aux(current, PAST_AUX));
        }
        if h == current {
            return Some(false);
        }
        current = h;
    }
    Some(head_subtree_has_aux(current, PAST_AUX))
}

/// Whether `tok` falls under a modal auxiliary. `None` for line breaks.
pub fn in_modal_scope(tok: TokenRef<'_>) -> Option<bool> {
    if tok.text().contains('\n') {
        return None;
    }
    if past_tense_verb(tok) {
        return Some(false);
    }
    let mut current = tok;
    for _ in 0..=tok.doc().len() {
        if is_root(current) {
            break;
        }
        let h = current.head();
        if past_tense_verb(h) {
            return Some(false);
        } else if tensed_clause(h) {
            return Some(head_subtree_has_aux(current, MODAL_AUX));
        }
        if h == current {
            return Some(false);
        }
        current = h;
    }
    Some(head_subtree_has_aux(current, MODAL_AUX))
}

fn complement_flag(node: TokenRef<'_>, attr: &str) -> bool {
    if !matches!(node.dep(), "xcomp" | "advcl") {
        return false;
    }
    node.attr_flag(attr)
        || node
            .head()
            .children()
            .any(|c| matches!(c.dep(), "acomp" | "attr") && c.attr_flag(attr))
}

/// Complement of a tough-predicate (`easy to read`), per the `vwp_tough`
/// annotation.
pub fn tough_complement(node: TokenRef<'_>) -> bool {
    complement_flag(node, "vwp_tough")
}

/// Complement of a raising predicate (`likely to win`), per the
/// `vwp_raising` annotation.
pub fn raising_complement(node: TokenRef<'_>) -> bool {
    complement_flag(node, "vwp_raising")
}

pub fn clausal_subject_or_complement(tok: TokenRef<'_>) -> bool {
    matches!(tok.dep(), "xcomp" | "oprd" | "csubj")
        || (matches!(tok.dep(), "ccomp" | "acl") && tensed_clause(tok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[test]
    fn finite_main_clause_is_tensed() {
        let doc = fixtures::maria();
        assert!(tensed_clause(doc.token(1).unwrap()));
        assert!(!tensed_clause(doc.token(3).unwrap()));
    }

    #[test]
    fn infinitives_are_not_tensed() {
        let doc = fixtures::wants_to_leave();
        let leave = doc.token(3).unwrap();
        assert_eq!(leave.lemma(), "leave");
        assert!(!tensed_clause(leave));
        assert!(tensed_clause(doc.token(1).unwrap()));
    }

    #[test]
    fn small_clauses_are_not_tensed() {
        let doc = fixtures::made_him_leave();
        let leave = doc.token(3).unwrap();
        assert!(takes_bare_infinitive(doc.token(1).unwrap()));
        assert!(!tensed_clause(leave));
    }

    #[test]
    fn imperatives_are_tensed() {
        let doc = fixtures::go_home();
        assert!(tensed_clause(doc.token(0).unwrap()));
    }

    #[test]
    fn tensed_heads() {
        let doc = fixtures::wants_to_leave();
        // the infinitive defers to "wants"
        let leave = doc.token(3).unwrap();
        assert_eq!(tensed_verb_head(leave).map(|t| t.text()), Some("wants"));

        let doc = fixtures::said_that();
        let mary = doc.token(3).unwrap();
        assert_eq!(tensed_verb_head(mary).map(|t| t.text()), Some("left"));
    }

    #[test]
    fn tense_and_modal_scope() {
        let doc = fixtures::maria();
        let keys = doc.token(3).unwrap();
        assert_eq!(in_past_tense_scope(keys), Some(true));
        assert_eq!(in_modal_scope(keys), Some(false));

        let doc = fixtures::will_sing();
        let song = doc.token(4).unwrap();
        assert_eq!(song.text(), "song");
        assert_eq!(in_modal_scope(song), Some(true));
        assert_eq!(in_past_tense_scope(song), Some(false));
    }

    #[test]
    fn clausal_complements() {
        let doc = fixtures::said_that();
        assert!(clausal_subject_or_complement(doc.token(4).unwrap()));
        assert!(!clausal_subject_or_complement(doc.token(3).unwrap()));
        assert!(!tough_complement(doc.token(4).unwrap()));
    }
}

//! Head, depth and phrase-boundary computations over the dependency tree.
//!
//! All functions are total: a missing head, an empty child list or a token
//! at the document edge yields `None` / `false` rather than an error.

use awe_nlp::{Doc, TokenRef};

use crate::clause::tensed_clause;

/// Labels of clauses that render one level deeper than the raw tree.
const CLAUSE_LABELS: &[&str] = &["advcl", "ccomp", "acl", "relcl"];

/// The immediate governor, or `None` for a root.
pub fn head<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    tok.ancestors().next()
}

/// Number of ancestors between the token and its root.
pub fn depth(tok: TokenRef<'_>) -> usize {
    tok.ancestors().count()
}

/// Depth used for indentation when displaying a parse.
///
/// Elements left of a head are pulled up to the head's level so a phrase
/// prints as one span, except around clausal subjects, which stay one level
/// deeper. Clause dependents (and anything below a clause) are pushed one
/// level down per clause label involved.
pub fn adjusted_depth(tok: TokenRef<'_>) -> isize {
    let mut adjustment: isize = 0;
    let own_clause = CLAUSE_LABELS.contains(&tok.dep());
    for anc in tok.ancestors() {
        if tok.i() < anc.i() && anc.dep() != "csubj" && tok.dep() != "csubj" {
            adjustment += 1;
        }
        if own_clause {
            adjustment -= 1;
        }
        if CLAUSE_LABELS.contains(&anc.dep()) {
            adjustment -= 1;
        }
    }
    if tok.dep() == "mark" {
        if let Some(h) = head(tok) {
            if h.dep() == "csubj" {
                adjustment += 1;
            }
        }
    }
    depth(tok) as isize - adjustment
}

/// The next token to the right within the same sentence.
pub fn right<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    tok.nbor(1).filter(|next| next.sent_index() == tok.sent_index())
}

pub fn first_child<'a>(tok: TokenRef<'a>) -> Option<TokenRef<'a>> {
    tok.children().next()
}

/// True if any dependent precedes the token.
pub fn has_left_children(tok: TokenRef<'_>) -> bool {
    tok.children().any(|child| child.i() < tok.i())
}

/// True if the token is the first one of its sentence.
pub fn is_left_edge(tok: TokenRef<'_>) -> bool {
    tok.sent().start == tok.i()
}

/// Whether `a` begins a new phrase relative to its left neighbour `b`.
///
/// Auxiliary/negation/verb chains never start a new phrase, determiner and
/// modifier chains never restart a noun phrase, and adverbial or
/// prepositional heads followed by another adverbial do not restart either.
/// A depth jump of more than one always starts a phrase unless `b` is a
/// case marker or punctuation.
pub fn first_left_sister(a: TokenRef<'_>, b: Option<TokenRef<'_>>) -> bool {
    let depth_a = depth(a) as isize;
    let depth_b = b.map_or(0, |b| depth(b) as isize);
    let head_a = head(a);

    if (depth_a - depth_b).abs() > 1 && b.map_or(true, |b| b.dep() != "case" && b.dep() != "punct") {
        return true;
    }
    let b = match b {
        Some(b) => b,
        None => return true,
    };

    if a.dep() == "prep" && b.tag().starts_with('R') && b.lower().ends_with("ly") {
        return true;
    }
    if a.dep() == "advmod"
        && a.tag().starts_with('R')
        && head_a.map_or(false, |h| h.tag().starts_with('V') && h.i() + 1 == a.i())
    {
        return true;
    }

    let verbal_tag = |t: TokenRef<'_>| {
        ["V", "BE", "DO", "HV"].iter().any(|p| t.tag().starts_with(p))
    };
    let b_under_a_punct = b.dep() == "punct" && a.is_ancestor_of(b);

    if (matches!(
        a.dep(),
        "aux" | "auxpass" | "neg" | "advmod" | "advcl" | "relcl" | "conj"
    ) || verbal_tag(a))
        && (matches!(b.dep(), "aux" | "auxpass" | "neg" | "advmod")
            || b_under_a_punct
            || verbal_tag(b))
    {
        return false;
    }

    let head_a_is_det = head_a.map_or(false, |h| h.dep() == "det");
    if (matches!(
        a.dep(),
        "det"
            | "poss"
            | "amod"
            | "nummod"
            | "compound"
            | "nsubj"
            | "nsubjpass"
            | "csubj"
            | "csubjpass"
            | "dobj"
            | "pobj"
            | "attr"
            | "appos"
    ) || (a.dep() == "neg" && head_a_is_det))
        && (matches!(b.dep(), "det" | "poss" | "amod" | "nummod" | "compound" | "case")
            || b_under_a_punct
            || (b.dep() == "neg"
                && head_a.is_some()
                && head(b).map_or(false, |h| h.dep() == "det")))
    {
        return false;
    }

    let a_adverbial_neg = a.dep() == "neg"
        && head_a.map_or(false, |h| h.tag().starts_with('J') || h.tag().starts_with('R'));
    if (matches!(a.dep(), "advmod" | "acomp" | "prep") || a_adverbial_neg) && b.dep() == "advmod" {
        return false;
    }

    true
}

/// True if tokens `start..=end` form a single phrase: no token after the
/// first one starts a new phrase relative to its left neighbour.
pub fn left_sister_span(doc: &Doc, start: usize, end: usize) -> bool {
    if start > end || end >= doc.len() {
        return false;
    }
    (start + 1..=end).all(|p| match (doc.token(p), doc.token(p - 1)) {
        (Some(tok), Some(prev)) => !first_left_sister(tok, Some(prev)),
        _ => false,
    })
}

/// A token is a root if it is self-headed, carries the `ROOT` label, or is a
/// conjunct of a root (coordinated roots share rootness).
pub fn is_root(tok: TokenRef<'_>) -> bool {
    tok.is_self_headed()
        || tok.dep() == "ROOT"
        || (tok.dep() == "conj" && tok.head().is_self_headed())
}

/// The root governing `tok`.
pub fn root_of<'a>(tok: TokenRef<'a>) -> TokenRef<'a> {
    let mut current = tok;
    for _ in 0..=tok.doc().len() {
        if is_root(current) || current.dep().is_empty() {
            return current;
        }
        current = current.head();
    }
    current
}

/// Every root in the document, in order.
pub fn roots(doc: &Doc) -> Vec<TokenRef<'_>> {
    doc.tokens().filter(|t| is_root(*t)).collect()
}

/// Minimum and maximum token index under `tok`, not descending past a
/// coordinated tensed root.
pub fn root_tree(tok: TokenRef<'_>) -> (usize, usize) {
    fn walk(tok: TokenRef<'_>, start: usize, end: usize) -> (usize, usize) {
        let mut start = start.min(tok.i());
        let mut end = end.max(tok.i());
        for child in tok.children() {
            if is_root(child) && tensed_clause(child) {
                break;
            }
            let (s, e) = walk(child, start, end);
            start = s;
            end = e;
        }
        (start, end)
    }
    walk(tok, tok.i(), tok.i())
}

/// `a` c-commands `b` when `b` lies in the subtree of `a`'s head.
pub fn c_command(a: TokenRef<'_>, b: TokenRef<'_>) -> bool {
    a.head().dominates(b)
}

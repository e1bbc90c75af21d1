use awe_nlp::Doc;

use crate::tests::fixtures;
use crate::{adjusted_depth, first_left_sister};

/// One line per token, indented by display depth, with `+` marking tokens
/// that open a new phrase.
fn layout(doc: &Doc) -> String {
    doc.tokens()
        .map(|tok| {
            let prev = if tok.is_sent_start() { None } else { tok.nbor(-1) };
            let marker = if first_left_sister(tok, prev) { "+ " } else { "  " };
            let depth = adjusted_depth(tok).max(0) as usize;
            format!("{}{}{} [{}]", "  ".repeat(depth), marker, tok.text(), tok.dep())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn two_simple_sentences() {
    insta::assert_snapshot!(layout(&fixtures::maria()), @r###"
    + Maria [nsubj]
    + lost [ROOT]
      + her [poss]
        keys [dobj]
      + . [punct]
    + She [nsubj]
    + was [auxpass]
    + upset [ROOT]
      + . [punct]
    "###);
}

#[test]
fn complement_clause_renders_deeper() {
    let doc = fixtures::said_that();
    let depths: Vec<isize> = doc.tokens().map(adjusted_depth).collect();
    assert_eq!(depths, vec![0, 0, 2, 2, 2, 1]);
}

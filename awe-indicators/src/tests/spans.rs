use awe_nlp::{AttrValue, Span};
use serde_json::json;

use crate::tests::fixtures;
use crate::{IndicatorQuery, IndicatorRegistry, Location, QueryError, Record};

fn layout(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| match r.location {
            Location::Span { start, end } => format!("{}-{} {} {:?}", start, end, r.value, r.text),
            Location::Token { index } => format!("{} {} {:?}", index, r.value, r.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sentence_spans() {
    let doc = fixtures::weather();
    let registry = IndicatorRegistry::new();
    let records = IndicatorQuery::spans("sents").records(&doc, &registry).unwrap();
    insta::assert_snapshot!(layout(&records), @r###"
    0-2 sentence "Rain fell. "
    3-5 sentence "Wind blew. "
    6-6 sentence "Snow"
    "###);

    let lengths = IndicatorQuery::spans("sents")
        .transform("tokenlen")
        .summary("uniq")
        .run(&doc, &registry)
        .unwrap();
    assert_eq!(lengths, json!(["3", "1"]));
}

#[test]
fn delimiter_segments_rebuild_the_text() {
    let doc = fixtures::weather();
    let registry = IndicatorRegistry::new();
    let records = IndicatorQuery::spans("delimiter_.")
        .records(&doc, &registry)
        .unwrap();
    insta::assert_snapshot!(layout(&records), @r###"
    0-2 . "Rain fell. "
    3-5 . "Wind blew. "
    6-6 2 "Snow"
    "###);

    let text: String = records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(text, doc.text());
    assert!(records.iter().all(|r| r.name == "delimiter_."));

    let closed = fixtures::the_cat_sat();
    let records = IndicatorQuery::spans("delimiter_.")
        .records(&closed, &registry)
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, closed.text());
}

#[test]
fn character_lengths_of_spans() {
    let doc = fixtures::weather();
    let lengths: Vec<_> = IndicatorQuery::spans("sents")
        .transform("len")
        .records(&doc, &IndicatorRegistry::new())
        .unwrap()
        .into_iter()
        .map(|r| (r.name, r.value))
        .collect();
    assert_eq!(
        lengths,
        vec![
            ("clen_sents".to_string(), AttrValue::Int(11)),
            ("clen_sents".to_string(), AttrValue::Int(11)),
            ("clen_sents".to_string(), AttrValue::Int(4)),
        ]
    );
}

#[test]
fn registered_span_layers() {
    let mut doc = fixtures::weather();
    let registry = IndicatorRegistry::with_default_span_layers();

    let missing = IndicatorQuery::spans("main_ideas")
        .summary("total")
        .run(&doc, &registry)
        .unwrap();
    assert_eq!(missing, json!(0));

    doc.set_span_layer(
        "main_ideas",
        vec![
            Span::new("main_ideas", 0, 2, AttrValue::Float(0.25)),
            Span::new("main_ideas", 3, 5, AttrValue::Float(0.75)),
        ],
    )
    .unwrap();
    let strongest = IndicatorQuery::spans("main_ideas")
        .filter(">", &["0.5"])
        .transform("text")
        .summary("uniq")
        .run(&doc, &registry)
        .unwrap();
    assert_eq!(strongest, json!(["Wind blew. "]));
}

#[test]
fn span_filters_read_record_values_only() {
    let doc = fixtures::weather();
    let registry = IndicatorRegistry::new();
    let sentences = IndicatorQuery::spans("sents")
        .filter("==", &["sentence"])
        .summary("total")
        .run(&doc, &registry)
        .unwrap();
    assert_eq!(sentences, json!(3));

    let err = IndicatorQuery::spans("sents")
        .filter("pos_", &["NOUN"])
        .run(&doc, &registry)
        .unwrap_err();
    assert_eq!(err, QueryError::InvalidFilter("pos_".into()));
}

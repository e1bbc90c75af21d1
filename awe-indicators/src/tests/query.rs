use awe_nlp::AttrValue;
use serde_json::json;

use crate::tests::fixtures;
use crate::{query, Filter, IndicatorQuery, IndicatorRegistry, InfoType, QueryError};

fn registry() -> IndicatorRegistry {
    let mut registry = IndicatorRegistry::new();
    registry.register_token_attr("concreteness").unwrap();
    registry
}

#[test]
fn part_of_speech_counts() {
    let doc = fixtures::the_cat_sat();
    let counts = query(&doc, &registry(), InfoType::Token, "pos_", &[], &[], Some("counts")).unwrap();
    assert_eq!(counts, json!({"DET": 1, "NOUN": 1, "VERB": 1, "PUNCT": 1}));
}

#[test]
fn square_root_of_text_length() {
    let doc = fixtures::two_cats();
    let records = IndicatorQuery::tokens("text")
        .filter("lower_", &["cats"])
        .transform("len")
        .transform("sqrt")
        .records(&doc, &registry())
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "sqrt_len_text");
    assert_eq!(records[0].value, AttrValue::Float(2.0));
}

#[test]
fn malformed_indicator_names_fail_first() {
    let doc = fixtures::the_cat_sat();
    for info_type in [InfoType::Token, InfoType::Doc] {
        let err = query(
            &doc,
            &registry(),
            info_type,
            "bad indicator",
            &[Filter::new("nonsense", &[])],
            &["nonsense"],
            Some("nonsense"),
        )
        .unwrap_err();
        assert_eq!(err, QueryError::InvalidIndicator("bad indicator".into()));
    }
}

#[test]
fn unregistered_indicators_fail() {
    let doc = fixtures::the_cat_sat();
    let err = IndicatorQuery::tokens("animate")
        .run(&doc, &registry())
        .unwrap_err();
    assert_eq!(err, QueryError::InvalidIndicator("animate".into()));
}

#[test]
fn invalid_pipeline_stages() {
    let doc = fixtures::the_cat_sat();
    let registry = registry();
    let run = |q: IndicatorQuery| q.run(&doc, &registry).unwrap_err();

    assert_eq!(
        run(IndicatorQuery::tokens("pos_").filter("resembles", &["NOUN"])),
        QueryError::InvalidFilter("resembles".into())
    );
    assert_eq!(
        run(IndicatorQuery::tokens("pos_").transform("reverse")),
        QueryError::InvalidTransform("reverse".into())
    );
    assert_eq!(
        run(IndicatorQuery::tokens("pos_").summary("mode")),
        QueryError::InvalidSummary("mode".into())
    );
    assert_eq!(
        run(IndicatorQuery::tokens("pos_").summary("mean")),
        QueryError::Execution
    );
}

#[test]
fn total_counts_records_passing_filters() {
    let doc = fixtures::the_cat_sat();
    let registry = registry();
    let total = |q: IndicatorQuery| q.summary("total").run(&doc, &registry).unwrap();

    assert_eq!(total(IndicatorQuery::tokens("lemma_")), json!(doc.len()));
    assert_eq!(
        total(IndicatorQuery::tokens("lemma_").filter("pos_", &["NOUN", "VERB"])),
        json!(2)
    );
    assert_eq!(
        total(
            IndicatorQuery::tokens("lemma_")
                .filter("pos_", &["NOUN", "VERB"])
                .filter("is_stop", &["False"])
                .filter("concreteness", &["True"])
        ),
        json!(2)
    );
    assert_eq!(
        total(IndicatorQuery::tokens("concreteness").filter(">", &["4"])),
        json!(1)
    );
}

#[test]
fn no_transformations_keep_raw_records() {
    let doc = fixtures::the_cat_sat();
    let records = IndicatorQuery::tokens("concreteness")
        .records(&doc, &registry())
        .unwrap();
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    let values: Vec<_> = records.iter().map(|r| r.value.clone()).collect();
    assert_eq!(names, vec!["concreteness"; 4]);
    assert_eq!(
        values,
        vec![
            AttrValue::Null,
            AttrValue::Float(4.9),
            AttrValue::Float(3.5),
            AttrValue::Null
        ]
    );
}

#[test]
fn numeric_summaries_skip_missing_values() {
    let doc = fixtures::the_cat_sat();
    let registry = registry();
    let summary = |name: &str| {
        IndicatorQuery::tokens("concreteness")
            .summary(name)
            .run(&doc, &registry)
            .unwrap()
    };
    assert_eq!(summary("max"), json!(4.9));
    assert_eq!(summary("min"), json!(3.5));
    assert!((summary("mean").as_f64().unwrap() - 4.2).abs() < 1e-9);
    // four records, two values
    assert_eq!(summary("stdev").as_f64().map(|v| (v * 1000.0).round()), Some(990.0));
    assert_eq!(summary("proportion"), json!(0.5));
    assert_eq!(summary("percent"), json!(50));
}

#[test]
fn flag_transformation() {
    let doc = fixtures::the_cat_sat();
    let counts = IndicatorQuery::tokens("text")
        .transform("is_punct")
        .summary("counts")
        .run(&doc, &registry())
        .unwrap();
    assert_eq!(counts, json!({"false": 3, "true": 1}));
}

#[test]
fn record_table() {
    let doc = fixtures::the_cat_sat();
    let registry = registry();
    let records = IndicatorQuery::tokens("pos_")
        .filter("pos_", &["NOUN"])
        .records(&doc, &registry)
        .unwrap();
    insta::assert_debug_snapshot!(records, @r###"
    [
        Record {
            name: "pos_",
            value: Str(
                "NOUN",
            ),
            text: "cat ",
            offset: 4,
            length: 4,
            location: Token {
                index: 1,
            },
        },
    ]
    "###);

    let table = IndicatorQuery::tokens("pos_")
        .filter("pos_", &["NOUN"])
        .run(&doc, &registry)
        .unwrap();
    assert_eq!(
        table,
        json!({
            "0": {
                "name": "pos_",
                "value": "NOUN",
                "text": "cat ",
                "offset": 4,
                "length": 4,
                "tokenIdx": 1
            }
        })
    );
}

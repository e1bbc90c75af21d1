//! The extract → filter → transform → summarize pipeline.

use awe_nlp::{Doc, Span};
use log::debug;
use serde_json::Value;

use crate::error::{QueryError, QueryResult};
use crate::filter::{CompiledFilter, Filter};
use crate::record::Record;
use crate::registry::{IndicatorRegistry, SpanIndicator, TokenIndicator};
use crate::summary::Summary;
use crate::transform::{parse_all, Transform};

/// Whether a query reads tokens or document spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoType {
    Token,
    Doc,
}

/// A query for one named indicator.
///
/// ```
/// use awe_indicators::{IndicatorQuery, IndicatorRegistry};
/// use awe_nlp::Doc;
/// use serde_json::json;
///
/// let doc = Doc::from_conllu(
///     "1\tCats\tcat\tNOUN\tNNS\t_\t2\tnsubj\t_\t_\n\
///      2\tsleep\tsleep\tVERB\tVBP\t_\t0\troot\t_\t_\n",
/// )
/// .unwrap();
/// let registry = IndicatorRegistry::new();
/// let counts = IndicatorQuery::tokens("pos_")
///     .summary("counts")
///     .run(&doc, &registry)
///     .unwrap();
/// assert_eq!(counts, json!({"NOUN": 1, "VERB": 1}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorQuery {
    info_type: InfoType,
    indicator: String,
    filters: Vec<Filter>,
    transforms: Vec<String>,
    summary: Option<String>,
}

impl IndicatorQuery {
    pub fn new(info_type: InfoType, indicator: &str) -> Self {
        IndicatorQuery {
            info_type,
            indicator: indicator.to_string(),
            filters: Vec::new(),
            transforms: Vec::new(),
            summary: None,
        }
    }

    pub fn tokens(indicator: &str) -> Self {
        Self::new(InfoType::Token, indicator)
    }

    pub fn spans(indicator: &str) -> Self {
        Self::new(InfoType::Doc, indicator)
    }

    pub fn filter(mut self, function: &str, values: &[&str]) -> Self {
        self.filters.push(Filter::new(function, values));
        self
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn transform(mut self, name: &str) -> Self {
        self.transforms.push(name.to_string());
        self
    }

    pub fn summary(mut self, name: &str) -> Self {
        self.summary = Some(name.to_string());
        self
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    pub fn info_type(&self) -> InfoType {
        self.info_type
    }

    /// Filtered and transformed records, without summarizing.
    pub fn records(&self, doc: &Doc, registry: &IndicatorRegistry) -> QueryResult<Vec<Record>> {
        let plan = Plan::new(self, registry)?;
        plan.records(doc)
    }

    /// Run the query. Every name is validated before the document is read.
    pub fn run(&self, doc: &Doc, registry: &IndicatorRegistry) -> QueryResult<Value> {
        let plan = Plan::new(self, registry)?;
        let summary = Summary::parse(self.summary.as_deref())?;
        let records = plan.records(doc)?;
        debug!("indicator '{}': {} records", self.indicator, records.len());
        summary.apply(&records, doc.len())
    }
}

/// One-call form of [`IndicatorQuery`].
pub fn query(
    doc: &Doc,
    registry: &IndicatorRegistry,
    info_type: InfoType,
    indicator: &str,
    filters: &[Filter],
    transforms: &[&str],
    summary: Option<&str>,
) -> QueryResult<Value> {
    let mut q = IndicatorQuery::new(info_type, indicator).with_filters(filters.to_vec());
    for name in transforms {
        q = q.transform(name);
    }
    if let Some(summary) = summary {
        q = q.summary(summary);
    }
    q.run(doc, registry)
}

enum Source {
    Token(TokenIndicator),
    Span(SpanIndicator),
}

/// A validated query.
struct Plan<'q> {
    query: &'q IndicatorQuery,
    source: Source,
    filters: Vec<CompiledFilter>,
    transforms: Vec<Transform>,
}

impl<'q> Plan<'q> {
    fn new(query: &'q IndicatorQuery, registry: &IndicatorRegistry) -> QueryResult<Self> {
        let source = match query.info_type {
            InfoType::Token => Source::Token(registry.token_indicator(&query.indicator)?),
            InfoType::Doc => Source::Span(registry.span_indicator(&query.indicator)?),
        };
        let filters = query
            .filters
            .iter()
            .map(|f| CompiledFilter::compile(f, registry))
            .collect::<QueryResult<Vec<_>>>()?;
        if let Source::Span(_) = source {
            if let Some(f) = filters.iter().find(|f| f.needs_token()) {
                return Err(QueryError::InvalidFilter(f.function().to_string()));
            }
        }
        let transforms = parse_all(&query.transforms)?;
        Ok(Plan {
            query,
            source,
            filters,
            transforms,
        })
    }

    fn records(&self, doc: &Doc) -> QueryResult<Vec<Record>> {
        let mut records = Vec::new();
        match &self.source {
            Source::Token(indicator) => {
                'tokens: for tok in doc.tokens() {
                    let value = indicator.value(tok);
                    let mut record = Record::for_token(&self.query.indicator, tok, value);
                    for filter in &self.filters {
                        if !filter.accepts(&record, Some(tok))? {
                            continue 'tokens;
                        }
                    }
                    for transform in &self.transforms {
                        transform.apply_token(&mut record, tok)?;
                    }
                    records.push(record);
                }
            }
            Source::Span(indicator) => {
                'spans: for span in spans(doc, &self.query.indicator, indicator) {
                    let mut record = Record::for_span(doc, &span)?;
                    for filter in &self.filters {
                        if !filter.accepts(&record, None)? {
                            continue 'spans;
                        }
                    }
                    for transform in &self.transforms {
                        transform.apply_span(&mut record)?;
                    }
                    records.push(record);
                }
            }
        }
        Ok(records)
    }
}

fn spans(doc: &Doc, name: &str, indicator: &SpanIndicator) -> Vec<Span> {
    match indicator {
        SpanIndicator::Sentences => doc.sentence_spans(),
        SpanIndicator::Layer(layer) => match doc.span_layer(layer) {
            Some(spans) => spans.to_vec(),
            None => {
                debug!("document has no '{}' span layer", layer);
                Vec::new()
            }
        },
        SpanIndicator::Delimiter(delimiter) => delimited(doc, name, delimiter),
    }
}

/// Split `doc` after every token containing `delimiter`. Closed segments are
/// valued with the delimiter, a trailing open segment with its ordinal.
fn delimited(doc: &Doc, name: &str, delimiter: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0;
    for tok in doc.tokens() {
        if tok.text().contains(delimiter) {
            spans.push(Span::new(name, start, tok.i(), delimiter));
            start = tok.i() + 1;
        }
    }
    if start < doc.len() {
        let segment = spans.len();
        spans.push(Span::new(name, start, doc.len() - 1, segment));
    }
    spans
}

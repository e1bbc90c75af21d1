//! Named indicators.
//!
//! A query names its indicator by string. The registry maps names onto a
//! closed set of accessors: built-in token properties, derived attributes
//! registered by upstream annotators, and document span layers.

use std::collections::BTreeSet;

use awe_nlp::{AttrValue, Flag, TokenRef};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{QueryError, QueryResult};

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid name pattern"));

/// Indicator, filter, transformation and summary names are restricted to
/// ASCII letters, digits and underscores.
pub fn is_valid_name(name: &str) -> bool {
    NAME.is_match(name)
}

const DELIMITER_PREFIX: &str = "delimiter_";

/// Span layers produced by the AWE parser components.
pub const DEFAULT_SPAN_LAYERS: &[&str] = &[
    "sentence_types",
    "transition_distances",
    "intersentence_cohesions",
    "sliding_window_cohesions",
    "corefChainInfo",
    "sentenceThemes",
    "transitions",
    "syntacticDepthsOfThemes",
    "syntacticDepthsOfRhemes",
    "main_cluster_spans",
    "vwp_statements_of_opinion",
    "vwp_statements_of_fact",
    "direct_speech_spans",
    "vwp_social_awareness",
    "vwp_propositional_attitudes",
    "main_ideas",
    "supporting_ideas",
    "supporting_details",
    "all_cluster_info",
];

/// Properties every token has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenProperty {
    Text,
    TextWithWs,
    Orth,
    Lemma,
    Norm,
    Lower,
    Pos,
    Tag,
    Dep,
    EntType,
    EntIob,
    Lang,
    /// Character offset.
    Idx,
    Flag(Flag),
}

impl TokenProperty {
    pub fn from_name(name: &str) -> Option<Self> {
        let prop = match name {
            "text" => TokenProperty::Text,
            "text_with_ws" => TokenProperty::TextWithWs,
            "orth_" => TokenProperty::Orth,
            "lemma_" => TokenProperty::Lemma,
            "norm_" => TokenProperty::Norm,
            "lower_" => TokenProperty::Lower,
            "pos_" => TokenProperty::Pos,
            "tag_" => TokenProperty::Tag,
            "dep_" => TokenProperty::Dep,
            "ent_type_" => TokenProperty::EntType,
            "ent_iob_" => TokenProperty::EntIob,
            "lang_" => TokenProperty::Lang,
            "idx" => TokenProperty::Idx,
            other => TokenProperty::Flag(Flag::from_name(other)?),
        };
        Some(prop)
    }

    /// String-valued properties; filters test them by membership.
    pub fn is_string(self) -> bool {
        !matches!(self, TokenProperty::Idx | TokenProperty::Flag(_))
    }

    pub fn value(self, tok: TokenRef<'_>) -> AttrValue {
        match self {
            TokenProperty::Text | TokenProperty::Orth => tok.text().into(),
            TokenProperty::TextWithWs => tok.text_with_ws().into(),
            TokenProperty::Lemma => tok.lemma().into(),
            TokenProperty::Norm | TokenProperty::Lower => tok.lower().into(),
            TokenProperty::Pos => tok.pos().into(),
            TokenProperty::Tag => tok.tag().into(),
            TokenProperty::Dep => tok.dep().into(),
            TokenProperty::EntType => tok.ent_type().into(),
            TokenProperty::EntIob => tok.token().ent_iob().into(),
            TokenProperty::Lang => tok.doc().lang().into(),
            TokenProperty::Idx => tok.offset().into(),
            TokenProperty::Flag(flag) => tok.flag(flag).into(),
        }
    }
}

/// Accessor for a token-level indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenIndicator {
    Builtin(TokenProperty),
    /// A derived attribute; tokens without it yield null.
    Derived(String),
}

impl TokenIndicator {
    pub fn value(&self, tok: TokenRef<'_>) -> AttrValue {
        match self {
            TokenIndicator::Builtin(prop) => prop.value(tok),
            TokenIndicator::Derived(name) => tok.attr(name).cloned().unwrap_or_default(),
        }
    }
}

/// Source of span records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanIndicator {
    Sentences,
    Layer(String),
    /// Segments closed by each token containing the delimiter.
    Delimiter(String),
}

/// The closed set of indicators a query may name.
///
/// ```
/// use awe_indicators::{IndicatorRegistry, QueryError};
///
/// let mut registry = IndicatorRegistry::new();
/// registry.register_token_attr("concreteness").unwrap();
/// assert!(registry.is_token_attr("concreteness"));
/// assert_eq!(
///     registry.register_token_attr("not valid"),
///     Err(QueryError::InvalidIndicator("not valid".into()))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorRegistry {
    token_attrs: BTreeSet<String>,
    span_layers: BTreeSet<String>,
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry knowing the span layers of the AWE parser components.
    pub fn with_default_span_layers() -> Self {
        let mut registry = Self::new();
        registry
            .span_layers
            .extend(DEFAULT_SPAN_LAYERS.iter().map(|s| s.to_string()));
        registry
    }

    pub fn register_token_attr(&mut self, name: &str) -> QueryResult<()> {
        if !is_valid_name(name) || TokenProperty::from_name(name).is_some() {
            return Err(QueryError::InvalidIndicator(name.to_string()));
        }
        self.token_attrs.insert(name.to_string());
        Ok(())
    }

    pub fn register_span_layer(&mut self, name: &str) -> QueryResult<()> {
        if !is_valid_name(name) || name == "sents" || name.starts_with(DELIMITER_PREFIX) {
            return Err(QueryError::InvalidIndicator(name.to_string()));
        }
        self.span_layers.insert(name.to_string());
        Ok(())
    }

    pub fn is_token_attr(&self, name: &str) -> bool {
        self.token_attrs.contains(name)
    }

    pub fn is_span_layer(&self, name: &str) -> bool {
        self.span_layers.contains(name)
    }

    pub fn token_attrs(&self) -> impl Iterator<Item = &str> {
        self.token_attrs.iter().map(String::as_str)
    }

    pub fn token_indicator(&self, name: &str) -> QueryResult<TokenIndicator> {
        if !is_valid_name(name) {
            return Err(QueryError::InvalidIndicator(name.to_string()));
        }
        if let Some(prop) = TokenProperty::from_name(name) {
            return Ok(TokenIndicator::Builtin(prop));
        }
        if self.is_token_attr(name) {
            return Ok(TokenIndicator::Derived(name.to_string()));
        }
        Err(QueryError::InvalidIndicator(name.to_string()))
    }

    /// `sents`, a registered layer, or `delimiter_<text>`. The delimiter
    /// text itself is taken verbatim so that `delimiter_.` or a newline
    /// delimiter can be named.
    pub fn span_indicator(&self, name: &str) -> QueryResult<SpanIndicator> {
        if let Some(delimiter) = name.strip_prefix(DELIMITER_PREFIX) {
            if delimiter.is_empty() {
                return Err(QueryError::InvalidIndicator(name.to_string()));
            }
            return Ok(SpanIndicator::Delimiter(delimiter.to_string()));
        }
        if !is_valid_name(name) {
            return Err(QueryError::InvalidIndicator(name.to_string()));
        }
        if name == "sents" {
            return Ok(SpanIndicator::Sentences);
        }
        if self.is_span_layer(name) {
            return Ok(SpanIndicator::Layer(name.to_string()));
        }
        Err(QueryError::InvalidIndicator(name.to_string()))
    }
}

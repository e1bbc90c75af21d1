//! Indicator queries over [`awe_nlp::Doc`]s.
//!
//! A query names one indicator (a token property, a derived attribute or a
//! span layer), builds a record per token or span, drops records failing
//! any filter, applies transformations in order and reduces what is left
//! to a JSON payload.
//!
//! ## Example
//!
//! ```
//! use awe_indicators::{IndicatorQuery, IndicatorRegistry};
//! use awe_nlp::Doc;
//! use serde_json::json;
//!
//! let doc = Doc::from_conllu(
//!     "1\tCats\tcat\tNOUN\tNNS\t_\t2\tnsubj\t_\t_\n\
//!      2\tsleep\tsleep\tVERB\tVBP\t_\t0\troot\t_\t_\n",
//! )
//! .unwrap();
//!
//! let mut registry = IndicatorRegistry::new();
//! registry.register_token_attr("concreteness").unwrap();
//!
//! let nouns = IndicatorQuery::tokens("pos_")
//!     .filter("pos_", &["NOUN"])
//!     .summary("total")
//!     .run(&doc, &registry)
//!     .unwrap();
//! assert_eq!(nouns, json!(1));
//! ```

mod error;
mod filter;
mod query;
mod record;
mod registry;
mod summary;
mod transform;

pub use error::{QueryError, QueryResult};
pub use filter::Filter;
pub use query::{query, IndicatorQuery, InfoType};
pub use record::{Location, Record};
pub use registry::{
    is_valid_name, IndicatorRegistry, SpanIndicator, TokenIndicator, TokenProperty,
    DEFAULT_SPAN_LAYERS,
};
pub use summary::Summary;

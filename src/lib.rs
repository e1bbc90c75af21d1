//! Dependency-parsed documents for the AWE inference layer.
//!
//! This crate holds the data the inference crates work on: a [`Doc`] arena
//! of [`Token`]s whose head/child relations are plain indices, the
//! per-token derived-attribute bag ([`AttrBag`]) that upstream annotators
//! fill in, and named [`Span`] layers.
//!
//! ## Core Types
//!
//! - [`Doc`] / [`TokenRef`] - the arena and its navigation handle
//! - [`DocBuilder`] / [`TokenSpec`] - assembling a document from parser output
//! - [`Morph`] - morphological features
//! - [`AttrValue`] / [`AttrBag`] - derived attributes
//! - [`Flag`] - built-in lexical flags
//!
//! ## Example
//!
//! ```
//! use awe_nlp::Doc;
//!
//! let doc = Doc::from_conllu(
//!     "1\tCats\tcat\tNOUN\tNNS\tNumber=Plur\t2\tnsubj\t_\t_\n\
//!      2\tsleep\tsleep\tVERB\tVBP\t_\t0\troot\t_\t_\n",
//! )
//! .unwrap();
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.token(0).unwrap().head().lemma(), "sleep");
//! ```

mod attr;
mod conllu;
mod doc;
mod flags;
mod morph;
mod span;
mod token;

pub use attr::{AttrBag, AttrValue};
pub use doc::{Ancestors, Doc, DocBuilder, DocError, DocResult, TokenRef};
pub use flags::{is_alpha, is_digit, is_lower, is_punct, is_title, is_upper, like_num, like_url, Flag};
pub use morph::Morph;
pub use span::Span;
pub use token::{Token, TokenSpec};

//! Structural utilities over dependency-parsed [`awe_nlp::Doc`]s.
//!
//! Everything here is a pure walk over the token arena. Functions are total:
//! a root has no head, a token at a sentence edge has no neighbour, and
//! missing structure yields `None` or `false`.
//!
//! ## Modules
//!
//! - tree: heads, depths, display depth, phrase boundaries, roots
//! - clause: tensed clauses, governing finite verbs, tense and modal scope
//! - roles: subjects, objects, datives
//! - temporal: temporal phrase detection over a [`LexicalKnowledgeBase`]
//! - lexicon: closed word lists and lexical predicates
//! - syllables / stats: word-level numeric helpers

mod clause;
mod knowledge_base;
pub mod lexicon;
mod roles;
pub mod stats;
mod syllables;
mod temporal;
mod tree;

pub use clause::{
    clausal_subject_or_complement, in_modal_scope, in_past_tense_scope, past_tense_verb,
    raising_complement, takes_bare_infinitive, tensed_clause, tensed_verb_head, tough_complement,
};
pub use knowledge_base::{
    LexicalKnowledgeBase, LexiconError, LexiconResult, MemoryKnowledgeBase, RelatedForm, Sense,
    SensePos, EVENT, TIME_PERIOD,
};
pub use lexicon::{empty_head_word, is_attribute_noun, negative_predicate};
pub use roles::{
    active_subject, dative, definite, governing_subject, is_definite_nominal, linked_nodes,
    logical_object, object, passive_subject, prep_object, quotation_mark, subject,
};
pub use stats::{lex_feature, summarize, FType};
pub use syllables::{alphanum_word, syllable_count};
pub use temporal::{is_event, is_temporal, match_related_form, temporal_phrase_scope, TemporalScope};
pub use tree::{
    adjusted_depth, c_command, depth, first_child, first_left_sister, has_left_children, head,
    is_left_edge, is_root, left_sister_span, right, root_of, root_tree, roots,
};

#[cfg(test)]
mod tests {
    pub(crate) mod fixtures;
    mod parse_layout;
}

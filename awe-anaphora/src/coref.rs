//! Coreference-chain seam.
//!
//! The resolver treats coreference proposals as advisory: it may discard
//! them, re-rank them by animacy, or override them entirely.

use awe_nlp::Doc;

/// Source of raw antecedent proposals. Shared by every thread using a
/// resolver.
pub trait CorefService: Send + Sync {
    /// Proposed antecedent indices for the token at `index`, or `None` when
    /// the token belongs to no chain.
    fn resolve(&self, doc: &Doc, index: usize) -> Option<Vec<usize>>;
}

/// Coreference chains held in memory, one list of mentions per chain. Each
/// mention is the token indices it covers.
///
/// A token resolves to the closest preceding mention of its chain that is
/// not made of pronouns only.
///
/// ```
/// use awe_anaphora::{CorefChains, CorefService};
/// use awe_nlp::Doc;
///
/// let doc = Doc::from_conllu(
///     "1\tAnn\tAnn\tPROPN\tNNP\t_\t2\tnsubj\t_\t_\n\
///      2\tsmiled\tsmile\tVERB\tVBD\t_\t0\troot\t_\t_\n\
///      \n\
///      1\tShe\tshe\tPRON\tPRP\t_\t2\tnsubj\t_\t_\n\
///      2\tleft\tleave\tVERB\tVBD\t_\t0\troot\t_\t_\n",
/// )
/// .unwrap();
/// let chains = CorefChains::new().with_chain(vec![vec![0], vec![2]]);
/// assert_eq!(chains.resolve(&doc, 2), Some(vec![0]));
/// assert_eq!(chains.resolve(&doc, 1), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorefChains {
    chains: Vec<Vec<Vec<usize>>>,
}

impl CorefChains {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain(mut self, mentions: Vec<Vec<usize>>) -> Self {
        self.chains.push(mentions);
        self
    }

    pub fn chains(&self) -> &[Vec<Vec<usize>>] {
        &self.chains
    }
}

fn pronominal(doc: &Doc, mention: &[usize]) -> bool {
    mention
        .iter()
        .all(|&i| doc.token(i).map_or(false, |t| t.pos() == "PRON"))
}

impl CorefService for CorefChains {
    fn resolve(&self, doc: &Doc, index: usize) -> Option<Vec<usize>> {
        for chain in &self.chains {
            let position = match chain.iter().position(|m| m.contains(&index)) {
                Some(position) => position,
                None => continue,
            };
            return chain[..position]
                .iter()
                .rev()
                .find(|m| !m.is_empty() && !pronominal(doc, m))
                .cloned();
        }
        None
    }
}

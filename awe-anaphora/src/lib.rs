//! Anaphora resolution for [`awe_nlp::Doc`]s.
//!
//! [`AnaphoraResolver`] turns advisory coreference proposals into antecedent
//! index lists, re-checking plural and epicene pronouns against animacy with
//! the help of a word-sequence probability service.
//!
//! ## Example
//!
//! ```
//! use awe_anaphora::{AnaphoraResolver, CorefChains};
//! use awe_nlp::Doc;
//!
//! let doc = Doc::from_conllu(
//!     "1\tAnn\tAnn\tPROPN\tNNP\t_\t2\tnsubj\t_\t_\n\
//!      2\tsmiled\tsmile\tVERB\tVBD\t_\t0\troot\t_\t_\n\
//!      \n\
//!      1\tShe\tshe\tPRON\tPRP\t_\t2\tnsubj\t_\t_\n\
//!      2\tleft\tleave\tVERB\tVBD\t_\t0\troot\t_\t_\n",
//! )
//! .unwrap();
//!
//! let resolver = AnaphoraResolver::default()
//!     .with_coref(CorefChains::new().with_chain(vec![vec![0], vec![2]]));
//! assert_eq!(resolver.resolve(&doc, 2), vec![0]);
//! ```

mod config;
mod coref;
mod probability;
mod references;
mod resolver;

pub use config::{AnaphoraConfig, ConfigError, ProbabilityServiceConfig};
pub use coref::{CorefChains, CorefService};
pub use probability::{
    HttpWordSeqClient, ProbabilityError, ProbabilityResult, WordSeqProbability,
};
pub use resolver::AnaphoraResolver;

#[cfg(test)]
mod tests {
    pub(crate) mod fixtures;
    mod references;
    mod resolve;
}

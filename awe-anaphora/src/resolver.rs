//! Antecedent resolution.
//!
//! Proposals come from a [`CorefService`]. Plural and epicene pronouns
//! (`they`, `their`, ...) are checked against animacy: when the proposals
//! mix animate and inanimate candidates, a [`WordSeqProbability`] service
//! decides whether the context wants an animate referent, and if so the
//! document is scanned backwards for one. Speaker and addressee annotations
//! override everything.

use awe_nlp::{AttrValue, Doc, TokenRef};
use awe_syntax::tensed_verb_head;
use log::{debug, warn};

use crate::config::AnaphoraConfig;
use crate::coref::CorefService;
use crate::probability::{
    HttpWordSeqClient, ProbabilityError, ProbabilityResult, WordSeqProbability,
};

/// Pronouns whose referent may be plural or of unknown gender.
const PLURAL_EPICENE: &[&str] = &["they", "them", "their", "theirs", "themselves"];

/// Relative and interrogative forms that always denote persons.
const PERSONAL_WH: &[&str] = &["who", "whom", "whoever"];

/// Resolves pronouns to the indices of their antecedents.
pub struct AnaphoraResolver {
    config: AnaphoraConfig,
    coref: Option<Box<dyn CorefService>>,
    probability: Option<Box<dyn WordSeqProbability>>,
}

impl AnaphoraResolver {
    /// A resolver without services; every token resolves to itself until a
    /// coreference service is attached.
    pub fn new(config: AnaphoraConfig) -> Self {
        Self {
            config,
            coref: None,
            probability: None,
        }
    }

    /// A resolver using the HTTP probability client when the configuration
    /// names an endpoint.
    pub fn from_config(config: AnaphoraConfig) -> Self {
        let probability = config.probability_service.as_ref().map(|svc| {
            Box::new(HttpWordSeqClient::from_config(svc)) as Box<dyn WordSeqProbability>
        });
        Self {
            config,
            coref: None,
            probability,
        }
    }

    pub fn with_coref(mut self, coref: impl CorefService + 'static) -> Self {
        self.coref = Some(Box::new(coref));
        self
    }

    pub fn with_probability(mut self, probability: impl WordSeqProbability + 'static) -> Self {
        self.probability = Some(Box::new(probability));
        self
    }

    pub fn config(&self) -> &AnaphoraConfig {
        &self.config
    }

    pub(crate) fn is_animate(&self, tok: TokenRef<'_>) -> bool {
        tok.attr_flag(&self.config.animacy_attr)
    }

    /// The coreference proposal for `index`, or `None` when there is none
    /// or it names tokens outside the document.
    pub(crate) fn proposal(&self, doc: &Doc, index: usize) -> Option<Vec<usize>> {
        let coref = self.coref.as_ref()?;
        let proposed = coref.resolve(doc, index)?;
        if let Some(bad) = proposed.iter().find(|&&i| i >= doc.len()) {
            warn!(
                "ignoring coreference proposal for token {}: index {} is outside the document",
                index, bad
            );
            return None;
        }
        Some(proposed)
    }

    /// Ordered antecedent indices for the token at `index`. Never empty:
    /// when nothing better is found the token refers to itself.
    pub fn resolve(&self, doc: &Doc, index: usize) -> Vec<usize> {
        let tok = match doc.token(index) {
            Some(tok) => tok,
            None => {
                warn!("resolve called with token index {} outside the document", index);
                return vec![index];
            }
        };
        if self.coref.is_none() {
            return vec![index];
        }

        let proposal = self.proposal(doc, index);
        let lower = tok.lower();
        let resolved = if PLURAL_EPICENE.contains(&lower.as_str()) {
            self.resolve_plural(doc, tok, proposal.as_deref().unwrap_or(&[]))
        } else {
            proposal.unwrap_or_default()
        };

        if let Some(speakers) = self.override_indices(tok, &self.config.speaker_attr) {
            return non_empty_or_self(
                speakers
                    .iter()
                    .copied()
                    .filter(|&i| {
                        doc.token(i)
                            .map_or(false, |t| t.pos() != "PRON" && t.lemma() != "mine")
                    })
                    .collect(),
                index,
            );
        }
        if let Some(addressees) = self.override_indices(tok, &self.config.addressee_attr) {
            return non_empty_or_self(
                addressees
                    .iter()
                    .copied()
                    .filter(|&i| doc.token(i).map_or(false, |t| t.pos() != "PRON"))
                    .collect(),
                index,
            );
        }

        non_empty_or_self(resolved, index)
    }

    fn override_indices<'a>(&self, tok: TokenRef<'a>, attr: &str) -> Option<&'a [usize]> {
        match tok.attr(attr)? {
            AttrValue::Null => None,
            value => match value.as_indices() {
                Some(indices) => Some(indices),
                None => {
                    warn!("attribute '{}' on token {} is not an index list", attr, tok.i());
                    None
                }
            },
        }
    }

    fn resolve_plural(&self, doc: &Doc, tok: TokenRef<'_>, proposed: &[usize]) -> Vec<usize> {
        let mut accepted: Vec<usize> = proposed
            .iter()
            .copied()
            .filter(|&i| doc.token(i).map_or(false, |t| self.is_animate(t)))
            .collect();
        let all_animate = accepted.len() == proposed.len();

        if !all_animate && !accepted.is_empty() {
            match self.prefers_animate(doc, tok) {
                Ok(true) => {
                    debug!("context of token {} prefers an animate referent", tok.i());
                    accepted = self.scan_for_animate_potential_antecedents(doc, tok.i(), &accepted);
                }
                Ok(false) => {}
                Err(err) => {
                    warn!("keeping coreference proposal for token {}: {}", tok.i(), err);
                    for &i in proposed {
                        if !accepted.contains(&i) {
                            accepted.push(i);
                        }
                    }
                    return accepted;
                }
            }
        }

        if accepted.is_empty() {
            accepted = self.scan_for_animate_potential_antecedents(doc, tok.i(), &accepted);
        }
        accepted
    }

    /// Whether an animate placeholder fits the pronoun's context better than
    /// an inanimate one.
    fn prefers_animate(&self, doc: &Doc, tok: TokenRef<'_>) -> ProbabilityResult<bool> {
        let client = self
            .probability
            .as_ref()
            .ok_or(ProbabilityError::NotConfigured)?;
        let (left, right) = context_window(doc, tok.i(), self.config.window);
        let (inanimate, animate) = match tok.lower().as_str() {
            "their" | "theirs" => ("its", "his"),
            _ => ("things", "people"),
        };
        let p_inanimate = client.score(inanimate, &left, &right)?;
        let p_animate = client.score(animate, &left, &right)?;
        debug!(
            "token {}: P({})={} P({})={}",
            tok.i(),
            inanimate,
            p_inanimate,
            animate,
            p_animate
        );
        Ok(p_animate > p_inanimate)
    }

    /// Walk leftwards from `index` looking for an animate antecedent that is
    /// not among the inanimate `proposed` candidates.
    ///
    /// Returns a single pronoun or plural noun as soon as one is found, two
    /// or more accumulated singular nouns once they differ, and `[index]`
    /// when the scan reaches the document start empty-handed.
    pub fn scan_for_animate_potential_antecedents(
        &self,
        doc: &Doc,
        index: usize,
        proposed: &[usize],
    ) -> Vec<usize> {
        let tok = match doc.token(index) {
            Some(tok) => tok,
            None => return vec![index],
        };

        let mut blocked_lex = Vec::new();
        let mut alternates = Vec::new();
        for loc in proposed.iter().copied() {
            match doc.token(loc) {
                Some(t) if self.is_animate(t) => alternates.push(loc),
                Some(t) => blocked_lex.push(t.lower()),
                None => {}
            }
        }

        let targets: Vec<TokenRef<'_>> = if proposed.is_empty() {
            vec![tok]
        } else {
            proposed.iter().filter_map(|&i| doc.token(i)).collect()
        };

        for pos in (0..index).rev() {
            let cand = match doc.token(pos) {
                Some(cand) => cand,
                None => continue,
            };
            let lower = cand.lower();

            if cand.pos() == "PRON" {
                let cand_clause = tensed_verb_head(cand);
                let c_commanding = self.is_animate(cand)
                    && (cand.morph().is("Number", "Plur") || PERSONAL_WH.contains(&lower.as_str()))
                    && targets.iter().any(|&target| {
                        cand.head().dominates(target) && tensed_verb_head(target) != cand_clause
                    });
                if c_commanding {
                    debug!("token {}: c-commanding pronoun {}", index, pos);
                    return vec![pos];
                }
                if let Some(resolution) = self.proposal(doc, pos) {
                    for item in resolution {
                        let animate = doc.token(item).map_or(false, |t| self.is_animate(t));
                        if animate && !alternates.contains(&item) {
                            return vec![item];
                        }
                    }
                }
            } else if matches!(cand.pos(), "NOUN" | "PROPN")
                && self.is_animate(cand)
                && !proposed.contains(&pos)
                && !blocked_lex.contains(&lower)
                && !alternates.contains(&pos)
            {
                alternates.push(pos);
                if cand.morph().is("Number", "Plur") {
                    return vec![pos];
                }
            }

            if alternates.len() > 1 && same_name(doc, alternates[0], alternates[1]) {
                alternates.remove(1);
            }
            if alternates.len() > 1 {
                return alternates;
            }
        }
        vec![index]
    }
}

impl Default for AnaphoraResolver {
    fn default() -> Self {
        Self::new(AnaphoraConfig::default())
    }
}

fn non_empty_or_self(indices: Vec<usize>, index: usize) -> Vec<usize> {
    if indices.is_empty() {
        vec![index]
    } else {
        indices
    }
}

/// Left context of up to `window` tokens and right context of up to
/// `window - 1` tokens around `index`.
fn context_window(doc: &Doc, index: usize, window: usize) -> (String, String) {
    let start = index.saturating_sub(window);
    let end = (index + window).min(doc.len());
    let left = if start < index {
        doc.range_text(start, index - 1, false)
    } else {
        String::new()
    };
    let right = if index + 1 < end {
        doc.range_text(index + 1, end - 1, false)
    } else {
        String::new()
    };
    (left, right)
}

/// Equal surface forms after capitalizing (`smith` and `Smith`).
fn same_name(doc: &Doc, a: usize, b: usize) -> bool {
    match (doc.token(a), doc.token(b)) {
        (Some(a), Some(b)) => capitalize(a.text()) == capitalize(b.text()),
        _ => false,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn resolver_is_send_and_sync() {
        assert_send_sync::<AnaphoraResolver>();
        assert_send_sync::<HttpWordSeqClient>();
    }

    #[test]
    fn capitalization_matches_names() {
        assert_eq!(capitalize("mCdonald"), "Mcdonald");
        assert_eq!(capitalize(""), "");
    }
}

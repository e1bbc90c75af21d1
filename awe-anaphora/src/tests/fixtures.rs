use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use awe_nlp::{Doc, DocBuilder, TokenSpec};

use crate::{CorefService, ProbabilityError, ProbabilityResult, WordSeqProbability};

const MARIA: &str = "\
# text = Maria lost her keys. She was upset.
1\tMaria\tMaria\tPROPN\tNNP\tNumber=Sing\t2\tnsubj\t_\tEntity=PERSON
2\tlost\tlose\tVERB\tVBD\tTense=Past|VerbForm=Fin\t0\troot\t_\t_
3\ther\ther\tPRON\tPRP$\tPoss=Yes\t4\tposs\t_\t_
4\tkeys\tkey\tNOUN\tNNS\tNumber=Plur\t2\tdobj\t_\tSpaceAfter=No
5\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_

1\tShe\tshe\tPRON\tPRP\tNumber=Sing\t3\tnsubj\t_\t_
2\twas\tbe\tAUX\tVBD\tTense=Past\t3\tauxpass\t_\t_
3\tupset\tupset\tADJ\tJJ\t_\t0\troot\t_\tSpaceAfter=No
4\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\tSpaceAfter=No
";

/// "Maria lost her keys. She was upset." with Maria marked animate.
pub fn maria() -> Doc {
    let mut doc = Doc::from_conllu(MARIA).unwrap();
    doc.set_attr(0, "animate", true).unwrap();
    doc
}

fn tok(text: &str, lemma: &str, pos: &str, tag: &str, dep: &str, head: usize) -> TokenSpec {
    TokenSpec::new(text, lemma, pos, tag, dep, head)
}

/// "The kids fed the dog the biscuits. They laughed."
///
/// `kids` and `dog` are animate.
pub fn kids_fed_dog() -> Doc {
    DocBuilder::new()
        .sentence(vec![
            tok("The", "the", "DET", "DT", "det", 1),
            tok("kids", "kid", "NOUN", "NNS", "nsubj", 2)
                .morph("Number=Plur")
                .attr("animate", true),
            tok("fed", "feed", "VERB", "VBD", "ROOT", 2).morph("Tense=Past|VerbForm=Fin"),
            tok("the", "the", "DET", "DT", "det", 4),
            tok("dog", "dog", "NOUN", "NN", "dative", 2)
                .morph("Number=Sing")
                .attr("animate", true),
            tok("the", "the", "DET", "DT", "det", 6),
            tok("biscuits", "biscuit", "NOUN", "NNS", "dobj", 2)
                .morph("Number=Plur")
                .attr("animate", false)
                .ws(""),
            tok(".", ".", "PUNCT", ".", "punct", 2),
        ])
        .sentence(vec![
            tok("They", "they", "PRON", "PRP", "nsubj", 1).morph("Case=Nom|Number=Plur"),
            tok("laughed", "laugh", "VERB", "VBD", "ROOT", 1)
                .morph("Tense=Past|VerbForm=Fin")
                .ws(""),
            tok(".", ".", "PUNCT", ".", "punct", 1).ws(""),
        ])
        .build()
        .unwrap()
}

/// "<pronoun> said the boxes fell on them."
///
/// The subject pronoun is animate; `boxes` heads its own tensed clause and
/// is inanimate.
pub fn said_boxes_fell(pronoun: TokenSpec) -> Doc {
    DocBuilder::new()
        .sentence(vec![
            pronoun.attr("animate", true),
            tok("said", "say", "VERB", "VBD", "ROOT", 1).morph("Tense=Past|VerbForm=Fin"),
            tok("the", "the", "DET", "DT", "det", 3),
            tok("boxes", "box", "NOUN", "NNS", "nsubj", 4)
                .morph("Number=Plur")
                .attr("animate", false),
            tok("fell", "fall", "VERB", "VBD", "ccomp", 1).morph("Tense=Past|VerbForm=Fin"),
            tok("on", "on", "ADP", "IN", "prep", 4),
            tok("them", "they", "PRON", "PRP", "pobj", 5)
                .morph("Case=Acc|Number=Plur")
                .ws(""),
            tok(".", ".", "PUNCT", ".", "punct", 1).ws(""),
        ])
        .build()
        .unwrap()
}

pub fn subject_pronoun(text: &str, lemma: &str, tag: &str, feats: &str) -> TokenSpec {
    tok(text, lemma, "PRON", tag, "nsubj", 1).morph(feats)
}

/// "Jones met Smith. smith waved. They left."
///
/// All three names are singular and animate.
pub fn jones_met_smith() -> Doc {
    let name = |text: &str, dep: &str, head: usize| {
        tok(text, text, "PROPN", "NNP", dep, head)
            .morph("Number=Sing")
            .attr("animate", true)
    };
    DocBuilder::new()
        .sentence(vec![
            name("Jones", "nsubj", 1),
            tok("met", "meet", "VERB", "VBD", "ROOT", 1).morph("Tense=Past|VerbForm=Fin"),
            name("Smith", "dobj", 1).ws(""),
            tok(".", ".", "PUNCT", ".", "punct", 1),
        ])
        .sentence(vec![
            name("smith", "nsubj", 1),
            tok("waved", "wave", "VERB", "VBD", "ROOT", 1)
                .morph("Tense=Past|VerbForm=Fin")
                .ws(""),
            tok(".", ".", "PUNCT", ".", "punct", 1),
        ])
        .sentence(vec![
            tok("They", "they", "PRON", "PRP", "nsubj", 1).morph("Case=Nom|Number=Plur"),
            tok("left", "leave", "VERB", "VBD", "ROOT", 1)
                .morph("Tense=Past|VerbForm=Fin")
                .ws(""),
            tok(".", ".", "PUNCT", ".", "punct", 1).ws(""),
        ])
        .build()
        .unwrap()
}

/// Coreference proposals fixed per token.
#[derive(Default)]
pub struct FixedCoref(BTreeMap<usize, Vec<usize>>);

impl FixedCoref {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn propose(mut self, index: usize, antecedents: &[usize]) -> Self {
        self.0.insert(index, antecedents.to_vec());
        self
    }
}

impl CorefService for FixedCoref {
    fn resolve(&self, _doc: &Doc, index: usize) -> Option<Vec<usize>> {
        self.0.get(&index).cloned()
    }
}

pub type CallLog = Arc<Mutex<Vec<(String, String, String)>>>;

/// Scores animate placeholders (`people`, `his`) and inanimate ones with
/// fixed values, recording every request.
pub struct ScriptedScores {
    pub animate: f64,
    pub inanimate: f64,
    pub calls: CallLog,
}

impl ScriptedScores {
    pub fn new(animate: f64, inanimate: f64) -> (Self, CallLog) {
        let calls = CallLog::default();
        let scores = ScriptedScores {
            animate,
            inanimate,
            calls: calls.clone(),
        };
        (scores, calls)
    }
}

impl WordSeqProbability for ScriptedScores {
    fn score(&self, word: &str, left: &str, right: &str) -> ProbabilityResult<f64> {
        self.calls
            .lock()
            .unwrap()
            .push((word.to_string(), left.to_string(), right.to_string()));
        Ok(if matches!(word, "people" | "his") {
            self.animate
        } else {
            self.inanimate
        })
    }
}

/// A probability service that is never reachable.
pub struct Unreachable;

impl WordSeqProbability for Unreachable {
    fn score(&self, _word: &str, _left: &str, _right: &str) -> ProbabilityResult<f64> {
        Err(ProbabilityError::Unavailable("connection refused".into()))
    }
}

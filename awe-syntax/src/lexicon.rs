//! Closed word lists and tag sets used by the syntactic heuristics.
//!
//! Membership of the predicate lists (`negative_predicate`,
//! `is_attribute_noun`, `empty_head_word`) is closed and deliberately not
//! extended.

use awe_nlp::TokenRef;

pub const TEMPORAL_NOUNS: &[&str] = &[
    "time", "instant", "point", "occasion", "while", "future", "past", "moment", "second",
    "minute", "hour", "day", "week", "month", "year", "century", "millenium", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
    "sunday", "today", "tomorrow", "yesterday", "noon", "midnight", "o'clock", "a.m.", "p.m.",
    "afternoon", "morning", "evening",
];

pub const CORE_TEMPORAL_PREPS: &[&str] = &[
    "in", "on", "over", "upon", "at", "before", "after", "during", "since",
];

pub const FUNCTION_WORD_TAGS: &[&str] = &[
    "TO", "MD", "IN", "SCONJ", "WRB", "WDT", "WP", "WP$", "EX", "ADP", "JJR", "JJS", "RBR", "RBS",
];

pub const CONTENT_TAGS: &[&str] = &[
    "NN", "NNS", "NNP", "NNPS", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "JJ", "JJR", "JJS", "RB",
    "RBR", "RBS", "RP", "GW", "NOUN", "PROPN", "VERB", "ADJ", "ADV", "CD",
];

pub const CONTENT_POS: &[&str] = &["NOUN", "PROPN", "VERB", "ADJ", "ADV", "CD"];

pub const MAJOR_LOCATIVE_PREPOSITIONS: &[&str] = &[
    "to", "from", "in", "on", "at", "upon", "over", "under", "beneath", "beyond", "along",
    "against", "through", "throughout", "by", "near", "into", "onto", "off", "out",
];

pub const ALL_LOCATIVE_PREPOSITIONS: &[&str] = &[
    "above", "across", "against", "along", "amid", "amidst", "among", "amongst", "around", "at",
    "athwart", "atop", "before", "below", "beneath", "beside", "between", "betwixt", "beyond",
    "down", "from", "in", "inside", "into", "near", "off", "on", "opposite", "out", "outside",
    "over", "through", "throughout", "to", "toward", "under", "up", "within", "without", "yon",
    "yonder",
];

pub const DEICTICS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "here", "there", "hither", "thither", "yonder", "yon",
    "now", "then", "anon", "today", "tomorrow", "yesterday", "this", "that", "these", "those",
];

pub const ADJ_NOUN_OR_VERB: &[&str] = &[
    "NN", "NNS", "NNP", "NNPS", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "JJ", "JJR", "JJS", "RP",
    "GW", "NOUN", "PROPN", "VERB", "ADJ",
];

pub const POSSESSIVE_OR_DETERMINER: &[&str] = &["PRP", "PRP$", "WDT", "WP", "WP$", "WRB", "DT"];

pub const PERSONAL_OR_INDEFINITE_PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "they", "them", "their", "theirs", "his", "she", "her", "hers", "everyone", "anyone",
    "everybody", "anybody", "nobody", "someone", "somebody", "myself", "ourselves", "yourself",
    "yourselves", "himself", "herself", "themselves", "one", "oneself", "oneselves", "anothers",
    "others", "another", "some", "many", "few", "none", "who", "whom", "whoever",
];

/// Verbs whose subject is a location (`the box contains ...`).
pub const LOCATIVE_SUBJECT_VERBS: &[&str] = &["contain", "cover", "include", "occupy"];

/// Verbs whose object is a location (`they entered the room`).
pub const LOCATIVE_OBJECT_VERBS: &[&str] = &[
    "abandon", "approach", "clear", "depart", "inhabit", "occupy", "empty", "enter", "escape",
    "exit", "fill", "leave", "near",
];

pub const LOCATIVE_ADVERBS: &[&str] = &["here", "there", "where", "somewhere", "anywhere"];

pub const EXISTENTIAL_THERE: &str = "EX";

pub const PREHEAD_MODIFIERS: &[&str] = &["mark", "nsubj", "nsubjpass", "aux", "neg", "det", "poss"];

pub const QUANTIFYING_DETERMINERS: &[&str] = &[
    "any", "all", "no", "each", "every", "little", "some", "few", "more", "most",
];

pub const SUBJECT_OR_OBJECT_NOM: &[&str] = &["nsubj", "nsubjpass", "dobj"];

pub const CLAUSAL_COMPLEMENTS: &[&str] = &["csubj", "ccomp", "xcomp", "acl", "oprd"];

pub const COMPLEMENTS: &[&str] = &[
    "csubj", "ccomp", "nsubj", "nsubjpass", "dobj", "xcomp", "acl", "oprd", "attr", "acomp",
];

pub const ADJECTIVAL_PREDICATES: &[&str] = &["attr", "oprd", "acomp", "amod"];

pub const REFLEXIVES: &[&str] = &[
    "myself", "ourselves", "yourself", "yourselves", "himself", "herself", "itself", "themself",
    "themselves",
];

pub const FIRST_PERSON_PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves",
];

pub const SECOND_PERSON_PRONOUNS: &[&str] = &["you", "your", "yours", "yourself", "yourselves", "u"];

pub const LIGHT_VERBS: &[&str] = &[
    "have", "make", "give", "present", "take", "adopt", "accept", "defend", "support", "maintain",
    "express",
];

/// Words introducing the standard of a comparison.
pub const COMPARISON_WORDS: &[&str] = &["than", "of"];

const NEGATIVE_PREDICATES: &[&str] = &[
    "lack", "fail", "failure", "absence", "shortage", "false", "wrong", "inaccurate", "incorrect",
];

const ATTRIBUTE_NOUNS: &[&str] = &["lack", "absence", "shortage", "abundance"];

const EMPTY_HEAD_WORDS: &[&str] = &[
    "less", "more", "most", "many", "few", "all", "some", "none", "several", "that", "those",
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "part",
    "portion", "rest", "remnant", "section", "segment",
];

/// Predicates that act like negation when combined with other elements
/// (`lack`, `failure`, `incorrect`).
pub fn negative_predicate(tok: TokenRef<'_>) -> bool {
    NEGATIVE_PREDICATES.contains(&tok.lemma())
}

/// Nouns whose `of` complement carries the content while the head only
/// quantifies it (`a lack of evidence`).
pub fn is_attribute_noun(tok: TokenRef<'_>) -> bool {
    ATTRIBUTE_NOUNS.contains(&tok.lemma())
}

/// Heads that only quantify or partition their complement (`most of`,
/// `part of`, cardinal numbers).
pub fn empty_head_word(tok: TokenRef<'_>) -> bool {
    EMPTY_HEAD_WORDS.contains(&tok.lemma()) || tok.tag() == "CD"
}

pub fn is_content_word(tok: TokenRef<'_>) -> bool {
    CONTENT_TAGS.contains(&tok.tag()) || CONTENT_POS.contains(&tok.pos())
}

pub fn is_function_word(tok: TokenRef<'_>) -> bool {
    FUNCTION_WORD_TAGS.contains(&tok.tag())
}

pub fn is_deictic(tok: TokenRef<'_>) -> bool {
    DEICTICS.contains(&tok.lower().as_str())
}

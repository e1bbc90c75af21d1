//! Rule-based syllable counting for words missing from a hyphenation
//! lexicon.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-A-Za-z0-9'.]").expect("valid syllable pattern"));
static PUNCT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-'.]+").expect("valid syllable pattern"));
static VOWEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[eaoui]").expect("valid syllable pattern"));
static VOWEL_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[eaoui][eaoui]").expect("valid syllable pattern"));
static VOWEL_TRIPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[eaoui][eaoui][eaoui]").expect("valid syllable pattern"));
static VOWEL_CONSONANT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[eaoui][^eaoui]").expect("valid syllable pattern"));

const EXTRA_SYLLABLE: &[&str] = &["serious", "crucial"];
const FEWER_SYLLABLES: &[&str] = &["fortunately", "unfortunately"];

const CO_ONE: &[&str] = &[
    "cool", "coach", "coat", "coal", "count", "coin", "coarse", "coup", "coif", "cook", "coign",
    "coiffe", "coof", "court",
];
const CO_TWO: &[&str] = &["coapt", "coed", "coinci"];
const PRE_ONE: &[&str] = &["preach"];

/// Words ending in `le` whose final `e` is silent.
const SILENT_LE: &[&str] = &[
    "whole", "mobile", "pole", "male", "female", "hale", "pale", "tale", "sale", "aisle", "whale",
    "while",
];

const NEGATIVE_CONTRACTIONS: &[&str] = &["doesn't", "isn't", "shouldn't", "couldn't", "wouldn't"];

/// True when the word starts with a letter or digit.
pub fn alphanum_word(word: &str) -> bool {
    WORD_START.is_match(word) && !PUNCT_START.is_match(word)
}

fn is_vowel(c: char) -> bool {
    "aeoui".contains(c)
}

fn prefix(chars: &[char], n: usize) -> String {
    chars.iter().take(n).collect()
}

/// Estimated syllable count, or `None` for words that do not start with a
/// letter or digit.
///
/// ```
/// assert_eq!(awe_syntax::syllable_count("syllable"), Some(3));
/// assert_eq!(awe_syntax::syllable_count("--"), None);
/// ```
pub fn syllable_count(word: &str) -> Option<usize> {
    let word = word.to_lowercase();
    if !alphanum_word(&word) {
        return None;
    }
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n <= 3 {
        return Some(1);
    }

    let mut syls: isize = 0;
    let mut disc: isize = 0;

    // silent -es / -ed unless the word has several vowel groups
    if word.ends_with("es") || word.ends_with("ed") {
        let pairs = VOWEL_PAIR.find_iter(&word).count();
        let vowel_consonant = VOWEL_CONSONANT.find_iter(&word).count();
        if pairs <= 1 && vowel_consonant <= 1 {
            disc += 1;
        }
    }

    if word.ends_with('e') && !(word.ends_with("le") && !SILENT_LE.contains(&word.as_str())) {
        disc += 1;
    }

    disc += (VOWEL_PAIR.find_iter(&word).count() + VOWEL_TRIPLE.find_iter(&word).count()) as isize;
    let vowels = VOWEL.find_iter(&word).count() as isize;

    if word.starts_with("mc") {
        syls += 1;
    }
    if chars[n - 1] == 'y' && !is_vowel(chars[n - 2]) {
        syls += 1;
    }
    for i in 1..n - 1 {
        if chars[i] == 'y' && !is_vowel(chars[i - 1]) && !is_vowel(chars[i + 1]) {
            syls += 1;
        }
    }
    if word.starts_with("tri") && is_vowel(chars[3]) {
        syls += 1;
    }
    if word.starts_with("bi") && is_vowel(chars[2]) {
        syls += 1;
    }
    if word.ends_with("ian") && !word.ends_with("cian") && !word.ends_with("tian") {
        syls += 1;
    }
    if word.starts_with("co") && is_vowel(chars[2]) {
        let heads = [prefix(&chars, 4), prefix(&chars, 5), prefix(&chars, 6)];
        if heads.iter().any(|h| CO_TWO.contains(&h.as_str())) {
            syls += 1;
        } else if !heads.iter().any(|h| CO_ONE.contains(&h.as_str())) {
            syls += 1;
        }
    }
    if word.starts_with("pre") && is_vowel(chars[3]) && !PRE_ONE.contains(&prefix(&chars, 6).as_str())
    {
        syls += 1;
    }
    if word.ends_with("n't") && NEGATIVE_CONTRACTIONS.contains(&word.as_str()) {
        syls += 1;
    }
    if FEWER_SYLLABLES.contains(&word.as_str()) {
        disc += 1;
    }
    if EXTRA_SYLLABLE.contains(&word.as_str()) {
        syls += 1;
    }

    let count = vowels - disc + syls;
    Some(if count <= 0 { 1 } else { count as usize })
}

//! Built-in boolean token flags.
//!
//! Most flags are computed from the surface text; sentence-boundary flags come
//! from the document structure and `is_stop`/`is_oov` are supplied by the
//! parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::TokenRef;

/// The closed set of built-in flags, addressable by their conventional names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    IsAlpha,
    IsAscii,
    IsDigit,
    IsLower,
    IsUpper,
    IsTitle,
    IsPunct,
    IsLeftPunct,
    IsRightPunct,
    IsSentStart,
    IsSentEnd,
    IsSpace,
    IsBracket,
    IsQuote,
    IsCurrency,
    LikeUrl,
    LikeNum,
    LikeEmail,
    IsOov,
    IsStop,
}

impl Flag {
    pub const ALL: [Flag; 20] = [
        Flag::IsAlpha,
        Flag::IsAscii,
        Flag::IsDigit,
        Flag::IsLower,
        Flag::IsUpper,
        Flag::IsTitle,
        Flag::IsPunct,
        Flag::IsLeftPunct,
        Flag::IsRightPunct,
        Flag::IsSentStart,
        Flag::IsSentEnd,
        Flag::IsSpace,
        Flag::IsBracket,
        Flag::IsQuote,
        Flag::IsCurrency,
        Flag::LikeUrl,
        Flag::LikeNum,
        Flag::LikeEmail,
        Flag::IsOov,
        Flag::IsStop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Flag::IsAlpha => "is_alpha",
            Flag::IsAscii => "is_ascii",
            Flag::IsDigit => "is_digit",
            Flag::IsLower => "is_lower",
            Flag::IsUpper => "is_upper",
            Flag::IsTitle => "is_title",
            Flag::IsPunct => "is_punct",
            Flag::IsLeftPunct => "is_left_punct",
            Flag::IsRightPunct => "is_right_punct",
            Flag::IsSentStart => "is_sent_start",
            Flag::IsSentEnd => "is_sent_end",
            Flag::IsSpace => "is_space",
            Flag::IsBracket => "is_bracket",
            Flag::IsQuote => "is_quote",
            Flag::IsCurrency => "is_currency",
            Flag::LikeUrl => "like_url",
            Flag::LikeNum => "like_num",
            Flag::LikeEmail => "like_email",
            Flag::IsOov => "is_oov",
            Flag::IsStop => "is_stop",
        }
    }

    pub fn from_name(name: &str) -> Option<Flag> {
        Flag::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Evaluate the flag for a token.
    pub fn test(self, tok: TokenRef<'_>) -> bool {
        let text = tok.text();
        match self {
            Flag::IsAlpha => is_alpha(text),
            Flag::IsAscii => text.is_ascii(),
            Flag::IsDigit => is_digit(text),
            Flag::IsLower => is_lower(text),
            Flag::IsUpper => is_upper(text),
            Flag::IsTitle => is_title(text),
            Flag::IsPunct => is_punct(text),
            Flag::IsLeftPunct => LEFT_PUNCT.contains(&text),
            Flag::IsRightPunct => RIGHT_PUNCT.contains(&text),
            Flag::IsSentStart => tok.is_sent_start(),
            Flag::IsSentEnd => tok.is_sent_end(),
            Flag::IsSpace => !text.is_empty() && text.chars().all(char::is_whitespace),
            Flag::IsBracket => BRACKETS.contains(&text),
            Flag::IsQuote => QUOTES.contains(&text),
            Flag::IsCurrency => is_currency(text),
            Flag::LikeUrl => like_url(text),
            Flag::LikeNum => like_num(text),
            Flag::LikeEmail => EMAIL.is_match(text),
            Flag::IsOov => tok.token().is_oov(),
            Flag::IsStop => tok.token().is_stop(),
        }
    }
}

const LEFT_PUNCT: &[&str] = &[
    "(", "[", "{", "<", "\"", "'", "«", "‘", "‚", "‛", "“", "„", "‟", "‹", "``",
];

const RIGHT_PUNCT: &[&str] = &[
    ")", "]", "}", ">", "\"", "'", "»", "’", "”", "›", "''",
];

const BRACKETS: &[&str] = &["(", ")", "[", "]", "{", "}", "<", ">"];

const QUOTES: &[&str] = &[
    "\"", "'", "``", "''", "‘", "’", "‚", "‛", "“", "”", "„", "‟", "«", "»", "‹", "›",
];

const CURRENCY: &[char] = &['$', '£', '€', '¥', '¢', '₹', '₩', '₽', '฿', '₺', '₴', '₦'];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion",
];

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)((https?|ftp)://|www\.)\S+$|^[a-z0-9][a-z0-9\-]*(\.[a-z0-9\-]+)*\.(com|org|net|edu|gov|io|co|uk|de|fr|info)(/\S*)?$")
        .expect("valid url pattern")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

pub fn is_digit(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// At least one cased character and every cased character is lowercase.
pub fn is_lower(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// At least one cased character and every cased character is uppercase.
pub fn is_upper(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Uppercase characters only follow uncased ones, lowercase only cased ones.
pub fn is_title(text: &str) -> bool {
    let mut previous_cased = false;
    let mut seen_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }
    seen_cased
}

pub fn is_punct(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            c.is_ascii_punctuation() && !CURRENCY.contains(&c)
                || matches!(
                    c,
                    '‘' | '’' | '‚' | '‛' | '“' | '”' | '„' | '‟' | '«' | '»' | '‹' | '›' | '–'
                        | '—' | '…' | '¡' | '¿' | '·'
                )
        })
}

pub fn is_currency(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => CURRENCY.contains(&c),
        _ => false,
    }
}

pub fn like_url(text: &str) -> bool {
    text.len() > 3 && URL.is_match(text)
}

/// Digits with optional separators, simple fractions, or number words.
pub fn like_num(text: &str) -> bool {
    let trimmed = text.trim_start_matches(|c| c == '+' || c == '-' || c == '±' || c == '~');
    let plain: String = trimmed.chars().filter(|&c| c != ',' && c != '.').collect();
    if !plain.is_empty() && plain.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    let mut parts = trimmed.splitn(2, '/');
    if let (Some(num), Some(den)) = (parts.next(), parts.next()) {
        if is_digit(num) && is_digit(den) {
            return true;
        }
    }
    NUMBER_WORDS.contains(&text.to_lowercase().as_str())
}

//! Record transformations. Each one replaces the value and prefixes the
//! record name.

use awe_nlp::{AttrValue, Flag, TokenRef};

use crate::error::{QueryError, QueryResult};
use crate::record::Record;
use crate::registry::is_valid_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transform {
    /// Surface text, including trailing whitespace.
    Text,
    /// Length of a string or list value; for spans, the character length.
    Len,
    /// Character length of the record's text.
    CharLen,
    /// Number of tokens covered.
    TokenLen,
    /// A built-in token flag.
    Flag(Flag),
    Log,
    Sqrt,
}

impl Transform {
    pub(crate) fn parse(name: &str) -> QueryResult<Self> {
        let transform = match name {
            "text" => Transform::Text,
            "len" => Transform::Len,
            "clen" => Transform::CharLen,
            "tokenlen" => Transform::TokenLen,
            "log" => Transform::Log,
            "sqrt" => Transform::Sqrt,
            other if is_valid_name(other) => match Flag::from_name(other) {
                Some(flag) => Transform::Flag(flag),
                None => return Err(QueryError::InvalidTransform(name.to_string())),
            },
            _ => return Err(QueryError::InvalidTransform(name.to_string())),
        };
        Ok(transform)
    }

    fn invalid(self, record: &Record) -> QueryError {
        let name = match self {
            Transform::Log => "log",
            Transform::Sqrt => "sqrt",
            Transform::Flag(flag) => flag.name(),
            _ => "transform",
        };
        QueryError::InvalidTransform(format!("{} of {} = {}", name, record.name, record.value))
    }

    /// Apply to a token record.
    pub(crate) fn apply_token(self, record: &mut Record, tok: TokenRef<'_>) -> QueryResult<()> {
        match self {
            Transform::Len => {
                if let Some(len) = record.value.len() {
                    record.value = len.into();
                    record.rename("len");
                }
            }
            Transform::Flag(flag) => {
                record.value = tok.flag(flag).into();
                record.rename(flag.name());
            }
            _ => self.apply_common(record)?,
        }
        Ok(())
    }

    /// Apply to a span record. Flags need a token and are rejected.
    pub(crate) fn apply_span(self, record: &mut Record) -> QueryResult<()> {
        match self {
            Transform::Len => {
                record.value = record.length.into();
                record.rename("clen");
            }
            Transform::Flag(_) => return Err(self.invalid(record)),
            _ => self.apply_common(record)?,
        }
        Ok(())
    }

    fn apply_common(self, record: &mut Record) -> QueryResult<()> {
        match self {
            Transform::Text => {
                record.value = record.text.clone().into();
                record.rename("text");
            }
            Transform::CharLen => {
                record.value = record.length.into();
                record.rename("clen");
            }
            Transform::TokenLen => {
                record.value = record.token_len().into();
                record.rename("tlen");
            }
            Transform::Log => {
                if record.value.is_null() {
                    return Ok(());
                }
                match number(&record.value) {
                    Some(v) if v > 0.0 => {
                        record.value = v.ln().into();
                        record.rename("log");
                    }
                    _ => return Err(self.invalid(record)),
                }
            }
            Transform::Sqrt => {
                // non-numeric and negative values pass through
                if let Some(v) = number(&record.value).filter(|v| *v >= 0.0) {
                    record.value = v.sqrt().into();
                    record.rename("sqrt");
                }
            }
            Transform::Len | Transform::Flag(_) => {}
        }
        Ok(())
    }
}

/// Numeric value of an int or float. Numeric-looking strings do not count.
fn number(value: &AttrValue) -> Option<f64> {
    match value {
        AttrValue::Int(v) => Some(*v as f64),
        AttrValue::Float(v) => Some(*v),
        _ => None,
    }
}

/// Parse every name up front so a bad one fails before any record is built.
pub(crate) fn parse_all(names: &[String]) -> QueryResult<Vec<Transform>> {
    names.iter().map(|n| Transform::parse(n)).collect()
}

//! Record filters.
//!
//! A filter is a function name and a list of accepted values. A record is
//! dropped as soon as it fails one filter. A filter with no accepted values
//! keeps every record, except `not`, which takes no values at all.

use std::cmp::Ordering;

use awe_nlp::{AttrValue, Flag, TokenRef};

use crate::error::{QueryError, QueryResult};
use crate::record::Record;
use crate::registry::{IndicatorRegistry, TokenProperty};

/// A filter as written by the caller: `("pos_", ["NOUN", "VERB"])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub function: String,
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(function: &str, values: &[&str]) -> Self {
        Filter {
            function: function.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CmpOp {
    Eq,
    Gt,
    Lt,
    Ge,
    Le,
}

impl CmpOp {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "==" => CmpOp::Eq,
            ">" => CmpOp::Gt,
            "<" => CmpOp::Lt,
            ">=" => CmpOp::Ge,
            "<=" => CmpOp::Le,
            _ => return None,
        })
    }

    fn holds(self, ord: Ordering) -> bool {
        match self {
            CmpOp::Eq => ord == Ordering::Equal,
            CmpOp::Gt => ord == Ordering::Greater,
            CmpOp::Lt => ord == Ordering::Less,
            CmpOp::Ge => ord != Ordering::Less,
            CmpOp::Le => ord != Ordering::Greater,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Test {
    /// Every accepted value must compare true against the record value.
    Compare(CmpOp),
    /// Drops records whose boolean value is true. Takes no values.
    Not,
    /// Token flag equals `True` or `False`.
    Flag(Flag),
    /// Token string property is one of the accepted values.
    Property(TokenProperty),
    /// Derived attribute matches one of the accepted values; tokens
    /// without the attribute pass.
    Attr(String),
}

/// A validated filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledFilter {
    function: String,
    test: Test,
    values: Vec<String>,
}

fn invalid(filter: &Filter) -> QueryError {
    QueryError::InvalidFilter(filter.function.clone())
}

fn bool_literal(value: &str) -> Option<bool> {
    match value {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    }
}

impl CompiledFilter {
    pub(crate) fn compile(filter: &Filter, registry: &IndicatorRegistry) -> QueryResult<Self> {
        let test = if let Some(op) = CmpOp::from_name(&filter.function) {
            Test::Compare(op)
        } else if filter.function == "not" {
            if !filter.values.is_empty() {
                return Err(invalid(filter));
            }
            Test::Not
        } else {
            match TokenProperty::from_name(&filter.function) {
                Some(TokenProperty::Flag(flag)) => {
                    if filter.values.iter().any(|v| bool_literal(v).is_none()) {
                        return Err(invalid(filter));
                    }
                    Test::Flag(flag)
                }
                Some(prop) if prop.is_string() => Test::Property(prop),
                _ if registry.is_token_attr(&filter.function) => {
                    Test::Attr(filter.function.clone())
                }
                _ => return Err(invalid(filter)),
            }
        };
        Ok(CompiledFilter {
            function: filter.function.clone(),
            test,
            values: filter.values.clone(),
        })
    }

    /// Whether the filter reads the source token rather than the record.
    pub(crate) fn needs_token(&self) -> bool {
        matches!(
            self.test,
            Test::Flag(_) | Test::Property(_) | Test::Attr(_)
        )
    }

    pub(crate) fn function(&self) -> &str {
        &self.function
    }

    /// Whether `record` survives. `tok` is the source token of a token
    /// record and `None` for spans.
    pub(crate) fn accepts(&self, record: &Record, tok: Option<TokenRef<'_>>) -> QueryResult<bool> {
        if self.values.is_empty() && self.test != Test::Not {
            return Ok(true);
        }
        match &self.test {
            Test::Compare(op) => self.compare(*op, &record.value),
            Test::Not => Ok(!matches!(record.value, AttrValue::Bool(true))),
            Test::Flag(flag) => {
                let actual = tok.map_or(false, |t| t.flag(*flag));
                Ok(self.values.iter().any(|v| bool_literal(v) == Some(actual)))
            }
            Test::Property(prop) => {
                let actual = tok.map(|t| prop.value(t)).unwrap_or_default();
                let actual = actual.as_str().unwrap_or_default();
                Ok(self.values.iter().any(|v| v == actual))
            }
            Test::Attr(name) => {
                let actual = match tok.and_then(|t| t.attr(name)) {
                    None | Some(AttrValue::Null) => return Ok(true),
                    Some(actual) => actual,
                };
                Ok(self.values.iter().any(|v| match bool_literal(v) {
                    Some(expected) => actual.is_truthy() == expected,
                    None => actual.to_string() == *v,
                }))
            }
        }
    }

    fn compare(&self, op: CmpOp, value: &AttrValue) -> QueryResult<bool> {
        for accepted in &self.values {
            let holds = match value {
                AttrValue::Bool(actual) => match bool_literal(accepted) {
                    Some(expected) if op == CmpOp::Eq => *actual == expected,
                    _ => return Err(QueryError::InvalidFilter(self.function.clone())),
                },
                AttrValue::Int(_) | AttrValue::Float(_) => {
                    let expected: f64 = accepted
                        .trim()
                        .parse()
                        .map_err(|_| QueryError::InvalidFilter(self.function.clone()))?;
                    let actual = value.as_f64().unwrap_or_default();
                    actual
                        .partial_cmp(&expected)
                        .map_or(false, |ord| op.holds(ord))
                }
                AttrValue::Str(actual) => op.holds(actual.as_str().cmp(accepted.as_str())),
                // null and lists never satisfy a comparison
                _ => false,
            };
            if !holds {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

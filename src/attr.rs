//! Derived attribute values written by upstream annotators.
//!
//! Every token carries an [`AttrBag`]: a name → [`AttrValue`] map that other
//! pipeline stages (animacy, speaker detection, cohesion scores, ...) fill in
//! before the inference layer runs. Values serialize as plain JSON scalars
//! and lists so they can be handed to a scoring pipeline unchanged.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single derived attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Token indices into the owning document.
    Indices(Vec<usize>),
    List(Vec<AttrValue>),
}

impl AttrValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_indices(&self) -> Option<&[usize]> {
        match self {
            AttrValue::Indices(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric view of the value. Booleans count as 0/1 and numeric strings
    /// are parsed, so `"3.5"` yields `Some(3.5)`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            AttrValue::Int(i) => Some(*i as f64),
            AttrValue::Float(f) => Some(*f),
            AttrValue::Str(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Returns true for `Int` and `Float` values only.
    pub fn is_number(&self) -> bool {
        matches!(self, AttrValue::Int(_) | AttrValue::Float(_))
    }

    /// Truthiness: `false`, zero, empty strings/lists and null are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Null => false,
            AttrValue::Bool(b) => *b,
            AttrValue::Int(i) => *i != 0,
            AttrValue::Float(f) => *f != 0.0,
            AttrValue::Str(s) => !s.is_empty(),
            AttrValue::Indices(v) => !v.is_empty(),
            AttrValue::List(v) => !v.is_empty(),
        }
    }

    /// Number of elements for strings (in chars) and lists.
    pub fn len(&self) -> Option<usize> {
        match self {
            AttrValue::Str(s) => Some(s.chars().count()),
            AttrValue::Indices(v) => Some(v.len()),
            AttrValue::List(v) => Some(v.len()),
            _ => None,
        }
    }
}

impl Default for AttrValue {
    fn default() -> Self {
        AttrValue::Null
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "None"),
            AttrValue::Bool(true) => write!(f, "True"),
            AttrValue::Bool(false) => write!(f, "False"),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Float(v) => write!(f, "{}", v),
            AttrValue::Str(s) => write!(f, "{}", s),
            AttrValue::Indices(v) => {
                write!(f, "[")?;
                for (n, i) in v.iter().enumerate() {
                    if n > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", i)?;
                }
                write!(f, "]")
            }
            AttrValue::List(v) => {
                write!(f, "[")?;
                for (n, item) in v.iter().enumerate() {
                    if n > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<usize> for AttrValue {
    fn from(i: usize) -> Self {
        AttrValue::Int(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<Vec<usize>> for AttrValue {
    fn from(v: Vec<usize>) -> Self {
        AttrValue::Indices(v)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttrValue::Null, Into::into)
    }
}

/// Named derived attributes attached to one token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrBag {
    values: BTreeMap<String, AttrValue>,
}

impl AttrBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.values.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_view() {
        assert_eq!(AttrValue::Bool(true).as_f64(), Some(1.0));
        assert_eq!(AttrValue::Int(4).as_f64(), Some(4.0));
        assert_eq!(AttrValue::from("3.5").as_f64(), Some(3.5));
        assert_eq!(AttrValue::from("cats").as_f64(), None);
        assert_eq!(AttrValue::Indices(vec![1]).as_f64(), None);
    }

    #[test]
    fn truthiness() {
        assert!(!AttrValue::Null.is_truthy());
        assert!(!AttrValue::Int(0).is_truthy());
        assert!(AttrValue::Float(0.5).is_truthy());
        assert!(!AttrValue::from("").is_truthy());
        assert!(AttrValue::Indices(vec![0]).is_truthy());
    }

    #[test]
    fn serializes_untagged() {
        let values = vec![
            AttrValue::Null,
            AttrValue::Bool(true),
            AttrValue::Int(3),
            AttrValue::from("x"),
            AttrValue::Indices(vec![1, 2]),
        ];
        insta::assert_snapshot!(serde_json::to_string(&values).unwrap(), @r###"[null,true,3,"x",[1,2]]"###);
    }

    #[test]
    fn bag_round_trip() {
        let mut bag = AttrBag::new();
        bag.insert("animate", true);
        bag.insert("vwp_speaker", vec![0usize, 2]);
        assert_eq!(bag.get("animate"), Some(&AttrValue::Bool(true)));
        assert_eq!(
            bag.get("vwp_speaker").and_then(AttrValue::as_indices),
            Some(&[0usize, 2][..])
        );
        assert!(bag.get("missing").is_none());
        assert_eq!(bag.len(), 2);
    }
}

//! Morphological feature sets (`Tense=Past|Number=Sing`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered key/value morphological features of a token.
///
/// The textual form follows the Universal Dependencies `FEATS` column:
/// features are `Key=Value` pairs joined with `|`, and `_` stands for the
/// empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morph {
    features: Vec<(String, String)>,
}

impl Morph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `FEATS` string. Malformed pairs (no `=`) are skipped.
    pub fn parse(feats: &str) -> Self {
        let feats = feats.trim();
        if feats.is_empty() || feats == "_" {
            return Self::default();
        }
        let features = feats
            .split('|')
            .filter_map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next()?.trim();
                let value = parts.next()?.trim();
                if key.is_empty() {
                    None
                } else {
                    Some((key.to_string(), value.to_string()))
                }
            })
            .collect();
        Self { features }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.features.push((key.to_string(), value.to_string()));
        self
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.features
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, including comma-separated multi-values.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.features
            .iter()
            .filter(move |(k, _)| k == key)
            .flat_map(|(_, v)| v.split(','))
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.features.iter().any(|(k, _)| k == key)
    }

    /// Returns true if `key` carries `value`.
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.values(key).any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.features.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Morph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, (k, v)) in self.features.iter().enumerate() {
            if n > 0 {
                write!(f, "|")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_query() {
        let morph = Morph::parse("Mood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin");
        assert_eq!(morph.get("Tense"), Some("Past"));
        assert!(morph.is("VerbForm", "Fin"));
        assert!(!morph.is("Number", "Plur"));
        assert!(morph.has_key("Mood"));
        assert_eq!(morph.to_string(), "Mood=Ind|Number=Sing|Person=3|Tense=Past|VerbForm=Fin");
    }

    #[test]
    fn empty_and_multi_valued() {
        assert!(Morph::parse("_").is_empty());
        assert!(Morph::parse("").is_empty());
        let morph = Morph::parse("PronType=Int,Rel|bogus");
        assert!(morph.is("PronType", "Rel"));
        assert_eq!(morph.iter().count(), 1);
    }
}

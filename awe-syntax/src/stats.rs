//! Summary statistics over numeric derived attributes, shared with the
//! indicator summaries.

use awe_nlp::TokenRef;

/// Reduction applied by [`summarize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FType {
    Mean,
    Median,
    Stdev,
    Max,
    Min,
}

const LEXICAL_POS: &[&str] = &["NOUN", "PROPN", "VERB", "ADJ", "ADV"];

/// Numeric values of `attr` on content words that are not stop words.
/// Tokens without the attribute, or with a non-numeric value, are skipped.
pub fn lex_feature<'a>(tokens: impl IntoIterator<Item = TokenRef<'a>>, attr: &str) -> Vec<f64> {
    tokens
        .into_iter()
        .filter(|t| !t.token().is_stop() && LEXICAL_POS.contains(&t.pos()))
        .filter_map(|t| t.attr(attr).and_then(|v| v.as_f64()))
        .collect()
}

/// Reduce `items`, ignoring missing values. `None` when nothing remains;
/// `Stdev` also needs more than two items, counting missing ones.
pub fn summarize(items: &[Option<f64>], ftype: FType) -> Option<f64> {
    let values: Vec<f64> = items.iter().flatten().copied().collect();
    if values.is_empty() {
        return None;
    }
    match ftype {
        FType::Mean => Some(mean(&values)),
        FType::Median => Some(median(&values)),
        FType::Stdev => {
            if items.len() > 2 && values.len() > 1 {
                Some(sample_stdev(&values))
            } else {
                None
            }
        }
        FType::Max => values.iter().copied().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.max(v)))
        }),
        FType::Min => values.iter().copied().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.min(v)))
        }),
    }
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value; the mean of the two middle values for even lengths.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_stdev(values: &[f64]) -> f64 {
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

//! Reductions of a record set to a JSON payload.

use std::collections::HashMap;

use awe_nlp::AttrValue;
use awe_syntax::stats::{summarize, FType};
use serde_json::{Map, Value};

use crate::error::{execution_fault, QueryError, QueryResult};
use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Value → frequency.
    Counts,
    Total,
    /// Distinct values, most frequent first.
    Uniq,
    TotalUniq,
    /// Truthy records over the document's token count.
    Proportion,
    Percent,
    Numeric(FType),
    /// The full record table, keyed by row number.
    Table,
}

impl Summary {
    /// `None` and the empty string select the record table.
    pub fn parse(name: Option<&str>) -> QueryResult<Self> {
        let name = match name {
            None | Some("") => return Ok(Summary::Table),
            Some(name) => name,
        };
        let summary = match name {
            "counts" => Summary::Counts,
            "total" => Summary::Total,
            "uniq" => Summary::Uniq,
            "totaluniq" => Summary::TotalUniq,
            "proportion" => Summary::Proportion,
            "percent" => Summary::Percent,
            "mean" => Summary::Numeric(FType::Mean),
            "median" => Summary::Numeric(FType::Median),
            "stdev" => Summary::Numeric(FType::Stdev),
            "max" => Summary::Numeric(FType::Max),
            "min" => Summary::Numeric(FType::Min),
            _ => return Err(QueryError::InvalidSummary(name.to_string())),
        };
        Ok(summary)
    }

    /// Reduce `records`. `doc_len` normalizes proportions. Empty input gives
    /// an empty map, zero or null depending on the summary.
    pub fn apply(self, records: &[Record], doc_len: usize) -> QueryResult<Value> {
        match self {
            Summary::Counts => {
                let mut map = Map::new();
                for (key, count) in frequencies(records) {
                    map.insert(key, count.into());
                }
                Ok(Value::Object(map))
            }
            Summary::Total => Ok(records.len().into()),
            Summary::Uniq => Ok(frequencies(records)
                .into_iter()
                .map(|(key, _)| Value::String(key))
                .collect()),
            Summary::TotalUniq => Ok(frequencies(records).len().into()),
            Summary::Proportion | Summary::Percent => {
                if records.is_empty() || doc_len == 0 {
                    return Ok(Value::Null);
                }
                let truthy = records.iter().filter(|r| r.value.is_truthy()).count();
                let fraction = truthy as f64 / doc_len as f64;
                Ok(if self == Summary::Proportion {
                    fraction.into()
                } else {
                    ((100.0 * fraction).round() as i64).into()
                })
            }
            Summary::Numeric(ftype) => numeric(records, ftype),
            Summary::Table => {
                let mut table = Map::new();
                for (row, record) in records.iter().enumerate() {
                    let value = serde_json::to_value(record).map_err(execution_fault)?;
                    table.insert(row.to_string(), value);
                }
                Ok(Value::Object(table))
            }
        }
    }
}

/// Key under which a value is counted: strings as themselves, anything
/// else as its JSON text.
fn category(value: &AttrValue) -> Option<String> {
    match value {
        AttrValue::Null => None,
        AttrValue::Str(s) => Some(s.clone()),
        other => serde_json::to_string(other).ok(),
    }
}

/// Distinct non-null values with their counts, most frequent first; ties
/// keep first-seen order.
fn frequencies(records: &[Record]) -> Vec<(String, usize)> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in records.iter().filter_map(|r| category(&r.value)) {
        match slots.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn numeric(records: &[Record], ftype: FType) -> QueryResult<Value> {
    let mut items = Vec::with_capacity(records.len());
    let mut integral = true;
    for record in records {
        let item = match &record.value {
            AttrValue::Null => None,
            AttrValue::Int(i) => Some(*i as f64),
            AttrValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            AttrValue::Float(f) => {
                integral = false;
                Some(*f)
            }
            other => {
                return Err(execution_fault(format_args!(
                    "{} summary of non-numeric value {} in '{}'",
                    ftype_name(ftype),
                    other,
                    record.name
                )))
            }
        };
        items.push(item);
    }
    let result = match summarize(&items, ftype) {
        Some(result) => result,
        None => return Ok(Value::Null),
    };
    Ok(match ftype {
        FType::Max | FType::Min if integral => (result as i64).into(),
        _ => result.into(),
    })
}

fn ftype_name(ftype: FType) -> &'static str {
    match ftype {
        FType::Mean => "mean",
        FType::Median => "median",
        FType::Stdev => "stdev",
        FType::Max => "max",
        FType::Min => "min",
    }
}

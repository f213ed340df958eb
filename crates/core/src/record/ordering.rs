use std::cmp::Ordering;

use serde_json::Value;

use super::Record;

/// A single ordering directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub ascending: bool,
}

impl OrderBy {
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: field.into(),
            ascending,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }
}

/// Rank of a JSON type when two non-null values of different types meet.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Natural ordering of two non-null values.
///
/// Values of the same type use that type's ordering. Mixed types fall back
/// to a fixed rank so the comparison stays total.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn field_value<'a>(record: &'a Record, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|v| !v.is_null())
}

/// Stable sort by one field. Missing and `null` values go last in both
/// directions.
pub fn sort_records(records: &mut [Record], order: &OrderBy) {
    records.sort_by(|a, b| {
        match (field_value(a, &order.field), field_value(b, &order.field)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => {
                let cmp = compare_values(x, y);
                if order.ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            }
        }
    });
}

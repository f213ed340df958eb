use serde_json::Value;

use super::Record;

/// An equality constraint on one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

impl Filter {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// A missing field never matches, not even a `null` filter value.
    pub fn matches(&self, record: &Record) -> bool {
        record
            .get(&self.field)
            .is_some_and(|actual| values_equal(actual, &self.value))
    }
}

/// Strict equality without coercion between JSON types.
///
/// Numbers compare by numeric value so `1` and `1.0` are equal, while `1`
/// and `"1"` are not.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

/// True when the record satisfies every filter. No filters match everything.
pub fn matches_all(filters: &[Filter], record: &Record) -> bool {
    filters.iter().all(|filter| filter.matches(record))
}

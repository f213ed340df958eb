use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the record identifier.
pub const ID: &str = "id";
/// Field holding the insertion timestamp.
pub const CREATED_AT: &str = "created_at";
/// Field holding the last update timestamp.
pub const UPDATED_AT: &str = "updated_at";

pub const PROPERTIES_TABLE: &str = "properties";
pub const APPLICATIONS_TABLE: &str = "rental_applications";
pub const MAINTENANCE_TABLE: &str = "maintenance_requests";
pub const MESSAGES_TABLE: &str = "messages";

/// Tables present in a freshly initialized database.
pub const KNOWN_TABLES: [&str; 4] = [
    PROPERTIES_TABLE,
    APPLICATIONS_TABLE,
    MAINTENANCE_TABLE,
    MESSAGES_TABLE,
];

/// One schema-less row: field name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds a record from a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Converts any value that serializes to a JSON object.
    pub fn from_serializable<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        serde_json::from_value(serde_json::to_value(value)?)
    }

    /// Reads the record back as a typed value.
    pub fn into_typed<T: DeserializeOwned>(self) -> serde_json::Result<T> {
        serde_json::from_value(self.into_value())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Returns true when the field exists and is not `null`.
    pub fn has_value(&self, field: &str) -> bool {
        self.0.get(field).is_some_and(|v| !v.is_null())
    }

    /// The record id, when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID).and_then(Value::as_str)
    }

    /// Copies every field of `patch` onto this record, overwriting existing values.
    pub fn merge(&mut self, patch: &Record) {
        for (field, value) in &patch.0 {
            self.0.insert(field.clone(), value.clone());
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Ordered rows of one table.
pub type Table = Vec<Record>;

/// Every table, keyed by name. Serialized as a single JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Database {
    tables: BTreeMap<String, Table>,
}

impl Database {
    /// A database holding each known table, all empty.
    pub fn empty() -> Self {
        Self {
            tables: KNOWN_TABLES
                .iter()
                .map(|name| ((*name).to_string(), Table::new()))
                .collect(),
        }
    }

    /// Parses a persisted blob. Anything that is not an object of arrays of
    /// objects yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Rows of `name`, empty when the table has never been referenced.
    pub fn table(&self, name: &str) -> &[Record] {
        self.tables.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable rows of `name`, creating the table on first reference.
    pub fn table_mut(&mut self, name: &str) -> &mut Table {
        self.tables.entry(name.to_string()).or_default()
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

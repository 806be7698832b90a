//! Entry metadata
//!
//! Entry headers are free-form YAML. Besides the date fields the parser
//! consumes, anything an author writes (`tags`, `author`, nested maps) is
//! carried through to the generated post untouched and in its original order.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A structured metadata value
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<MetaValue>),
    Mapping(EntryMeta),
    Date(NaiveDate),
}

impl MetaValue {
    /// Returns true for `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, MetaValue::Null)
    }

    /// Returns the date value, if this is a date
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            MetaValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Renders the value for error messages
    pub fn describe(&self) -> String {
        match self {
            MetaValue::Null => "null".to_string(),
            MetaValue::Bool(b) => b.to_string(),
            MetaValue::Integer(n) => n.to_string(),
            MetaValue::Float(f) => f.to_string(),
            MetaValue::String(s) => s.clone(),
            MetaValue::Date(d) => d.to_string(),
            MetaValue::Sequence(_) | MetaValue::Mapping(_) => {
                serde_json::to_string(self).unwrap_or_else(|_| "<structured value>".to_string())
            }
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::String(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::String(s)
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        MetaValue::Integer(n)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

impl From<NaiveDate> for MetaValue {
    fn from(d: NaiveDate) -> Self {
        MetaValue::Date(d)
    }
}

impl TryFrom<serde_yaml::Value> for MetaValue {
    type Error = String;

    fn try_from(value: serde_yaml::Value) -> Result<Self, Self::Error> {
        use serde_yaml::Value;

        Ok(match value {
            Value::Null => MetaValue::Null,
            Value::Bool(b) => MetaValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => MetaValue::Integer(i),
                None => MetaValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => MetaValue::String(s),
            Value::Sequence(items) => MetaValue::Sequence(
                items
                    .into_iter()
                    .map(MetaValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(map) => MetaValue::Mapping(EntryMeta::try_from(map)?),
            // Tags carry no meaning for post headers
            Value::Tagged(tagged) => MetaValue::try_from(tagged.value)?,
        })
    }
}

impl Serialize for MetaValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MetaValue::Null => serializer.serialize_unit(),
            MetaValue::Bool(b) => serializer.serialize_bool(*b),
            MetaValue::Integer(n) => serializer.serialize_i64(*n),
            MetaValue::Float(f) => serializer.serialize_f64(*f),
            MetaValue::String(s) => serializer.serialize_str(s),
            MetaValue::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
            MetaValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            MetaValue::Mapping(map) => map.serialize(serializer),
        }
    }
}

/// Insertion-ordered metadata mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryMeta(Vec<(String, MetaValue)>);

impl EntryMeta {
    /// Creates empty metadata
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Gets a value by key
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Sets a value, keeping the position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    /// Removes a value, keeping the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<MetaValue> {
        let idx = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(idx).1)
    }

    /// Returns true if the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over keys in order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Returns the resolved entry date
    pub fn date(&self) -> Option<NaiveDate> {
        self.get("date").and_then(MetaValue::as_date)
    }
}

impl TryFrom<serde_yaml::Mapping> for EntryMeta {
    type Error = String;

    fn try_from(map: serde_yaml::Mapping) -> Result<Self, Self::Error> {
        let mut meta = EntryMeta::new();
        for (key, value) in map {
            let key = mapping_key(key)?;
            meta.insert(key, MetaValue::try_from(value)?);
        }
        Ok(meta)
    }
}

/// Stringifies a scalar YAML mapping key
fn mapping_key(key: serde_yaml::Value) -> Result<String, String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => mapping_key(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err("mapping keys must be scalar values".to_string())
        }
    }
}

impl Serialize for EntryMeta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

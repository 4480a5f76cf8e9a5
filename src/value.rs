//! Structured event values and their canonical form.
//!
//! The host's data-binding layer produces `TemplateValue` trees from event
//! properties. Normalization materializes a tree into the plain JSON shape
//! the template engine and the serializer work on: mappings keep their key
//! order, sequences keep their element order, scalars pass through.

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// A structured value bound from event data.
///
/// Mappings are ordered `(key, value)` pairs with unique keys; pair order is
/// source order and survives normalization and serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<TemplateValue>),
    Mapping(Vec<(String, TemplateValue)>),
}

impl TemplateValue {
    /// Build a sequence from an ordered collection of values.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = TemplateValue>,
    {
        TemplateValue::Sequence(items.into_iter().collect())
    }

    /// Build a mapping from ordered `(key, value)` pairs.
    ///
    /// Keys must be unique; on a duplicate the first occurrence wins.
    pub fn mapping<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, TemplateValue)>,
        K: Into<String>,
    {
        let mut out: Vec<(String, TemplateValue)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            if !out.iter().any(|(existing, _)| *existing == key) {
                out.push((key, value));
            }
        }
        TemplateValue::Mapping(out)
    }

    /// Materialize this tree as the canonical plain JSON form.
    ///
    /// Mappings become objects preserving key order, sequences become arrays
    /// preserving element order, scalars and null pass through. Terminates on
    /// any finite tree; re-importing the result with [`TemplateValue::from`]
    /// and normalizing again yields the same tree.
    pub fn normalize(&self) -> Value {
        match self {
            TemplateValue::Mapping(pairs) => {
                let mut map = Map::with_capacity(pairs.len());
                for (key, value) in pairs {
                    map.insert(key.clone(), value.normalize());
                }
                Value::Object(map)
            }
            TemplateValue::Sequence(items) => {
                Value::Array(items.iter().map(TemplateValue::normalize).collect())
            }
            TemplateValue::Null => Value::Null,
            TemplateValue::Bool(b) => Value::Bool(*b),
            TemplateValue::Integer(i) => Value::Number(Number::from(*i)),
            // JSON has no encoding for non-finite floats
            TemplateValue::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            TemplateValue::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<Value> for TemplateValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => TemplateValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, TemplateValue::from(v)))
                    .collect(),
            ),
            Value::Array(items) => {
                TemplateValue::Sequence(items.into_iter().map(TemplateValue::from).collect())
            }
            Value::Null => TemplateValue::Null,
            Value::Bool(b) => TemplateValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => TemplateValue::Integer(i),
                None => TemplateValue::Float(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => TemplateValue::String(s),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(s: &str) -> Self {
        TemplateValue::String(s.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(s: String) -> Self {
        TemplateValue::String(s)
    }
}

impl From<i64> for TemplateValue {
    fn from(i: i64) -> Self {
        TemplateValue::Integer(i)
    }
}

impl From<f64> for TemplateValue {
    fn from(f: f64) -> Self {
        TemplateValue::Float(f)
    }
}

impl From<bool> for TemplateValue {
    fn from(b: bool) -> Self {
        TemplateValue::Bool(b)
    }
}

impl Serialize for TemplateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.normalize().serialize(serializer)
    }
}

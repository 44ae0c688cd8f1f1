//! Structured key-value fields attached to loggers and scopes
//!
//! This module provides:
//! - `FieldValue`: a single field value with text and JSON renderings
//! - `Fields`: the field set emitted with every log line of a logger or scope
//! - `FieldMapping`: short output names used by the compact JSON formatter

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

/// Prefix reserved for the built-in compact keys (`@m`, `@t`, `@l`)
pub const RESERVED_PREFIX: char = '@';

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Arbitrary structured value, see [`FieldValue::from_serialize`]
    Json(serde_json::Value),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Uint(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl FieldValue {
    /// Capture any serializable value as a field.
    ///
    /// # Example
    ///
    /// ```
    /// use scopelog::FieldValue;
    ///
    /// let value = FieldValue::from_serialize(&vec![1, 2, 3]).unwrap();
    /// assert_eq!(value.to_string(), "[1,2,3]");
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(FieldValue::Json(serde_json::to_value(value)?))
    }

    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Uint(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Json(v) => v.clone(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::Uint(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::Uint(u as u64)
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::Uint(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Json(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

/// Field set emitted with every log line of a logger or scope.
///
/// Once a set is attached to a logger it is shared behind an `Arc` and never
/// edited again; changes produce a new set via [`Fields::merged`].
///
/// # Example
///
/// ```
/// use scopelog::Fields;
///
/// let base = Fields::new().with_field("service", "api").with_field("region", "eu");
/// let request = base.merged(&Fields::new().with_field("region", "us"));
///
/// assert_eq!(request.len(), 2);
/// assert_eq!(request.get("region").unwrap().to_string(), "us");
/// assert_eq!(base.get("region").unwrap().to_string(), "eu");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields {
    fields: HashMap<String, FieldValue>,
}

impl Fields {
    /// Create a new empty field set
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Add a field to the set
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the set (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    /// Copy of `self` with every entry of `other` applied on top.
    ///
    /// Entries of `other` win on key collision. Neither input is modified.
    #[must_use]
    pub fn merged(&self, other: &Fields) -> Fields {
        let mut fields = HashMap::with_capacity(self.fields.len() + other.fields.len());
        for (key, value) in &self.fields {
            fields.insert(key.clone(), value.clone());
        }
        for (key, value) in &other.fields {
            fields.insert(key.clone(), value.clone());
        }
        Fields { fields }
    }

    /// Format fields as `key: value` pairs joined by `, `
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl From<HashMap<String, FieldValue>> for Fields {
    fn from(fields: HashMap<String, FieldValue>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Fields {
    type Item = (String, FieldValue);
    type IntoIter = hash_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = hash_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Short output names for custom fields, applied by the compact JSON formatter.
///
/// Names starting with [`RESERVED_PREFIX`] belong to the built-in keys and are
/// rejected when a mapping is installed on a logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping {
    names: HashMap<String, String>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    /// Add a mapping entry (no validation until installed on a logger)
    #[must_use]
    pub fn with_mapping(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(key.into(), name.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// Output name for `key`, falling back to the key itself when unmapped
    #[inline]
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.names.get(key).map_or(key, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.names.iter()
    }

    /// Whether `name` collides with the built-in compact keys
    pub fn is_reserved(name: &str) -> bool {
        name.starts_with(RESERVED_PREFIX)
    }

    /// Merge `incoming` into this mapping.
    ///
    /// Entries whose short name is reserved are dropped and returned as errors.
    /// For the remaining entries an existing mapping for the same key is kept.
    pub fn merge(&mut self, incoming: &FieldMapping) -> Vec<LoggerError> {
        let mut rejected = Vec::new();
        for (key, name) in &incoming.names {
            if Self::is_reserved(name) {
                rejected.push(LoggerError::reserved_field_name(key, name));
                continue;
            }
            self.names
                .entry(key.clone())
                .or_insert_with(|| name.clone());
        }
        rejected
    }

    /// Build a mapping from `incoming`, dropping reserved entries.
    pub fn validated(incoming: &FieldMapping) -> (FieldMapping, Vec<LoggerError>) {
        let mut mapping = FieldMapping::new();
        let rejected = mapping.merge(incoming);
        (mapping, rejected)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

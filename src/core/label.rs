//! Label values and insertion-ordered label sets
//!
//! This module provides:
//! - `LabelValue`: Typed values for structured labels
//! - `Labels`: An insertion-ordered label-name to value mapping
//!
//! Values stay typed until an encoder renders them, which lets the
//! human-readable encoder apply numeric duration formatting.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for structured labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Time(DateTime<Utc>),
}

impl LabelValue {
    /// Capture an error as a causal-chain description.
    ///
    /// The outermost error is rendered as its short type name, with its
    /// display text in parentheses when non-empty and different from the
    /// type name. Wrapped causes follow their `source()` links and are
    /// rendered by display text, joined with `" < "`.
    ///
    /// Logging *about* an error must never raise, so this conversion is
    /// infallible.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error,
    {
        let type_name = short_type_name::<E>();
        let mut chain = String::from(type_name);

        let text = err.to_string();
        if !text.is_empty() && text != type_name {
            chain.push_str(" (");
            chain.push_str(&text);
            chain.push(')');
        }

        let mut cause = err.source();
        while let Some(e) = cause {
            chain.push_str(" < ");
            chain.push_str(&e.to_string());
            cause = e.source();
        }

        LabelValue::String(chain)
    }
}

/// Last path segment of a type name, e.g. `io::Error` becomes `Error`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::String(s) => write!(f, "{}", s),
            LabelValue::Int(i) => write!(f, "{}", i),
            LabelValue::Float(fl) => write!(f, "{}", fl),
            LabelValue::Bool(b) => write!(f, "{}", b),
            LabelValue::Time(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<String> for LabelValue {
    fn from(s: String) -> Self {
        LabelValue::String(s)
    }
}

impl From<&str> for LabelValue {
    fn from(s: &str) -> Self {
        LabelValue::String(s.to_string())
    }
}

impl From<i64> for LabelValue {
    fn from(i: i64) -> Self {
        LabelValue::Int(i)
    }
}

impl From<i32> for LabelValue {
    fn from(i: i32) -> Self {
        LabelValue::Int(i as i64)
    }
}

impl From<u32> for LabelValue {
    fn from(i: u32) -> Self {
        LabelValue::Int(i as i64)
    }
}

impl From<f64> for LabelValue {
    fn from(f: f64) -> Self {
        LabelValue::Float(f)
    }
}

impl From<bool> for LabelValue {
    fn from(b: bool) -> Self {
        LabelValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for LabelValue {
    fn from(t: DateTime<Utc>) -> Self {
        LabelValue::Time(t)
    }
}

/// Insertion-ordered mapping from label name to value
///
/// Merging is right-biased: inserting an existing name replaces the value
/// but keeps the name's original position, so rendered output stays
/// deterministic across derivations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    fields: IndexMap<String, LabelValue>,
}

impl Labels {
    /// Create a new empty label set
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Add a label, builder style
    pub fn with_label<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<LabelValue>,
    {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Add a label in place
    pub fn insert<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<LabelValue>,
    {
        self.fields.insert(name.into(), value.into());
    }

    /// Merge `other` into `self`; values from `other` win on conflict
    pub fn merge(&self, other: &Labels) -> Labels {
        let mut merged = self.clone();
        for (name, value) in other.iter() {
            merged.fields.insert(name.to_string(), value.clone());
        }
        merged
    }

    pub fn get(&self, name: &str) -> Option<&LabelValue> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabelValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<LabelValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

//! Serial-number normalization
//!
//! Upstream documents carry `serNo`-like values in many shapes: plain numbers,
//! numeric strings, boxed numerics (`{"$numberLong": "5"}`), arrays. Every id
//! that enters the core goes through [`SerialKey::parse`] exactly once.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Boxed-numeric wrapper keys, checked in order
const BOXED_KEYS: &[&str] = &[
    "$numberLong",
    "$numberInt",
    "$numberDouble",
    "$numberDecimal",
    "$oid",
    "long",
    "int",
    "double",
    "value",
];

/// Normalized person identifier
///
/// Numeric ids compare numerically (`"5" == 5 == {"$numberLong":"5"}`);
/// everything else compares as a trimmed, lowercased string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerialKey {
    Numeric(i64),
    Text(String),
}

/// Why a raw value is not an id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerialKeyError {
    #[error("value is null or absent")]
    Missing,

    #[error("value is an empty string")]
    Empty,

    #[error("unsupported id representation: {0}")]
    Unsupported(&'static str),
}

impl SerialKey {
    /// Parse a raw JSON value into a key
    pub fn parse(value: &Value) -> Result<SerialKey, SerialKeyError> {
        match value {
            Value::Null => Err(SerialKeyError::Missing),
            Value::Bool(_) => Err(SerialKeyError::Unsupported("boolean")),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SerialKey::Numeric(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::from_float(f))
                } else {
                    // u64 beyond i64 range
                    Ok(SerialKey::Text(n.to_string()))
                }
            }
            Value::String(s) => Self::parse_str(s),
            Value::Array(items) => items
                .iter()
                .find_map(|item| Self::parse(item).ok())
                .ok_or(SerialKeyError::Missing),
            Value::Object(map) => {
                for key in BOXED_KEYS {
                    if let Some(inner) = map.get(*key) {
                        if let Ok(parsed) = Self::parse(inner) {
                            return Ok(parsed);
                        }
                    }
                }
                Err(SerialKeyError::Unsupported("object"))
            }
        }
    }

    /// Parse a string id, canonicalizing numeric strings
    pub fn parse_str(raw: &str) -> Result<SerialKey, SerialKeyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SerialKeyError::Empty);
        }
        let lowered = trimmed.to_lowercase();
        if lowered == "null" || lowered == "undefined" {
            return Err(SerialKeyError::Missing);
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(SerialKey::Numeric(i));
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Ok(Self::from_float(f));
            }
        }
        Ok(SerialKey::Text(lowered))
    }

    fn from_float(f: f64) -> SerialKey {
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            SerialKey::Numeric(f as i64)
        } else {
            SerialKey::Text(f.to_string())
        }
    }

    /// Canonical string key
    pub fn as_key(&self) -> String {
        self.to_string()
    }

    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            SerialKey::Numeric(i) => Some(*i),
            SerialKey::Text(_) => None,
        }
    }
}

impl fmt::Display for SerialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialKey::Numeric(i) => write!(f, "{}", i),
            SerialKey::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for SerialKey {
    fn from(value: i64) -> Self {
        SerialKey::Numeric(value)
    }
}

/// `normalizeSerialKey`: parse, discarding the reason on failure
pub fn normalize_serial_key(value: &Value) -> Option<SerialKey> {
    SerialKey::parse(value).ok()
}

/// Parse a list of ids (array, or a single scalar), dropping unresolvable entries
pub fn normalize_serial_list(value: &Value) -> Vec<SerialKey> {
    let mut out: Vec<SerialKey> = Vec::new();
    let mut push = |key: SerialKey| {
        if !out.contains(&key) {
            out.push(key);
        }
    };
    match value {
        Value::Array(items) => items.iter().filter_map(normalize_serial_key).for_each(&mut push),
        other => {
            if let Some(key) = normalize_serial_key(other) {
                push(key);
            }
        }
    }
    out
}

//! Typed option values for channel configuration.
//!
//! Query-string options arrive as raw strings. The channel layer wants
//! typed values: `?fsync=true` must come through as a boolean, timeout
//! keys as integers, compressor lists as lists. Coercion happens once,
//! here, so no raw boolean string ever reaches the options mapping.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{TransportError, TransportResult};

/// A typed option value parsed from a URI query string or discovery
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean option (`true`/`false` query values).
    Bool(bool),
    /// Integer option (timeouts, pool sizes).
    Int(i64),
    /// Plain string option.
    String(String),
    /// Comma-separated list option.
    List(Vec<String>),
}

/// Options mapping with case-normalized (lowercase) keys.
pub type OptionsMap = BTreeMap<String, OptionValue>;

impl OptionValue {
    /// Get the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the list value, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Option keys whose values are integers.
const INT_KEYS: &[&str] = &[
    "connecttimeoutms",
    "sockettimeoutms",
    "serverselectiontimeoutms",
    "heartbeatfrequencyms",
    "localthresholdms",
    "maxidletimems",
    "maxpoolsize",
    "minpoolsize",
    "wtimeoutms",
    "zlibcompressionlevel",
];

/// Option keys whose values are comma-separated lists.
const LIST_KEYS: &[&str] = &["compressors", "readpreferencetags"];

/// Coerce a raw query value into a typed one.
///
/// `key` must already be lowercased. Integer keys reject values that do
/// not parse; everything else falls back from boolean to plain string.
pub fn coerce_value(key: &str, raw: &str) -> TransportResult<OptionValue> {
    if INT_KEYS.contains(&key) {
        return raw
            .parse::<i64>()
            .map(OptionValue::Int)
            .map_err(|_| TransportError::invalid_option(key, format!("expected an integer, got '{}'", raw)));
    }

    if LIST_KEYS.contains(&key) {
        let items = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        return Ok(OptionValue::List(items));
    }

    if raw.eq_ignore_ascii_case("true") {
        return Ok(OptionValue::Bool(true));
    }
    if raw.eq_ignore_ascii_case("false") {
        return Ok(OptionValue::Bool(false));
    }

    Ok(OptionValue::String(raw.to_string()))
}

/// Coerce raw query pairs into a case-normalized options mapping.
///
/// Later pairs win when a key repeats.
pub fn coerce_pairs(pairs: &[(String, String)]) -> TransportResult<OptionsMap> {
    let mut options = OptionsMap::new();
    for (key, raw) in pairs {
        let key = key.to_ascii_lowercase();
        let value = coerce_value(&key, raw)?;
        options.insert(key, value);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_booleans() {
        assert_eq!(coerce_value("fsync", "true").unwrap(), OptionValue::Bool(true));
        assert_eq!(coerce_value("ssl", "false").unwrap(), OptionValue::Bool(false));
        assert_eq!(coerce_value("ssl", "False").unwrap(), OptionValue::Bool(false));
    }

    #[test]
    fn test_coerce_integers() {
        assert_eq!(
            coerce_value("connecttimeoutms", "5000").unwrap(),
            OptionValue::Int(5000)
        );

        let err = coerce_value("connecttimeoutms", "soon").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_coerce_lists() {
        assert_eq!(
            coerce_value("compressors", "zlib,snappy").unwrap(),
            OptionValue::List(vec!["zlib".to_string(), "snappy".to_string()])
        );
    }

    #[test]
    fn test_coerce_strings() {
        assert_eq!(
            coerce_value("replicaset", "rs0").unwrap(),
            OptionValue::String("rs0".to_string())
        );
        // "w" takes both numbers and tag names; it stays a string
        assert_eq!(
            coerce_value("w", "majority").unwrap(),
            OptionValue::String("majority".to_string())
        );
    }

    #[test]
    fn test_coerce_pairs_normalizes_keys() {
        let pairs = vec![
            ("replicaSet".to_string(), "rs0".to_string()),
            ("FSYNC".to_string(), "true".to_string()),
        ];
        let options = coerce_pairs(&pairs).unwrap();
        assert_eq!(
            options.get("replicaset"),
            Some(&OptionValue::String("rs0".to_string()))
        );
        assert_eq!(options.get("fsync"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn test_coerce_pairs_last_wins() {
        let pairs = vec![
            ("ssl".to_string(), "true".to_string()),
            ("ssl".to_string(), "false".to_string()),
        ];
        let options = coerce_pairs(&pairs).unwrap();
        assert_eq!(options.get("ssl"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn test_serialize_to_json() {
        let mut options = OptionsMap::new();
        options.insert("ssl".to_string(), OptionValue::Bool(false));
        options.insert("connecttimeoutms".to_string(), OptionValue::Int(5000));
        options.insert(
            "replicaset".to_string(),
            OptionValue::String("rs0".to_string()),
        );

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["ssl"], serde_json::json!(false));
        assert_eq!(json["connecttimeoutms"], serde_json::json!(5000));
        assert_eq!(json["replicaset"], serde_json::json!("rs0"));
    }
}

//! Format-agnostic parsed configuration values.
//!
//! Every parser's output is converted into [`ConfigValue`] before flattening,
//! so the flattener only has to understand one tree shape.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Flattened configuration: dot-separated key path to leaf value.
pub type FlatConfig = BTreeMap<String, ConfigValue>;

/// Flattened key to the key path it was derived from.
pub type KeyProvenance = BTreeMap<String, String>;

/// A parsed configuration value.
///
/// Mappings come in two shapes. `Map` is keyed by strings and is what JSON and
/// TOML always produce. `DynamicMap` keeps arbitrary keys in document order and
/// is produced for YAML mappings that contain at least one non-string key.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<ConfigValue>),
    Map(BTreeMap<String, ConfigValue>),
    DynamicMap(Vec<(ConfigValue, ConfigValue)>),
}

impl ConfigValue {
    /// Short name of the variant, used in CLI output.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Map(_) | Self::DynamicMap(_) => "map",
        }
    }

    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_) | Self::DynamicMap(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::DynamicMap(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// Dynamic keys are written through their Display form so every serializer,
// including serde_json, accepts them as map keys.
impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::DynamicMap(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(&key.to_string(), value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_sequence_and_map() {
        let seq = ConfigValue::from(vec!["a", "b"]);
        assert_eq!(seq.to_string(), "[a, b]");

        let mut entries = BTreeMap::new();
        entries.insert("port".to_string(), ConfigValue::Integer(5432));
        entries.insert("host".to_string(), ConfigValue::from("localhost"));
        assert_eq!(
            ConfigValue::Map(entries).to_string(),
            "{host: localhost, port: 5432}"
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ConfigValue::Null.type_name(), "null");
        assert_eq!(ConfigValue::Float(1.5).type_name(), "float");
        assert_eq!(ConfigValue::DynamicMap(vec![]).type_name(), "map");
        assert!(ConfigValue::Map(BTreeMap::new()).is_map());
        assert!(!ConfigValue::Sequence(vec![]).is_map());
    }

    #[test]
    fn test_serialize_dynamic_map_stringifies_keys() {
        let value = ConfigValue::DynamicMap(vec![
            (ConfigValue::Integer(1), ConfigValue::from("one")),
            (ConfigValue::from("two"), ConfigValue::Integer(2)),
        ]);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({"1": "one", "two": 2}));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(ConfigValue::from("x").as_str(), Some("x"));
        assert_eq!(ConfigValue::Integer(3).as_i64(), Some(3));
        assert_eq!(ConfigValue::Integer(3).as_f64(), None);
        assert_eq!(ConfigValue::Bool(true).as_bool(), Some(true));
    }
}

//! Format resolution and parser dispatch.
//!
//! Each supported parser produces its own value tree; the `From` impls here
//! convert those trees into [`ConfigValue`] so the flattener sees one shape.

use std::error::Error;
use std::path::Path;

use serde::Deserialize;

use crate::domain::models::{ConfigValue, Format};

/// Pick the format name for a file.
///
/// A non-empty `explicit` format is returned verbatim and validated later by
/// [`Format::from_name`]. Otherwise the extension decides, ignoring case:
/// `yaml`/`yml`, `json` and `toml` are recognised and anything else resolves
/// to an empty string.
pub fn resolve_format(path: &Path, explicit: &str) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml" | "yml") => Format::Yaml.name().to_string(),
        Some("json") => Format::Json.name().to_string(),
        Some("toml") => Format::Toml.name().to_string(),
        _ => String::new(),
    }
}

/// Parse raw file bytes with the parser for `format`.
///
/// YAML streams yield their first document only, with `<<` merge keys applied.
pub fn parse_document(
    format: Format,
    bytes: &[u8],
) -> Result<ConfigValue, Box<dyn Error + Send + Sync>> {
    let value: ConfigValue = match format {
        Format::Yaml => parse_yaml(bytes)?.into(),
        Format::Json => serde_json::from_slice::<serde_json::Value>(bytes)?.into(),
        Format::Toml => {
            let text = std::str::from_utf8(bytes)?;
            toml::from_str::<toml::Table>(text)?.into()
        }
    };
    Ok(value)
}

fn parse_yaml(bytes: &[u8]) -> Result<serde_yaml::Value, serde_yaml::Error> {
    let Some(document) = serde_yaml::Deserializer::from_slice(bytes).next() else {
        return Ok(serde_yaml::Value::Null);
    };
    let mut value = serde_yaml::Value::deserialize(document)?;
    value.apply_merge()?;
    Ok(value)
}

fn number(int: Option<i64>, float: Option<f64>) -> ConfigValue {
    match int {
        Some(n) => ConfigValue::Integer(n),
        None => float.map_or(ConfigValue::Null, ConfigValue::Float),
    }
}

impl From<serde_yaml::Value> for ConfigValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => number(n.as_i64(), n.as_f64()),
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Mapping(mapping) => {
                if mapping.iter().all(|(key, _)| key.is_string()) {
                    Self::Map(
                        mapping
                            .into_iter()
                            .filter_map(|(key, value)| match key {
                                Value::String(key) => Some((key, Self::from(value))),
                                _ => None,
                            })
                            .collect(),
                    )
                } else {
                    Self::DynamicMap(
                        mapping
                            .into_iter()
                            .map(|(key, value)| (Self::from(key), Self::from(value)))
                            .collect(),
                    )
                }
            }
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => number(n.as_i64(), n.as_f64()),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        use toml::Value;

        match value {
            Value::String(s) => Self::String(s),
            Value::Integer(n) => Self::Integer(n),
            Value::Float(n) => Self::Float(n),
            Value::Boolean(b) => Self::Bool(b),
            Value::Datetime(dt) => Self::String(dt.to_string()),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Table(table) => table.into(),
        }
    }
}

impl From<toml::Table> for ConfigValue {
    fn from(table: toml::Table) -> Self {
        Self::Map(
            table
                .into_iter()
                .map(|(key, value)| (key, Self::from(value)))
                .collect(),
        )
    }
}

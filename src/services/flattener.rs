use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::models::{ConfigValue, FlatConfig, KeyProvenance};

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Flatten `value` into `out`, joining mapping keys with `.` under `prefix`.
///
/// Sequences and scalars are leaves. A leaf reached with an empty prefix (a
/// bare scalar document) records nothing. Dynamic-map entries whose key is
/// not a string are skipped. On key collisions the later write wins; `Map`
/// entries are visited in lexicographic order and `DynamicMap` entries in
/// document order.
pub fn flatten(
    prefix: &str,
    value: &ConfigValue,
    out: &mut FlatConfig,
    provenance: &mut KeyProvenance,
) {
    match value {
        ConfigValue::Map(entries) => {
            for (key, child) in entries {
                flatten(&join_key(prefix, key), child, out, provenance);
            }
        }
        ConfigValue::DynamicMap(entries) => {
            for (key, child) in entries {
                match key {
                    ConfigValue::String(key) => {
                        flatten(&join_key(prefix, key), child, out, provenance);
                    }
                    other => trace!(prefix, key = %other, "skipping non-string key"),
                }
            }
        }
        leaf => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), leaf.clone());
                provenance.insert(prefix.to_string(), prefix.to_string());
            }
        }
    }
}

/// Flatten a whole document into fresh output maps.
pub fn flatten_value(value: &ConfigValue) -> (FlatConfig, KeyProvenance) {
    let mut out = FlatConfig::new();
    let mut provenance = KeyProvenance::new();
    flatten("", value, &mut out, &mut provenance);
    (out, provenance)
}

/// Rebuild a nested string-keyed map from dotted keys.
///
/// Used when handing flat values to consumers that expect a tree. If a key is
/// both a leaf and the prefix of a longer key, the longer key's table replaces
/// the leaf.
pub fn unflatten(flat: &FlatConfig) -> BTreeMap<String, ConfigValue> {
    let mut root = BTreeMap::new();
    for (key, value) in flat {
        let segments: Vec<&str> = key.split('.').collect();
        insert_path(&mut root, &segments, value.clone());
    }
    root
}

fn insert_path(node: &mut BTreeMap<String, ConfigValue>, segments: &[&str], value: ConfigValue) {
    match segments {
        [] => {}
        [last] => {
            node.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let child = node
                .entry((*head).to_string())
                .or_insert_with(|| ConfigValue::Map(BTreeMap::new()));
            if !matches!(child, ConfigValue::Map(_)) {
                *child = ConfigValue::Map(BTreeMap::new());
            }
            if let ConfigValue::Map(table) = child {
                insert_path(table, rest, value);
            }
        }
    }
}

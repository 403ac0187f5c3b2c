//! Implementation of the `confile show` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{list_table, output, truncate, CommandOutput};
use crate::domain::models::{ConfigValue, FlatConfig, KeyProvenance};
use crate::domain::ports::ConfigSource;
use crate::infrastructure::config::{FileSource, FileSourceOptions};

const MAX_VALUE_WIDTH: usize = 60;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Configuration file to load
    pub path: PathBuf,

    /// Explicit format (yaml, yml, json, toml); inferred from the extension when empty
    #[arg(short, long, env = "CONFILE_FORMAT", default_value = "")]
    pub format: String,

    /// Fail if the file does not exist
    #[arg(short, long, env = "CONFILE_REQUIRED")]
    pub required: bool,

    /// Include the origin of each flattened key
    #[arg(long)]
    pub provenance: bool,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub source: String,
    pub path: PathBuf,
    pub format: String,
    pub values: FlatConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<KeyProvenance>,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        if self.values.is_empty() {
            return format!("No keys found in {}.", self.path.display());
        }

        let mut headers = vec!["key", "value", "type"];
        if self.provenance.is_some() {
            headers.push("origin");
        }
        let mut table = list_table(&headers);

        for (key, value) in &self.values {
            let mut row = vec![
                key.clone(),
                truncate(&render(value), MAX_VALUE_WIDTH),
                value.type_name().to_string(),
            ];
            if let Some(ref provenance) = self.provenance {
                row.push(provenance.get(key).cloned().unwrap_or_default());
            }
            table.add_row(row);
        }

        let count = self.values.len();
        format!(
            "{} ({}, {} key{}):\n{}",
            self.source,
            self.format,
            count,
            if count == 1 { "" } else { "s" },
            table
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn render(value: &ConfigValue) -> String {
    match value {
        ConfigValue::String(s) => format!("{s:?}"),
        other => other.to_string(),
    }
}

pub fn execute(args: ShowArgs, json_mode: bool) -> Result<()> {
    let options = FileSourceOptions {
        format: args.format,
        required: args.required,
    };
    let source = FileSource::new(&args.path, options);

    let (values, provenance) = source
        .load_with_provenance()
        .with_context(|| format!("Failed to load {}", source.name()))?;

    let result = ShowOutput {
        source: source.name(),
        path: args.path,
        format: source.resolved_format(),
        values,
        provenance: args.provenance.then_some(provenance),
    };
    output(&result, json_mode);
    Ok(())
}

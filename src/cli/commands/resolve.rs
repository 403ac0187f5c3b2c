//! Implementation of the `confile resolve` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::error::ConfigSourceError;
use crate::domain::models::Format;
use crate::infrastructure::config::resolve_format;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Configuration file path (need not exist)
    pub path: PathBuf,

    /// Explicit format override
    #[arg(short, long, env = "CONFILE_FORMAT", default_value = "")]
    pub format: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub path: PathBuf,
    pub format: String,
    pub parser: &'static str,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        format!("{}: {} ({} parser)", self.path.display(), self.format, self.parser)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Resolve without touching the filesystem; unsupported formats are an error.
pub fn resolve(args: &ResolveArgs) -> Result<ResolveOutput, ConfigSourceError> {
    let name = resolve_format(&args.path, &args.format);
    let format = Format::from_name(&name).ok_or_else(|| ConfigSourceError::UnsupportedFormat {
        format: name.clone(),
        path: args.path.clone(),
    })?;

    Ok(ResolveOutput {
        path: args.path.clone(),
        format: name,
        parser: format.name(),
    })
}

pub fn execute(args: ResolveArgs, json_mode: bool) -> Result<()> {
    let result = resolve(&args)?;
    output(&result, json_mode);
    Ok(())
}

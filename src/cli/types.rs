//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::resolve::ResolveArgs;
use super::commands::show::ShowArgs;
use crate::infrastructure::logging::{LogConfig, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "confile")]
#[command(about = "Inspect YAML, JSON and TOML configuration files as flat key paths", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "CONFILE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Console log format
    #[arg(long, global = true, env = "CONFILE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Also write JSON logs to this directory
    #[arg(long, global = true, env = "CONFILE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Logging configuration derived from the global flags
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            log_dir: self.log_dir.clone(),
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a configuration file and print its flattened keys
    Show(ShowArgs),

    /// Print the format a configuration file would be parsed as
    Resolve(ResolveArgs),
}

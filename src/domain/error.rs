//! Error types for configuration sources.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::models::Format;

/// Errors produced while loading or watching a configuration source
#[derive(Debug, Error)]
pub enum ConfigSourceError {
    #[error("required config file not found: {}: {source}", .path.display())]
    MissingRequired {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {format} file {}: {source}", .path.display())]
    Parse {
        format: Format,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(
        "unsupported file format {format:?} for {} (supported: yaml, json, toml)",
        .path.display()
    )]
    UnsupportedFormat { format: String, path: PathBuf },

    #[error("watch not supported by this config source")]
    WatchUnsupported,
}

impl ConfigSourceError {
    /// True for the capability-gap sentinel returned by sources that cannot watch.
    pub const fn is_watch_unsupported(&self) -> bool {
        matches!(self, Self::WatchUnsupported)
    }

    /// Format of the parser that failed, if this is a parse error.
    pub const fn parse_format(&self) -> Option<Format> {
        match self {
            Self::Parse { format, .. } => Some(*format),
            _ => None,
        }
    }
}

pub type ConfigSourceResult<T> = Result<T, ConfigSourceError>;

//! File-backed configuration source
//!
//! - Format resolution from extension or explicit override
//! - YAML, JSON and TOML parsing into [`ConfigValue`](crate::domain::models::ConfigValue)
//! - Dot-path flattening of the parsed document
//! - figment `Provider` adapter

pub mod format;
pub mod loader;
pub mod provider;

pub use format::{parse_document, resolve_format};
pub use loader::{load_file, load_file_with_provenance, FileSource, FileSourceOptions};

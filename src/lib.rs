//! Confile - file-backed configuration source
//!
//! Loads a YAML, JSON or TOML file and flattens it into a single-level map
//! from dot-separated key paths to leaf values, ready to be merged by a
//! configuration aggregator.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Parsed value model, the `ConfigSource` port and errors
//! - **Service Layer** (`services`): Flattening of parsed documents
//! - **Infrastructure Layer** (`infrastructure`): File source, parsers, figment adapter, logging
//! - **CLI Layer** (`cli`): Command-line inspection tool
//!
//! # Example
//!
//! ```no_run
//! use confile::{ConfigSource, FileSource, FileSourceOptions};
//!
//! let source = FileSource::new("config/app.yaml", FileSourceOptions::default());
//! let values = source.load()?;
//! if let Some(host) = values.get("database.host") {
//!     println!("database host: {host}");
//! }
//! # Ok::<(), confile::ConfigSourceError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{ConfigValue, FlatConfig, Format, KeyProvenance};
pub use domain::ports::{ChangeEvent, ConfigSource};
pub use domain::{ConfigSourceError, ConfigSourceResult};
pub use infrastructure::config::{
    load_file, load_file_with_provenance, resolve_format, FileSource, FileSourceOptions,
};
pub use services::{flatten, flatten_value, unflatten};

//! Infrastructure layer module
//!
//! Adapters that satisfy the domain ports:
//! - File configuration source (YAML, JSON, TOML)
//! - Logging infrastructure

pub mod config;
pub mod logging;

//! Port trait definitions
//!
//! Contracts that configuration source adapters implement so an aggregator
//! can treat files, environment variables and remote stores uniformly.

pub mod config_source;

pub use config_source::{ChangeEvent, ConfigSource};

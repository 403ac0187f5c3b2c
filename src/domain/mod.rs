//! Domain layer for configuration sources
//!
//! Parsed value model, source contract and error taxonomy.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{ConfigSourceError, ConfigSourceResult};

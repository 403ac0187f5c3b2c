//! Service layer
//!
//! Format-independent transformations applied to parsed configuration.

pub mod flattener;

pub use flattener::{flatten, flatten_value, unflatten};

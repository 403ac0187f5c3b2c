pub mod format;
pub mod value;

pub use format::Format;
pub use value::{ConfigValue, FlatConfig, KeyProvenance};

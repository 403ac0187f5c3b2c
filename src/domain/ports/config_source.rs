use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::domain::error::{ConfigSourceError, ConfigSourceResult};
use crate::domain::models::{FlatConfig, KeyProvenance};

/// Notification that a configuration source's contents changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Name of the source that changed, as returned by [`ConfigSource::name`]
    pub source: String,
    /// When the change was observed
    pub observed_at: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            observed_at: Utc::now(),
        }
    }
}

/// A source of flattened configuration values
///
/// Aggregators hold a list of sources (files, environment, remote stores) and
/// merge their flat maps. Loading is synchronous: one call performs its I/O and
/// parsing to completion and allocates fresh output maps.
///
/// Change notification is optional. Sources that cannot watch keep the
/// default [`ConfigSource::watch`], which returns
/// [`ConfigSourceError::WatchUnsupported`] without allocating a channel.
pub trait ConfigSource: Send + Sync {
    /// Human-readable identifier for diagnostics
    fn name(&self) -> String;

    /// Load the source as a flat key/value map
    ///
    /// # Returns
    /// * `Ok(map)` with dot-separated keys
    /// * `Err(ConfigSourceError)` if the source could not be read or parsed
    fn load(&self) -> ConfigSourceResult<FlatConfig> {
        self.load_with_provenance().map(|(values, _)| values)
    }

    /// Load the source and report where each flattened key came from
    fn load_with_provenance(&self) -> ConfigSourceResult<(FlatConfig, KeyProvenance)>;

    /// Subscribe to change events
    fn watch(&self) -> ConfigSourceResult<mpsc::Receiver<ChangeEvent>> {
        Err(ConfigSourceError::WatchUnsupported)
    }
}

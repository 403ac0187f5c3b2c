//! figment integration
//!
//! Lets a [`FileSource`] be merged into a `Figment` alongside figment's own
//! providers (environment variables, serialized defaults).

use figment::providers::Serialized;
use figment::value::{Dict, Map};
use figment::{Error, Metadata, Profile, Provider, Source};

use super::loader::FileSource;
use crate::domain::models::ConfigValue;
use crate::domain::ports::ConfigSource;
use crate::services::flattener::unflatten;

impl Provider for FileSource {
    fn metadata(&self) -> Metadata {
        Metadata::named(self.name()).source(Source::File(self.path().to_path_buf()))
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let flat = self.load().map_err(|e| Error::from(e.to_string()))?;
        Serialized::defaults(ConfigValue::Map(unflatten(&flat))).data()
    }
}

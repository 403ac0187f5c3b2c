use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::format::{parse_document, resolve_format};
use crate::domain::error::{ConfigSourceError, ConfigSourceResult};
use crate::domain::models::{FlatConfig, Format, KeyProvenance};
use crate::domain::ports::ConfigSource;
use crate::services::flattener::flatten_value;

/// Options for a file-backed configuration source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSourceOptions {
    /// Explicit format (`yaml`, `yml`, `json`, `toml`); empty infers it from the extension
    #[serde(default)]
    pub format: String,

    /// Fail when the file does not exist instead of yielding an empty map
    #[serde(default)]
    pub required: bool,
}

impl FileSourceOptions {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

/// Configuration source backed by a single YAML, JSON or TOML file
///
/// Holds only the path and options; every load reads the file again and
/// returns freshly allocated maps.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    options: FileSourceOptions,
}

impl FileSource {
    /// Create a source for `path`
    pub fn new(path: impl AsRef<Path>, options: FileSourceOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn options(&self) -> &FileSourceOptions {
        &self.options
    }

    /// Format name this source will parse with (possibly empty or unsupported)
    pub fn resolved_format(&self) -> String {
        resolve_format(&self.path, &self.options.format)
    }
}

impl ConfigSource for FileSource {
    fn name(&self) -> String {
        let base = self
            .path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned());
        format!("file:{base}")
    }

    fn load_with_provenance(&self) -> ConfigSourceResult<(FlatConfig, KeyProvenance)> {
        load_file_with_provenance(&self.path, &self.options)
    }
}

/// Load and flatten a configuration file
pub fn load_file(path: &Path, options: &FileSourceOptions) -> ConfigSourceResult<FlatConfig> {
    load_file_with_provenance(path, options).map(|(values, _)| values)
}

/// Load and flatten a configuration file, also returning key provenance
///
/// # Errors
/// * `MissingRequired` if the file is absent and `options.required` is set
/// * `Read` for any other I/O failure
/// * `UnsupportedFormat` if no parser matches the resolved format
/// * `Parse` if the content is malformed for that format
pub fn load_file_with_provenance(
    path: &Path,
    options: &FileSourceOptions,
) -> ConfigSourceResult<(FlatConfig, KeyProvenance)> {
    debug!("Reading config file: {}", path.display());

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if options.required {
                return Err(ConfigSourceError::MissingRequired {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
            debug!("Optional config file {} not found, skipping", path.display());
            return Ok((FlatConfig::new(), KeyProvenance::new()));
        }
        Err(err) => {
            return Err(ConfigSourceError::Read {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };

    let format_name = resolve_format(path, &options.format);
    let format = Format::from_name(&format_name).ok_or_else(|| {
        ConfigSourceError::UnsupportedFormat {
            format: attempted_format(path, &format_name),
            path: path.to_path_buf(),
        }
    })?;
    debug!(format = format.name(), "Resolved format for {}", path.display());

    if bytes.iter().all(u8::is_ascii_whitespace) {
        debug!("Config file {} is empty", path.display());
        return Ok((FlatConfig::new(), KeyProvenance::new()));
    }

    let document = parse_document(format, &bytes).map_err(|source| ConfigSourceError::Parse {
        format,
        path: path.to_path_buf(),
        source,
    })?;

    let (values, provenance) = flatten_value(&document);
    info!(
        path = %path.display(),
        format = format.name(),
        keys = values.len(),
        "Loaded config file"
    );

    Ok((values, provenance))
}

/// Name reported for a format no parser accepts: the override, else the extension
fn attempted_format(path: &Path, resolved: &str) -> String {
    if !resolved.is_empty() {
        return resolved.to_string();
    }
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ConfigValue;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_load_yaml_database_example() {
        let file = write_temp(".yaml", "database:\n  host: localhost\n  port: 5432\n");

        let values = load_file(file.path(), &FileSourceOptions::default()).unwrap();

        assert_eq!(values.len(), 2);
        assert_eq!(values["database.host"], ConfigValue::from("localhost"));
        assert_eq!(values["database.port"], ConfigValue::Integer(5432));
    }

    #[test]
    fn test_load_json_nested() {
        let file = write_temp(".json", r#"{"a":{"b":{"c":1}}}"#);

        let values = load_file(file.path(), &FileSourceOptions::default()).unwrap();

        assert_eq!(values.len(), 1);
        assert_eq!(values["a.b.c"], ConfigValue::Integer(1));
    }

    #[test]
    fn test_load_toml_tables() {
        let file = write_temp(".toml", "[server]\nport = 8080\ntags = [\"a\", \"b\"]\n");

        let values = load_file(file.path(), &FileSourceOptions::default()).unwrap();

        assert_eq!(values["server.port"], ConfigValue::Integer(8080));
        assert_eq!(values["server.tags"], ConfigValue::from(vec!["a", "b"]));
    }

    #[test]
    fn test_missing_optional_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");

        let values = load_file(&path, &FileSourceOptions::default()).unwrap();

        assert!(values.is_empty());
    }

    #[test]
    fn test_missing_required_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = load_file(&path, &FileSourceOptions::required()).unwrap_err();

        assert!(matches!(err, ConfigSourceError::MissingRequired { .. }));
        assert!(err.to_string().contains("required config file not found"));
    }

    #[test]
    fn test_directory_is_a_read_failure() {
        let dir = TempDir::new().unwrap();

        let err = load_file(dir.path(), &FileSourceOptions::required()).unwrap_err();

        assert!(matches!(err, ConfigSourceError::Read { .. }));
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let file = write_temp(".conf", "name: svc\n");

        let err = load_file(file.path(), &FileSourceOptions::default()).unwrap_err();
        assert!(err.to_string().contains("unsupported file format"));

        let options = FileSourceOptions::default().with_format("yml");
        let values = load_file(file.path(), &options).unwrap();
        assert_eq!(values["name"], ConfigValue::from("svc"));
    }

    #[test]
    fn test_unknown_extension_is_named_in_error() {
        let file = write_temp(".ini", "[section]\nkey=value\n");

        let err = load_file(file.path(), &FileSourceOptions::default()).unwrap_err();

        let ConfigSourceError::UnsupportedFormat { format, .. } = &err else {
            panic!("expected UnsupportedFormat, got {err:?}");
        };
        assert_eq!(format, "ini");
        assert!(err.to_string().contains("\"ini\""));
    }

    #[test]
    fn test_whitespace_only_document_is_empty() {
        let file = write_temp(".json", "  \n\t\n");

        let values = load_file(file.path(), &FileSourceOptions::default()).unwrap();

        assert!(values.is_empty());
    }

    #[test]
    fn test_provenance_is_identity() {
        let file = write_temp(".yaml", "log:\n  level: debug\n");

        let (values, provenance) =
            load_file_with_provenance(file.path(), &FileSourceOptions::default()).unwrap();

        assert_eq!(values.len(), provenance.len());
        assert_eq!(provenance["log.level"], "log.level");
    }

    #[test]
    fn test_source_name_uses_base_name() {
        let source = FileSource::new("/etc/app/settings.toml", FileSourceOptions::default());
        assert_eq!(source.name(), "file:settings.toml");
        assert_eq!(source.resolved_format(), "toml");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: FileSourceOptions = serde_yaml::from_str("required: true").unwrap();
        assert!(options.required);
        assert!(options.format.is_empty());
    }
}

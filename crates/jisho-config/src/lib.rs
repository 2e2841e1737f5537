use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::mapping::FieldMappings;
use self::network::NetworkConfig;

pub mod mapping;
pub mod network;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Note field name → record key, filled in this order
    pub field_mappings: FieldMappings,
    pub network: NetworkConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.network.apply_env();
        config
    }

    /// Load a JSON config file; a missing file yields defaults.
    /// Environment overrides are applied on top.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::new());
        }

        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.network.apply_env();

        tracing::info!(
            "Loaded config from {} ({} field mappings)",
            path.display(),
            config.field_mappings.len()
        );
        Ok(config)
    }

    /// Like [`Config::load`], but a broken file falls back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load config: {e}");
            Self::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use jisho_core::RecordKey;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.field_mappings.len(), 6);
        assert_eq!(config.field_mappings.as_slice()[0].field, "Japanese");
        assert_eq!(config.field_mappings.as_slice()[0].key, RecordKey::Kanji);
        assert_eq!(config.network.api_url, "https://jisho.org/api/v1/search/words");
        assert_eq!(config.network.timeout_seconds, 10);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();

        assert_eq!(config.field_mappings, FieldMappings::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "field_mappings": {{"Expression": "kanji", "Meaning": "meanings"}},
                "keyboard_shortcut": "Ctrl+J"
            }}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.field_mappings.len(), 2);
        assert_eq!(config.field_mappings.as_slice()[0].field, "Expression");
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let config = Config::load_or_default(file.path());
        assert_eq!(config.field_mappings, FieldMappings::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.network.timeout_seconds = 3;
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.field_mappings, config.field_mappings);
    }
}

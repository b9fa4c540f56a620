//! Configuration and data directory paths.
//!
//! Settings are read from `~/.cinema-survey/config.toml` when it exists.
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! [store]
//! base_url = "https://pb.example.com"
//! collection = "survey_responses"
//! timeout_secs = 30
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ConfigError;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where completed surveys are stored.
    pub store: StoreConfig,
}

/// Connection settings for the PocketBase record collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the PocketBase instance.
    pub base_url: String,
    /// Name of the collection records are created in.
    pub collection: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
            collection: "survey_responses".to_string(),
            timeout_secs: 30,
        }
    }
}

impl StoreConfig {
    /// URL of the collection's records endpoint.
    pub fn records_url(&self) -> String {
        format!(
            "{}/api/collections/{}/records",
            self.base_url.trim_end_matches('/'),
            self.collection
        )
    }
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Get the data directory (~/.cinema-survey)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".cinema-survey"))
        .unwrap_or_else(|| PathBuf::from(".cinema-survey"))
}

/// Get the config file path (~/.cinema-survey/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// Get the logs directory (~/.cinema-survey/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the log file path (~/.cinema-survey/logs/cinema-survey.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("cinema-survey.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(
            config.store.records_url(),
            "http://localhost:8090/api/collections/survey_responses/records"
        );
        assert_eq!(config.store.timeout_secs, 30);
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let config = Config::parse(
            r#"
            [store]
            base_url = "https://pb.example.com/"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.collection, "survey_responses");
        assert_eq!(
            config.store.records_url(),
            "https://pb.example.com/api/collections/survey_responses/records"
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = Config::parse("[store\nbase_url = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[store]\ncollection = \"responses\"\ntimeout_secs = 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.store.collection, "responses");
        assert_eq!(config.store.timeout_secs, 5);
        assert_eq!(config.store.base_url, "http://localhost:8090");
    }
}

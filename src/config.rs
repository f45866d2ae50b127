use crate::error::ConfigError;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings. Every field has a default, so a settings file only needs
/// to mention what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key the node collection is stored under.
    pub storage_key: String,
    /// Directory used by the file-backed blob store.
    pub data_dir: PathBuf,
    pub notification_duration_ms: u64,
    pub analysis_delay_ms: u64,
    pub suggestion_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: PathBuf::from(".script-builder"),
            notification_duration_ms: 3000,
            analysis_delay_ms: 1500,
            suggestion_delay_ms: 1000,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn suggestion_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "storage_key": "demo", "analysis_delay_ms": 0 }"#)
            .unwrap();
        assert_eq!(settings.storage_key, "demo");
        assert_eq!(settings.analysis_delay(), Duration::ZERO);
        assert_eq!(settings.suggestion_delay_ms, 1000);
        assert_eq!(settings.notification_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Settings::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

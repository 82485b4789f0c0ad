use crate::error::{Result, WarehouseError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for the warehouse console, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarehouseConfig {
    /// Inventory file to load instead of the bundled sample stock
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Default tracing filter when RUST_LOG is unset (e.g. "warn", "debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_level: default_log_level(),
            color: default_color(),
        }
    }
}

impl WarehouseConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WarehouseError::Io)?;
        let config: WarehouseConfig =
            serde_json::from_str(&content).map_err(WarehouseError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WarehouseError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WarehouseError::Serialization)?;
        fs::write(config_path, content).map_err(WarehouseError::Io)?;
        Ok(())
    }

    /// Stores `data_file` in the config under `config_dir`, keeping the other settings
    pub fn remember_data_file<P: AsRef<Path>>(config_dir: P, data_file: &Path) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let mut config = Self::load(config_dir)?;
        config.data_file = Some(fs::canonicalize(data_file).map_err(WarehouseError::Io)?);
        config.save(config_dir)?;
        Ok(config)
    }

    /// Resolves a relative `data_file` against the config directory
    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> Option<PathBuf> {
        self.data_file.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                config_dir.as_ref().join(path)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WarehouseConfig::default();
        assert_eq!(config.data_file, None);
        assert_eq!(config.log_level, "warn");
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = WarehouseConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, WarehouseConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"color": false}"#).unwrap();

        let config = WarehouseConfig::load(temp_dir.path()).unwrap();
        assert!(!config.color);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let config = WarehouseConfig {
            data_file: Some(PathBuf::from("stock.json")),
            log_level: "debug".to_string(),
            color: false,
        };
        config.save(&nested).unwrap();

        let loaded = WarehouseConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_remember_data_file_keeps_other_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"color": false}"#).unwrap();
        let data = temp_dir.path().join("stock.json");
        fs::write(&data, "[]").unwrap();

        let config = WarehouseConfig::remember_data_file(temp_dir.path(), &data).unwrap();
        let loaded = WarehouseConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert!(!loaded.color);
        let stored = loaded.data_path(temp_dir.path()).unwrap();
        assert!(stored.is_absolute());
        assert_eq!(stored, fs::canonicalize(&data).unwrap());
    }

    #[test]
    fn test_remember_missing_data_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("gone.json");
        let result = WarehouseConfig::remember_data_file(temp_dir.path(), &missing);
        assert!(matches!(result, Err(WarehouseError::Io(_))));
        assert!(!temp_dir.path().join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            WarehouseConfig::load(temp_dir.path()),
            Err(WarehouseError::Serialization(_))
        ));
    }

    #[test]
    fn test_data_path_is_relative_to_config_dir() {
        let config = WarehouseConfig {
            data_file: Some(PathBuf::from("stock.json")),
            ..WarehouseConfig::default()
        };
        assert_eq!(
            config.data_path("/etc/warehouse"),
            Some(PathBuf::from("/etc/warehouse/stock.json"))
        );
    }
}

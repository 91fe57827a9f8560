use crate::error::{Result, SolidzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "solidz.json";
const DEFAULT_INPUT_FILE: &str = "data.txt";

/// Configuration for solidz, stored in solidz.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolidzConfig {
    /// Script read when no file is given on the command line
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    /// Colorize event output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_input_file() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_color() -> bool {
    true
}

impl Default for SolidzConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            color: default_color(),
        }
    }
}

impl SolidzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SolidzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from the first directory that has a config file, falling back to
    /// defaults.
    pub fn load_first<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        for dir in dirs {
            let dir: &Path = dir.as_ref();
            if dir.join(CONFIG_FILENAME).exists() {
                return Self::load(dir);
            }
        }
        Ok(Self::default())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Read a key as a string.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "input-file" => Ok(self.input_file.display().to_string()),
            "color" => Ok(self.color.to_string()),
            other => Err(SolidzError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Set a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "input-file" => self.input_file = PathBuf::from(value),
            "color" => {
                self.color = value.parse().map_err(|_| {
                    SolidzError::Config(format!("Invalid value for color: {}", value))
                })?
            }
            other => {
                return Err(SolidzError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["input-file", "color"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolidzConfig::default();
        assert_eq!(config.input_file, PathBuf::from("data.txt"));
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = SolidzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, SolidzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = SolidzConfig::default();
        config.set("input-file", "shapes.txt").unwrap();
        config.set("color", "false").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = SolidzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.input_file, PathBuf::from("shapes.txt"));
        assert!(!loaded.color);
    }

    #[test]
    fn test_load_first_prefers_earlier_dir() {
        let local = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();

        let mut global_config = SolidzConfig::default();
        global_config.set("input-file", "global.txt").unwrap();
        global_config.save(global.path()).unwrap();

        let loaded = SolidzConfig::load_first(&[local.path(), global.path()]).unwrap();
        assert_eq!(loaded.input_file, PathBuf::from("global.txt"));

        let mut local_config = SolidzConfig::default();
        local_config.set("input-file", "local.txt").unwrap();
        local_config.save(local.path()).unwrap();

        let loaded = SolidzConfig::load_first(&[local.path(), global.path()]).unwrap();
        assert_eq!(loaded.input_file, PathBuf::from("local.txt"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SolidzConfig = serde_json::from_str(r#"{"color": false}"#).unwrap();
        assert_eq!(config.input_file, PathBuf::from("data.txt"));
        assert!(!config.color);
    }

    #[test]
    fn test_unknown_key_and_bad_value() {
        let mut config = SolidzConfig::default();
        assert!(config.get("file-ext").is_err());
        assert!(config.set("color", "maybe").is_err());
        assert_eq!(config.get("color").unwrap(), "true");
    }
}

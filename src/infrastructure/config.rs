//! Configuration management

use crate::domain::employee::DEFAULT_NAME_MAX_LEN;
use crate::error::{Result, StaffrollError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Report file written on exit when nothing else is configured
pub const DEFAULT_EXPORT_PATH: &str = "employees_information.txt";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub export_path: PathBuf,
    pub max_records: Option<usize>,
    pub name_max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            max_records: None,
            name_max_len: DEFAULT_NAME_MAX_LEN,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            StaffrollError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config: defaults, then file, then flag overrides
    pub fn resolve(config_file: Option<&Path>, export_override: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Config::default(),
        };

        if let Some(export_path) = export_override {
            config.export_path = export_path;
        }

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_records == Some(0) {
            return Err(StaffrollError::Config(
                "max_records must be greater than zero".to_string(),
            ));
        }
        if self.name_max_len == 0 {
            return Err(StaffrollError::Config(
                "name_max_len must be greater than zero".to_string(),
            ));
        }
        if self.export_path.as_os_str().is_empty() {
            return Err(StaffrollError::Config(
                "export_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::TrackerResult,
    utils::paths::{app_data_dir, config_file_in, ensure_dir, tmp_path},
};

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_CHART_WIDTH: usize = 40;

/// User preferences for presentation and repository setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub chart_width: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
            chart_width: DEFAULT_CHART_WIDTH,
            author_name: None,
            author_email: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves the config file under `FINANCE_TRACKER_HOME` or `~/.finance_tracker`.
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: config_file_in(base.as_ref()),
        }
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> TrackerResult<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> TrackerResult<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TrackerError;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn save_then_load_preserves_preferences() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().join("nested"));
        let config = Config {
            currency_symbol: "€".into(),
            chart_width: 20,
            author_name: Some("Ada".into()),
            author_email: None,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        fs::write(manager.path(), r#"{ "chart_width": 10 }"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.chart_width, 10);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn malformed_files_surface_serde_errors() {
        let temp = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        fs::write(manager.path(), "not json").unwrap();
        assert!(matches!(manager.load(), Err(TrackerError::Serde(_))));
    }
}

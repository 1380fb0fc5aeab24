// Configuration and filesystem locations.
// Reads an optional JSON config from the platform config dir; missing file means defaults.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::app::Tab;
use crate::error::{DashError, Result};
use crate::state::timer::DEFAULT_TICK_INTERVAL;

/// Environment variable overriding `log_filter`.
pub const LOG_ENV: &str = "PSD2DASH_LOG";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "psd2dash")
}

/// Get the config directory (~/.config/psd2dash on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory, which holds the log file.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("psd2dash.log"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between consent playback steps.
    pub tick_interval_ms: u64,
    /// Milliseconds between redraws while idle.
    pub frame_interval_ms: u64,
    /// Tab shown at startup.
    pub initial_tab: Tab,
    /// `tracing` env-filter directive.
    pub log_filter: String,
    /// Alternate catalog JSON; the built-in sample is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            frame_interval_ms: 100,
            initial_tab: Tab::Overview,
            log_filter: "info".to_string(),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults.
    pub fn load_default() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write as pretty JSON, atomically via a temp file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(DashError::Config(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(DashError::Config(
                "frame_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Log filter, preferring the environment override.
    pub fn effective_log_filter(&self) -> String {
        std::env::var(LOG_ENV).unwrap_or_else(|_| self.log_filter.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_interval(), Duration::from_millis(2000));
        assert_eq!(config.initial_tab, Tab::Overview);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = Config {
            tick_interval_ms: 500,
            initial_tab: Tab::Consent,
            catalog_path: Some(PathBuf::from("/tmp/catalog.json")),
            ..Config::default()
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "initial_tab": "sca" }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.initial_tab, Tab::Sca);
        assert_eq!(config.frame_interval_ms, 100);
    }

    #[test]
    fn test_unknown_tab_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "initial_tab": "settings" }"#).unwrap();

        assert!(matches!(Config::load(&path), Err(DashError::Json(_))));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "tick_interval_ms": 0 }"#).unwrap();

        assert!(matches!(Config::load(&path), Err(DashError::Config(_))));
    }
}

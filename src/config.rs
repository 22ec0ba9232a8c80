use crate::domain::{MAX_MINUTES, MIN_MINUTES};
use crate::ticker::DEFAULT_TICK_MS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "ignite-timer";

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Countdown tick period in milliseconds
    pub tick_ms: u64,
    /// Minutes pre-filled in the new-cycle form
    pub default_minutes: u32,
    /// Step used by +/- in the minutes field
    pub minutes_step: u32,
    /// Show the remaining time in the terminal title
    pub update_title: bool,
    /// Desktop notification when a cycle finishes
    pub notify: bool,
    /// Log filter, overridden by RUST_LOG
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            default_minutes: 25,
            minutes_step: 5,
            update_title: true,
            notify: true,
            log_level: "info".to_string(),
        }
    }
}

/// Values passed on the command line, applied over the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub tick_ms: Option<u64>,
    pub minutes: Option<u32>,
    pub no_title: bool,
    pub no_notify: bool,
}

impl Config {
    /// Load config from a file; a missing file yields the defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Self::load_from(path)
            }
            None => Self::load_from(config_file()?),
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(tick_ms) = overrides.tick_ms {
            self.tick_ms = tick_ms;
        }
        if let Some(minutes) = overrides.minutes {
            self.default_minutes = minutes;
        }
        if overrides.no_title {
            self.update_title = false;
        }
        if overrides.no_notify {
            self.notify = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            anyhow::bail!("tick_ms must be greater than zero");
        }
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&self.default_minutes) {
            anyhow::bail!(
                "default_minutes must be between {} and {} (got {})",
                MIN_MINUTES,
                MAX_MINUTES,
                self.default_minutes
            );
        }
        if self.minutes_step == 0 || self.minutes_step > MAX_MINUTES - MIN_MINUTES {
            anyhow::bail!("minutes_step must be between 1 and {}", MAX_MINUTES - MIN_MINUTES);
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Directory holding config.json
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_DIR))
}

/// Path to config.json
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Default log file location
pub fn log_file() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .context("Could not determine data directory")?;
    Ok(base.join(APP_DIR).join("ignite-timer.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_explicit_missing_config_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "default_minutes": 45, "notify": false }"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.default_minutes, 45);
        assert!(!config.notify);
        assert_eq!(config.tick_ms, 1000);
        assert_eq!(config.minutes_step, 5);
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        config.apply_overrides(&ConfigOverrides {
            tick_ms: Some(500),
            minutes: Some(10),
            no_title: true,
            no_notify: false,
        });

        assert_eq!(config.tick_ms, 500);
        assert_eq!(config.default_minutes, 10);
        assert!(!config.update_title);
        assert!(config.notify);
        assert_eq!(config.tick_period(), Duration::from_millis(500));
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.default_minutes = 90;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tick_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.minutes_step = 0;
        assert!(config.validate().is_err());
    }
}

use std::{env, fmt, fs, path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read config file: {0}")]
    Read(std::io::Error),
    #[error("Failed to write config file: {0}")]
    Write(std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("No usable config directory (set XDG_CONFIG_HOME or HOME)")]
    ConfigPathUnavailable,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub check: Check,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Check {
    /// Minutes between two probes of the same URL
    pub interval_minutes: u64,
    /// Per-probe HTTP timeout
    pub timeout_seconds: u64,
}

impl Check {
    /// Interval the scheduler actually runs on
    pub fn interval_seconds(&self) -> u64 {
        self.interval_minutes * 60
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check: Check {
                interval_minutes: 15,
                timeout_seconds: 10,
            },
        }
    }
}

/// Used to ensure we are actually reading a toml file
fn normalize_toml_path(path: &path::Path) -> path::PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().map(|ext| ext != "toml").unwrap_or(true) {
        path.set_extension("toml");
    }
    path
}

/// Get default config path ($XDG_CONFIG_HOME/linkwatch/config.toml or
/// $HOME/.config/...)
fn default_config_path() -> Result<path::PathBuf, Error> {
    let path = if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        path::PathBuf::from(config_home)
    } else if let Some(home_dir) = env::home_dir() {
        home_dir.join(".config")
    } else {
        return Err(Error::ConfigPathUnavailable);
    };

    Ok(path.join("linkwatch/config.toml"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Internal Configuration State:")?;
        writeln!(f, "  Check")?;
        writeln!(f, "    Interval (minutes): {}", self.check.interval_minutes)?;
        writeln!(f, "    Probe timeout (seconds): {}", self.check.timeout_seconds)?;

        Ok(())
    }
}

impl Config {
    /// Generate Config structure from file
    ///
    /// Creates a default config in ~/.config/linkwatch/config.toml
    /// or the specified path, with the name config.toml, if one does not
    /// exist yet.
    pub fn from_config(optional_path: Option<impl AsRef<path::Path>>) -> Result<Self, Error> {
        let config_path: path::PathBuf = if let Some(path) = optional_path {
            normalize_toml_path(path.as_ref())
        } else {
            default_config_path()?
        };

        if config_path.exists() {
            let raw_string = fs::read_to_string(&config_path).map_err(Error::Read)?;
            Ok(toml::from_str(raw_string.as_str())?)
        } else {
            let config = Self::default();
            config.write_config(&config_path)?;
            Ok(config)
        }
    }

    /// Serialize and write a config to a file
    pub fn write_config(&self, path: &path::Path) -> Result<(), Error> {
        let config_str: String = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::Write)?;
        }

        fs::write(path, config_str).map_err(Error::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::from_config(Some(&path)).unwrap();
        assert_eq!(config.check.interval_minutes, 15);
        assert_eq!(config.check.timeout_seconds, 10);
        assert!(path.exists());

        // Second load reads the file it just wrote
        let reloaded = Config::from_config(Some(&path)).unwrap();
        assert_eq!(reloaded.check.interval_minutes, 15);
    }

    #[test]
    fn test_reads_custom_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[check]\ninterval_minutes = 5\ntimeout_seconds = 3\n",
        )
        .unwrap();

        let config = Config::from_config(Some(&path)).unwrap();
        assert_eq!(config.check.interval_minutes, 5);
        assert_eq!(config.check.timeout_seconds, 3);
        assert_eq!(config.check.interval_seconds(), 300);
    }

    #[test]
    fn test_normalizes_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.conf");

        Config::from_config(Some(&path)).unwrap();
        assert!(dir.path().join("config.toml").exists());
    }
}

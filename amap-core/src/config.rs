use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::transport::TransportOptions;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Amap API key used for every request.
    pub api_key: Option<String>,

    /// Request timeout applied to the transport, in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Returns the API key, or an error with a configuration hint.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `amap-weather configure` and enter your Amap API key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Transport options derived from the stored settings.
    pub fn transport_options(&self) -> TransportOptions {
        let mut options = TransportOptions::default();
        if let Some(secs) = self.timeout_secs {
            options = options.with_timeout(Duration::from_secs(secs));
        }
        options
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "amap-weather", "amap-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.require_api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `amap-weather configure`"));
    }

    #[test]
    fn set_and_require_api_key() {
        let mut cfg = Config::default();
        assert!(!cfg.is_configured());

        cfg.set_api_key("KEY".to_string());

        assert!(cfg.is_configured());
        assert_eq!(cfg.require_api_key().unwrap(), "KEY");
    }

    #[test]
    fn transport_options_from_timeout() {
        let cfg = Config { api_key: None, timeout_secs: Some(5) };
        let options = cfg.transport_options();
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));

        let empty = Config::default().transport_options();
        assert_eq!(empty.timeout, None);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Config { api_key: Some("KEY".to_string()), timeout_secs: Some(5) };

        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
        assert_eq!(parsed.timeout_secs, Some(5));
    }
}

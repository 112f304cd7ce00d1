//! # Configuration Management Module
//!
//! Configuration for the pigeonhole CLI, loaded from a TOML file with
//! type-safe serde structures, sensible defaults, and validation.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [office]
//! name = "Pigeonhole Station"
//! usernames = ["Newman", "Jerry"]
//!
//! [logging]
//! level = "info"
//! file = "pigeonhole.log"
//! ```
//!
//! The username list is the fixed set of boxes the office is constructed
//! with; it is validated on load (non-empty, no blanks, no duplicates)
//! because the office itself never adds or removes boxes at runtime.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub office: OfficeConfig,
    pub logging: LoggingConfig,
}

/// Core office settings: a display name and the registered username set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeConfig {
    pub name: String,
    pub usernames: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Validate the username set: the office needs at least one box, and
    /// box names must be non-blank and unique.
    pub fn validate(&self) -> Result<()> {
        if self.office.usernames.is_empty() {
            return Err(anyhow!("office.usernames must list at least one user"));
        }
        let mut seen = HashSet::new();
        for user in &self.office.usernames {
            if user.trim().is_empty() {
                return Err(anyhow!("office.usernames contains a blank username"));
            }
            if !seen.insert(user.as_str()) {
                return Err(anyhow!("duplicate username in office.usernames: {}", user));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            office: OfficeConfig {
                name: "Pigeonhole Station".to_string(),
                usernames: vec!["Newman".to_string(), "Jerry".to_string()],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some("pigeonhole.log".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_round_trips() {
        let config = Config::default();
        config.validate().expect("default config valid");

        let serialized = toml::to_string_pretty(&config).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");
        assert_eq!(parsed.office.name, config.office.name);
        assert_eq!(parsed.office.usernames, config.office.usernames);
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn duplicate_usernames_rejected() {
        let mut config = Config::default();
        config.office.usernames = vec!["Newman".to_string(), "Newman".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_or_empty_username_set_rejected() {
        let mut config = Config::default();
        config.office.usernames.clear();
        assert!(config.validate().is_err());

        config.office.usernames = vec!["  ".to_string()];
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn load_reads_and_validates_file() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().expect("utf8 path");

        Config::create_default(path_str).await.expect("create");
        let loaded = Config::load(path_str).await.expect("load");
        assert_eq!(loaded.office.usernames.len(), 2);
    }
}

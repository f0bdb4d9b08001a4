//! Configuration loading: YAML file with environment variable overrides.
//!
//! The file is mandatory: without a bridge host and bridge id there is
//! nothing to serve. `RUST_LOG` takes precedence over the file's log filter.

use std::path::Path;

use serde::{Deserialize, Deserializer};

use huebridge_adapter_hue::HueConfig;

/// Default location of the configuration file.
pub const DEFAULT_PATH: &str = "server-conf.yml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub server_host: String,
    /// TCP port. Accepts a YAML integer or a quoted string.
    #[serde(deserialize_with = "deserialize_port")]
    pub server_port: u16,
    /// Bridge hostname or IP address.
    pub bridge_host: String,
    /// Authorized bridge username.
    pub bridge_id: String,
    /// Filter directive (`RUST_LOG` syntax).
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "huebridged=info,huebridge=info,tower_http=debug".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u64),
    Text(String),
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let port = match PortValue::deserialize(deserializer)? {
        PortValue::Number(port) => u16::try_from(port).ok(),
        PortValue::Text(port) => port.trim().parse().ok(),
    };
    port.ok_or_else(|| serde::de::Error::custom("server-port must be a number in [1, 65535]"))
}

impl Config {
    /// Load configuration from `path`, then apply environment-variable
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::Parse)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.log_filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server_port == 0 {
            return Err(ConfigError::Validation(
                "server-port must be non-zero".to_string(),
            ));
        }
        if self.bridge_host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "bridge-host must not be empty".to_string(),
            ));
        }
        if self.bridge_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "bridge-id must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Connection settings for the bridge adapter.
    #[must_use]
    pub fn hue_config(&self) -> HueConfig {
        HueConfig {
            host: self.bridge_host.clone(),
            username: self.bridge_id.clone(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// YAML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] serde_yaml::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

//! Configuration for the static file server.

use std::path::Path;

use serde::{Deserialize, Deserializer};

/// Default location of the configuration file.
pub const DEFAULT_PATH: &str = "server_conf.yml";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub server_host: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub server_port: u16,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "huebridge_statics=info,tower_http=debug".to_string()
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
    port.filter(|port| *port != 0)
        .ok_or_else(|| serde::de::Error::custom("server-port must be a number in [1, 65535]"))
}

impl Config {
    /// Load configuration from `path`. `RUST_LOG` overrides `log-filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        if let Ok(val) = std::env::var("RUST_LOG") {
            config.log_filter = val;
        }
        Ok(config)
    }

    fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::Parse)
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
}

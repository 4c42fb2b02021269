use serde::Deserialize;
use std::fs;

use crate::constants::{backend, workflow};
use crate::error::ConfigError;

#[derive(Clone, Debug, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_bus_capacity")]
    pub bus_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            user_id: default_user_id(),
            bus_capacity: default_bus_capacity(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Ok(serde_yaml::from_str(content)?)
    }
}

fn default_base_url() -> String {
    backend::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    backend::DEFAULT_TIMEOUT_SECS
}

fn default_user_id() -> String {
    workflow::DEFAULT_USER_ID.to_string()
}

fn default_bus_capacity() -> usize {
    workflow::DEFAULT_BUS_CAPACITY
}

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Optional TOML file carrying connection details and call defaults, so the
/// CLI does not need the token on every invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub connection: ConnectionConfig,
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub duration_seconds: Option<f64>,
}

impl TomlConfig {
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

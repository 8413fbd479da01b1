use crate::config::toml_config::TomlConfig;
use crate::domain::model::DEFAULT_DURATION_SECS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RampError, Result};
use crate::utils::validation::{validate_entity_ids, validate_range, validate_url, Validate};
use clap::Parser;

const DEFAULT_BASE_URL: &str = "http://homeassistant.local:8123";

#[derive(Debug, Clone, Parser)]
#[command(name = "volramp")]
#[command(about = "Ramp media player volume smoothly over a duration")]
pub struct CliConfig {
    /// Home Assistant base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Long-lived access token
    #[arg(long)]
    pub token: Option<String>,

    /// Media player entity ids
    #[arg(long = "entity", value_delimiter = ',')]
    pub entities: Vec<String>,

    /// Target volume: fraction 0..=1 or percent up to 100
    #[arg(long)]
    pub volume: f64,

    /// Ramp duration in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// TOML config file with connection defaults
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fill in values the command line left unset from a config file.
    /// Flags always win over the file.
    pub fn apply_file(&mut self, file: &TomlConfig) {
        if self.base_url.is_none() {
            self.base_url = file.connection.base_url.clone();
        }
        if self.token.is_none() {
            self.token = file.connection.token.clone();
        }
        if self.duration.is_none() {
            self.duration = file.defaults.as_ref().and_then(|d| d.duration_seconds);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn token(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }

    fn default_duration(&self) -> f64 {
        self.duration.unwrap_or(DEFAULT_DURATION_SECS)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", self.base_url())?;
        if self.token().is_empty() {
            return Err(RampError::MissingConfigError {
                field: "token".to_string(),
            });
        }
        if self.entities.is_empty() {
            return Err(RampError::MissingConfigError {
                field: "entities".to_string(),
            });
        }
        validate_entity_ids("entities", &self.entities)?;
        validate_range("volume", self.volume, 0.0, 100.0)?;
        Ok(())
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::hass::HassClient;
pub use core::{dispatcher::Dispatcher, ramp::RampExecutor, service::VolumeService};
pub use domain::model::{SetVolumeCall, TargetRef, TargetSelector, TargetSnapshot};
pub use utils::error::{RampError, Result};

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use volramp::adapters::{clock::TokioClock, events::TracingEvents, resolver::ExplicitResolver};
use volramp::domain::model::SetVolumeCall;
use volramp::domain::ports::ConfigProvider;
use volramp::utils::{logger, validation::Validate};
use volramp::{CliConfig, HassClient, TargetSelector, TomlConfig, VolumeService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting volramp CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        let file = TomlConfig::load(&path)
            .with_context(|| format!("failed to load config file {}", path))?;
        config.apply_file(&file);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let call = SetVolumeCall {
        target: TargetSelector {
            entity_ids: config.entities.clone(),
            ..TargetSelector::default()
        },
        volume: config.volume,
        duration: Some(config.default_duration()),
    };

    let backend = Arc::new(HassClient::from_config(&config));
    let service = VolumeService::new(
        Arc::new(ExplicitResolver),
        backend,
        Arc::new(TokioClock),
        Arc::new(TracingEvents),
    );

    service.handle(call).await?;

    tracing::info!("Volume ramp completed");
    Ok(())
}

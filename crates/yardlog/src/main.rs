use anyhow::{Context as _, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use application::{FleetService, OperationLog};
use infrastructure::{AppConfig, JpegImageNormalizer, RegistryStore};
use yardlog::cli::Cli;
use yardlog::commands::{self, App};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config_dir).context("failed to load configuration")?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("🚚 yardlog starting...");

    let store = RegistryStore::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    if let Err(e) = store.ensure_schema().await {
        error!("❌ Schema initialization failed: {}", e);
        let _ = store.close().await;
        return Err(e).context("schema initialization failed");
    }
    info!("✅ Schema ready");

    let fleet = FleetService::new(Arc::new(store.vehicles()));
    let log = OperationLog::new(
        Arc::new(store.operations()),
        Arc::new(JpegImageNormalizer::from_config(&config.imaging)),
    );
    let app = App {
        store: store.clone(),
        fleet,
        log,
    };

    let result = commands::run(&app, cli.command).await;
    if let Err(e) = store.close().await {
        error!("Failed to close database pool: {}", e);
    }
    result
}

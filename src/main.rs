use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use afisha_watch::{
    config::{Config, LogFormat},
    services::WatcherService,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log));
    match config.app.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }

    info!("Starting afisha watcher");
    info!("Preferences: {:?}", config.preferences);

    let state = AppState::new(config).context("Failed to create HTTP clients")?;

    // Сбрасываем старые апдейты бота
    if let Err(e) = state.telegram.delete_webhook(true).await {
        warn!("Failed to delete Telegram webhook: {}", e);
    }

    WatcherService::new(state).run().await;
    Ok(())
}

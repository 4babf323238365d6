pub mod config;
pub mod error;
pub mod filters;
pub mod http_client;
pub mod models;
pub mod normalize;
pub mod notification;
pub mod parser;
pub mod services;
pub mod telegram_client;

use std::sync::Arc;
use std::time::Duration;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub fetcher: http_client::PageFetcher,
    pub telegram: telegram_client::TelegramClient,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, reqwest::Error> {
        let timeout = Duration::from_secs(config.afisha.timeout_seconds);
        let fetcher = http_client::PageFetcher::new(timeout)?;
        let telegram = telegram_client::TelegramClient::new(
            reqwest::Client::builder().timeout(timeout).build()?,
            config.telegram.api_url.clone(),
            config.telegram.bot_token.clone(),
        );

        Ok(Arc::new(Self { config, fetcher, telegram }))
    }
}

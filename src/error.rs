use thiserror::Error;

/// Ошибки разбора HTML страниц афиши и схемы зала.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Не найден контейнер афиши (сайт поменял разметку).
    #[error("listing container not found: missing `{step}`")]
    Structure { step: &'static str },

    #[error("malformed show row: {reason}")]
    MalformedShow { reason: String },

    #[error("malformed seat descriptor `{descriptor}`: {reason}")]
    MalformedSeat { descriptor: String, reason: String },
}

/// Ошибки Telegram Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API error ({status}): {description}")]
    Api { status: u16, description: String },
}

/// Ошибки одного цикла опроса. Ловятся на границе цикла и только логируются.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} for {url}")]
    Http { url: String, status: u16 },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Telegram(#[from] TelegramError),
}

/// Ошибки загрузки конфигурации при старте.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("failed to read preferences: {0}")]
    Preferences(#[from] config::ConfigError),
}

use reqwest::Url;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

mod preferences;

pub use preferences::{split_list, Preferences, SectionRows};

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub afisha: AfishaConfig,
    pub telegram: TelegramConfig,
    pub schedule: ScheduleConfig,
    pub preferences: Preferences,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format `{}`", other)),
        }
    }
}

// Сайт театра
#[derive(Debug, Clone)]
pub struct AfishaConfig {
    pub url: Url,
    pub timeout_seconds: u64,
}

// Настройки Telegram бота
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub api_url: String,
    pub recipients: Vec<String>,
}

// Паузы между запросами
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub show_delay: DelayRange,
    pub cycle_delay: DelayRange,
}

/// Случайная пауза в секундах, границы включительно.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min_seconds: u64,
    pub max_seconds: u64,
}

impl DelayRange {
    pub fn sample(&self) -> Duration {
        Duration::from_secs(fastrand::u64(self.min_seconds..=self.max_seconds))
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Собирает конфигурацию из произвольного источника переменных.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let parsed = |name: &'static str, default: &str| -> Result<u64, ConfigError> {
            let raw = lookup(name).unwrap_or_else(|| default.to_string());
            raw.trim().parse().map_err(|e| ConfigError::Invalid {
                name,
                reason: format!("`{}`: {}", raw, e),
            })
        };

        let url_raw = required("URL_AFISHA")?;
        let url = Url::parse(&url_raw).map_err(|e| ConfigError::Invalid {
            name: "URL_AFISHA",
            reason: e.to_string(),
        })?;

        let recipients = split_list(&required("RECIPIENTS")?);
        if recipients.is_empty() {
            return Err(ConfigError::Invalid {
                name: "RECIPIENTS",
                reason: "no chat ids listed".to_string(),
            });
        }

        let log_format = lookup("LOG_FORMAT")
            .unwrap_or_else(|| "pretty".to_string())
            .parse()
            .map_err(|reason| ConfigError::Invalid { name: "LOG_FORMAT", reason })?;

        let show_delay = delay_range(
            "SHOW_DELAY_MIN_SECONDS",
            parsed("SHOW_DELAY_MIN_SECONDS", "10")?,
            parsed("SHOW_DELAY_MAX_SECONDS", "60")?,
        )?;
        let cycle_delay = delay_range(
            "CYCLE_DELAY_MIN_SECONDS",
            parsed("CYCLE_DELAY_MIN_SECONDS", "300")?,
            parsed("CYCLE_DELAY_MAX_SECONDS", "900")?,
        )?;

        let preferences_path = PathBuf::from(
            lookup("PREFERENCES_FILE").unwrap_or_else(|| "preferences.toml".to_string()),
        );
        let mut preferences = Preferences::load(&preferences_path)?;
        preferences.override_lists(lookup("DESIRED_SHOWS"), lookup("DESIRED_DAYS"));

        Ok(Config {
            app: AppConfig {
                rust_log: lookup("RUST_LOG").unwrap_or_else(|| "afisha_watch=info".to_string()),
                log_format,
            },
            afisha: AfishaConfig {
                url,
                timeout_seconds: parsed("HTTP_TIMEOUT_SECONDS", "30")?,
            },
            telegram: TelegramConfig {
                bot_token: required("BOT_TOKEN")?,
                api_url: lookup("TELEGRAM_API_URL")
                    .unwrap_or_else(|| "https://api.telegram.org".to_string())
                    .trim_end_matches('/')
                    .to_string(),
                recipients,
            },
            schedule: ScheduleConfig { show_delay, cycle_delay },
            preferences,
        })
    }
}

fn delay_range(name: &'static str, min_seconds: u64, max_seconds: u64) -> Result<DelayRange, ConfigError> {
    if min_seconds > max_seconds {
        return Err(ConfigError::Invalid {
            name,
            reason: format!("min {} is greater than max {}", min_seconds, max_seconds),
        });
    }
    Ok(DelayRange { min_seconds, max_seconds })
}

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::TelegramError;
use crate::notification::Notification;

/// Клиент Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    api_url: String,
    bot_token: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(client: Client, api_url: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            bot_token: bot_token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.bot_token, method)
    }

    /// Сбрасывает webhook и накопившиеся апдейты перед стартом.
    pub async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<(), TelegramError> {
        self.call("deleteWebhook", json!({ "drop_pending_updates": drop_pending_updates }))
            .await?;
        info!("Telegram webhook deleted");
        Ok(())
    }

    /// Отправляет уведомление одному получателю.
    pub async fn send_notification(
        &self,
        chat_id: &str,
        notification: &Notification,
    ) -> Result<(), TelegramError> {
        let body = json!({
            "chat_id": chat_id,
            "text": notification.text,
            "entities": notification.entities,
            "reply_markup": {
                "inline_keyboard": [[notification.button]]
            }
        });

        self.call("sendMessage", body).await?;
        debug!("Notification delivered to {}", chat_id);
        Ok(())
    }

    async fn call(&self, method: &str, body: serde_json::Value) -> Result<(), TelegramError> {
        let resp = self
            .client
            .post(self.method_url(method))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        let parsed: Option<ApiResponse> = serde_json::from_str(&text).ok();

        match parsed {
            Some(ApiResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(ApiResponse { description: Some(description), .. }) => Err(TelegramError::Api {
                status: status.as_u16(),
                description,
            }),
            _ => Err(TelegramError::Api { status: status.as_u16(), description: text }),
        }
    }
}

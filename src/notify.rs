//! Telegram notifier: best-effort text messages to one fixed chat.
//!
//! Delivery failures are logged and contained here; a missed
//! notification never takes the poll loop down.

use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info};

/// Default Telegram Bot API base.
pub const TELEGRAM_API: &str = "https://api.telegram.org";

/// Sink for outgoing chat messages. Infallible by contract — an
/// implementation absorbs its own delivery failures.
#[allow(async_fn_in_trait)]
pub trait Messenger {
    async fn send_message(&self, text: &str);
}

/// Sends messages to a single chat via the Telegram Bot API.
pub struct Notifier {
    http: reqwest::Client,
    token: SecretString,
    chat_id: String,
    api_base: String,
}

impl Notifier {
    pub fn new(token: SecretString, chat_id: String) -> Self {
        Self::with_api_base(token, chat_id, TELEGRAM_API)
    }

    /// Notifier pointed at a non-default API base (loopback servers in tests).
    pub fn with_api_base(token: SecretString, chat_id: String, api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            chat_id,
            api_base: api_base.into(),
        }
    }
}

impl Messenger for Notifier {
    async fn send_message(&self, text: &str) {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.api_base,
            self.token.expose_secret()
        );

        let result = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!("message sent to chat");
            }
            Ok(response) => {
                error!(status = %response.status(), "telegram rejected message");
            }
            Err(e) => {
                error!("failed to send message: {e}");
            }
        }
    }
}

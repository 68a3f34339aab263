//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast if required vars are missing.
//! Sensitive values wrapped in secrecy::SecretString to prevent log leaks.

use crate::error::{Error, Result};
use secrecy::SecretString;

#[derive(Debug)]
pub struct Config {
    /// OAuth token for the Practicum status endpoint.
    pub practicum_token: SecretString,
    /// Telegram bot token.
    pub telegram_token: SecretString,
    /// Chat that receives status updates and error reports.
    pub telegram_chat_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    /// An empty value counts as missing.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            practicum_token: SecretString::from(required_var("PRACTICUM_TOKEN")?),
            telegram_token: SecretString::from(required_var("TELEGRAM_TOKEN")?),
            telegram_chat_id: required_var("TELEGRAM_CHAT_ID")?,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::Config(format!("required environment variable {name} is not set")))
}

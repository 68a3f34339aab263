//! Practicum API client: one authenticated GET per poll cycle.

use crate::error::{Error, Result};
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

/// The fixed homework-status endpoint.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Source of homework-status responses — the seam the poll loop
/// consumes, so tests can script responses without a network.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    /// Fetch status changes since `from_date` (epoch seconds).
    async fn homework_statuses(&self, from_date: i64) -> Result<Value>;
}

/// HTTP client for the Practicum status endpoint.
pub struct PracticumClient {
    http: reqwest::Client,
    token: SecretString,
    endpoint: String,
}

impl PracticumClient {
    pub fn new(token: SecretString) -> Self {
        Self::with_endpoint(token, ENDPOINT)
    }

    /// Client pointed at a non-default endpoint (loopback servers in tests).
    pub fn with_endpoint(token: SecretString, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            endpoint: endpoint.into(),
        }
    }
}

impl StatusSource for PracticumClient {
    /// GET the endpoint with an `OAuth` header and a `from_date` cursor.
    ///
    /// Returns the parsed JSON body on 200. Any other status becomes
    /// [`Error::ServerResponse`] carrying the cursor, status code,
    /// reason phrase, and raw body. Transport failures propagate as
    /// [`Error::Transport`] and flow into the same loop-level handling.
    async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!(from_date, "requesting homework statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .header(
                AUTHORIZATION,
                format!("OAuth {}", self.token.expose_secret()),
            )
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ServerResponse {
                from_date,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
